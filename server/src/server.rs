use std::net::SocketAddr;
use std::sync::Arc;

use thiserror::Error;
use tokio::net::TcpListener;
use tracing::info;

use authorize_core::client::ClientStore;
use authorize_core::configuration::ProviderConfiguration;
use authorize_core::response_type::resolver::ResponseTypeResolver;
use authorize_core::services::authorization::AuthorizationService;

use crate::routes::oauth_router;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Error running authorization server {}", .0)]
    Io(#[from] std::io::Error),
}

/// Embedding entry point for deployments: binds a TCP listener and serves
/// the authorization router wired to the given token factory and client
/// registry. Construct it from the host application's `main`; in-process
/// callers (and the integration suite) drive [`oauth_router`] directly
/// instead of opening a socket.
pub struct AuthorizationServer<R> {
    authorization_service: Arc<AuthorizationService<R>>,
    clients: Arc<dyn ClientStore>,
    provider: Arc<ProviderConfiguration>,
}

impl<R> AuthorizationServer<R>
where
    R: ResponseTypeResolver + 'static,
{
    pub fn new(
        authorization_service: Arc<AuthorizationService<R>>,
        clients: Arc<dyn ClientStore>,
        provider: Arc<ProviderConfiguration>,
    ) -> Self {
        Self {
            authorization_service,
            clients,
            provider,
        }
    }

    pub async fn run(self, addr: SocketAddr) -> Result<(), ServerError> {
        let router = oauth_router(
            self.authorization_service,
            self.clients,
            self.provider,
        );
        let listener = TcpListener::bind(addr).await?;
        info!("Authorization server listening on {}", addr);
        axum::serve(listener, router.into_make_service()).await?;
        Ok(())
    }
}
