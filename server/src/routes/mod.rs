use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tower_http::ServiceBuilderExt;

use authorize_core::client::ClientStore;
use authorize_core::configuration::ProviderConfiguration;
use authorize_core::response_type::resolver::ResponseTypeResolver;
use authorize_core::services::authorization::AuthorizationService;

use crate::routes::authorization::{authorize, authorize_form};

pub(crate) mod authorization;
pub(crate) mod error;

pub const AUTHORIZATION_ROUTE: &str = "/authorize";

pub fn oauth_router<R>(
    authorization_service: Arc<AuthorizationService<R>>,
    clients: Arc<dyn ClientStore>,
    provider: Arc<ProviderConfiguration>,
) -> Router
where
    R: ResponseTypeResolver + 'static,
{
    Router::new()
        .route(
            AUTHORIZATION_ROUTE,
            get(authorize::<R>).post(authorize_form::<R>),
        )
        .route_layer(
            ServiceBuilder::new()
                .add_extension(authorization_service)
                .add_extension(clients)
                .add_extension(provider)
                .layer(TraceLayer::new_for_http()),
        )
}
