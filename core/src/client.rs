use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use thiserror::Error;

use authorize_types::client::{ClientID, ParseError};

use crate::models::client::ClientInformation;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Error looking up client: {}", .0)]
    Lookup(#[from] anyhow::Error),
    #[error("Could not parse client id: {}", .0)]
    Parse(#[from] ParseError),
}

/// Read-only client registry seam. Lookups must present a consistent
/// snapshot to each request; the registry itself is external.
#[async_trait]
pub trait ClientStore: Send + Sync {
    async fn find(&self, client_id: &ClientID) -> Result<Option<ClientInformation>, ClientError>;
}

pub async fn retrieve_client_info_by_unparsed(
    store: &Arc<dyn ClientStore>,
    client_id: &str,
) -> Result<Option<ClientInformation>, ClientError> {
    let client_id = ClientID::from_str(client_id)?;
    store.find(&client_id).await
}

#[derive(Default)]
pub struct InMemoryClientStore {
    clients: DashMap<ClientID, ClientInformation>,
}

impl InMemoryClientStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, client: ClientInformation) {
        self.clients.insert(client.id().clone(), client);
    }
}

#[async_trait]
impl ClientStore for InMemoryClientStore {
    async fn find(&self, client_id: &ClientID) -> Result<Option<ClientInformation>, ClientError> {
        Ok(self.clients.get(client_id).map(|c| c.value().clone()))
    }
}
