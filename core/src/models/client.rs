use getset::{CopyGetters, Getters};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use url::Url;

use authorize_types::client::ClientID;
use authorize_types::response_mode::ResponseMode;
use authorize_types::response_type::{ResponseType, ResponseTypeValue};
use authorize_types::scopes::Scopes;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ClientMetadata {
    pub redirect_uris: Vec<Url>,
    pub response_types: Vec<ResponseTypeValue>,
    /// Allow-list of response modes. Empty means the RFC 6749 baseline:
    /// `query` and `fragment` are permitted, `form_post` must be enabled
    /// explicitly.
    pub response_modes: Vec<ResponseMode>,
    pub scope: Scopes,
}

#[derive(Debug, Clone, CopyGetters, Getters)]
pub struct ClientInformation {
    #[get = "pub"]
    id: ClientID,
    #[get_copy = "pub"]
    issue_date: OffsetDateTime,
    #[get = "pub"]
    metadata: ClientMetadata,
}

impl ClientInformation {
    pub fn new(id: ClientID, issue_date: OffsetDateTime, metadata: ClientMetadata) -> Self {
        Self {
            id,
            issue_date,
            metadata,
        }
    }

    pub fn allows_response_mode(&self, response_mode: ResponseMode) -> bool {
        if self.metadata.response_modes.is_empty() {
            return matches!(response_mode, ResponseMode::Query | ResponseMode::Fragment);
        }
        self.metadata.response_modes.contains(&response_mode)
    }

    pub fn allows_response_type(&self, response_type: &ResponseType) -> bool {
        response_type
            .iter()
            .all(|value| self.metadata.response_types.contains(value))
    }

    pub fn redirect_uri_registered(&self, redirect_uri: &Url) -> bool {
        self.metadata.redirect_uris.contains(redirect_uri)
    }
}
