use std::fmt::{Display, Formatter};

use indexmap::IndexMap;
use serde::Serialize;
use thiserror::Error;

use authorize_types::url_encodable::UrlEncodable;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OpenIdErrorType {
    InvalidRequest,
    InvalidClient,
    InvalidScope,
    UnauthorizedClient,
    UnsupportedResponseType,
    UnsupportedResponseMode,
    ServerError,
}

impl Display for OpenIdErrorType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OpenIdErrorType::InvalidRequest => write!(f, "invalid_request"),
            OpenIdErrorType::InvalidClient => write!(f, "invalid_client"),
            OpenIdErrorType::InvalidScope => write!(f, "invalid_scope"),
            OpenIdErrorType::UnauthorizedClient => write!(f, "unauthorized_client"),
            OpenIdErrorType::UnsupportedResponseType => write!(f, "unsupported_response_type"),
            OpenIdErrorType::UnsupportedResponseMode => write!(f, "unsupported_response_mode"),
            OpenIdErrorType::ServerError => write!(f, "server_error"),
        }
    }
}

/// Protocol-level error. The optional hint narrows the description down to
/// the offending parameter; both travel to the client as
/// `error_description` and `error_hint`.
#[derive(Error, Debug, Serialize)]
#[error("OpenId error: {:?}, description: {}", .error_type, .description)]
pub struct OpenIdError {
    #[serde(rename = "error")]
    error_type: OpenIdErrorType,
    #[serde(rename = "error_description")]
    description: String,
    #[serde(rename = "error_hint", skip_serializing_if = "Option::is_none")]
    hint: Option<String>,
    #[serde(skip)]
    #[source]
    source: Option<anyhow::Error>,
}

impl OpenIdError {
    fn new<D: Into<String>>(
        error_type: OpenIdErrorType,
        description: D,
        source: Option<anyhow::Error>,
    ) -> Self {
        Self {
            error_type,
            description: description.into(),
            hint: None,
            source,
        }
    }

    pub fn with_hint<H: Into<String>>(mut self, hint: H) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn invalid_request<D: Into<String>>(description: D) -> Self {
        Self::new(OpenIdErrorType::InvalidRequest, description, None)
    }

    pub fn invalid_request_with_source<D: Into<String>, T: Into<anyhow::Error>>(
        description: D,
        source: T,
    ) -> Self {
        Self::new(
            OpenIdErrorType::InvalidRequest,
            description,
            Some(source.into()),
        )
    }

    pub fn invalid_client<D: Into<String>>(description: D) -> Self {
        Self::new(OpenIdErrorType::InvalidClient, description, None)
    }

    pub fn invalid_scope<D: Into<String>>(description: D) -> Self {
        Self::new(OpenIdErrorType::InvalidScope, description, None)
    }

    pub fn unauthorized_client<D: Into<String>>(description: D) -> Self {
        Self::new(OpenIdErrorType::UnauthorizedClient, description, None)
    }

    pub fn unsupported_response_type<D: Into<String>>(description: D) -> Self {
        Self::new(OpenIdErrorType::UnsupportedResponseType, description, None)
    }

    pub fn unsupported_response_mode<D: Into<String>>(description: D) -> Self {
        Self::new(OpenIdErrorType::UnsupportedResponseMode, description, None)
    }

    pub fn server_error<T>(source: T) -> Self
    where
        T: Into<anyhow::Error>,
    {
        let error = source.into();
        Self::new(OpenIdErrorType::ServerError, error.to_string(), Some(error))
    }

    pub fn error_type(&self) -> OpenIdErrorType {
        self.error_type
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }
}

impl UrlEncodable for OpenIdError {
    fn params(self) -> IndexMap<String, String> {
        let mut parameters = IndexMap::new();
        parameters.insert("error".to_owned(), self.error_type.to_string());
        parameters.insert("error_description".to_owned(), self.description);
        if let Some(hint) = self.hint {
            parameters.insert("error_hint".to_owned(), hint);
        }
        parameters
    }
}
