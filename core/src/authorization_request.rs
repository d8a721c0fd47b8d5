use std::str::FromStr;

use serde::Deserialize;
use tracing::error;
use url::Url;

use authorize_types::client::ClientID;
use authorize_types::nonce::Nonce;
use authorize_types::response_mode::ResponseMode;
use authorize_types::response_type::ResponseType;
use authorize_types::scopes::Scopes;
use authorize_types::state::State;

use crate::configuration::ProviderConfiguration;
use crate::error::OpenIdError;
use crate::models::client::ClientInformation;

/// Authorization request as received, before validation. `response_type`
/// and `response_mode` stay unparsed so a malformed value reaches the
/// validator and comes back through the negotiated channel instead of
/// failing extraction with a bare 4xx.
#[derive(Debug, Deserialize)]
pub struct AuthorizationRequest {
    pub response_type: Option<String>,
    pub client_id: Option<String>,
    pub redirect_uri: Option<Url>,
    pub scope: Option<Scopes>,
    pub state: Option<State>,
    pub nonce: Option<Nonce>,
    pub response_mode: Option<String>,
}

impl AuthorizationRequest {
    pub fn validate(
        self,
        client: &ClientInformation,
        configuration: &ProviderConfiguration,
    ) -> Result<ValidatedAuthorizationRequest, (OpenIdError, Self)> {
        let this = self;

        let response_type = match this.parse_response_type(configuration, client) {
            Ok(rt) => rt,
            Err(err) => return Err((err, this)),
        };
        if let Err(err) = this.validate_scopes(client) {
            return Err((err, this));
        }
        if this.client_id.is_none() {
            return Err((OpenIdError::invalid_request("Missing client_id"), this));
        }
        let Some(redirect_uri) = this.redirect_uri.clone() else {
            return Err((OpenIdError::invalid_request("Missing redirect_uri"), this));
        };

        Ok(ValidatedAuthorizationRequest {
            response_type,
            client_id: client.id().clone(),
            redirect_uri,
            scope: this.scope.unwrap_or_default(),
            state: this.state,
            nonce: this.nonce,
            response_mode: this.response_mode,
        })
    }

    /// Best-effort channel for delivering errors found during validation,
    /// when no validated request exists yet. An explicitly requested mode
    /// wins if it parses; otherwise the default for the (possibly
    /// unparseable) response type applies.
    pub fn fallback_response_mode(&self) -> ResponseMode {
        if let Some(mode) = self
            .response_mode
            .as_deref()
            .and_then(|m| ResponseMode::from_str(m).ok())
        {
            return mode;
        }
        match self.response_type.as_deref() {
            Some("code") => ResponseMode::Query,
            _ => ResponseMode::Fragment,
        }
    }

    fn parse_response_type(
        &self,
        configuration: &ProviderConfiguration,
        client: &ClientInformation,
    ) -> Result<ResponseType, OpenIdError> {
        let raw = match self.response_type.as_deref() {
            None | Some("") => return Err(OpenIdError::invalid_request("Missing response type")),
            Some(raw) => raw,
        };
        let response_type = ResponseType::from_str(raw).map_err(|err| {
            error!("Err parsing response_type: {}", err);
            OpenIdError::unsupported_response_type(format!(
                "The authorization server does not support the response_type '{}'",
                raw
            ))
        })?;
        if !configuration.allows_response_type(&response_type) {
            return Err(OpenIdError::unsupported_response_type(
                "Unsupported response type",
            ));
        }
        if !client.allows_response_type(&response_type) {
            return Err(OpenIdError::unauthorized_client(
                "Response type not allowed for client",
            ));
        }
        Ok(response_type)
    }

    fn validate_scopes(&self, client: &ClientInformation) -> Result<(), OpenIdError> {
        let Some(ref scopes) = self.scope else {
            return Ok(());
        };
        let invalid_scope = scopes
            .iter()
            .find(|&item| !client.metadata().scope.contains(item));
        match invalid_scope {
            None => Ok(()),
            Some(scope) => Err(OpenIdError::invalid_scope(format!(
                "Unsupported scope {} for client {}",
                scope,
                client.id()
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ValidatedAuthorizationRequest {
    pub response_type: ResponseType,
    pub client_id: ClientID,
    pub redirect_uri: Url,
    pub scope: Scopes,
    pub state: Option<State>,
    pub nonce: Option<Nonce>,
    /// Still raw: an unknown literal must fail the policy gate with
    /// `unsupported_response_mode`, not the parser.
    pub response_mode: Option<String>,
}

impl ValidatedAuthorizationRequest {
    /// The effective response mode: the requested one when present,
    /// otherwise `query` for the bare code flow and `fragment` for any
    /// token-bearing response type. `form_post` is never a default.
    pub fn response_mode(&self) -> Result<ResponseMode, OpenIdError> {
        match self.response_mode.as_deref() {
            None | Some("") => Ok(self.response_type.default_response_mode()),
            Some(raw) => ResponseMode::from_str(raw).map_err(|_| {
                OpenIdError::unsupported_response_mode(format!(
                    "Unsupported response_mode \"{}\"",
                    raw
                ))
            }),
        }
    }

    /// Channel for errors raised while the effective mode itself is in
    /// question: `query` for the bare code flow, `fragment` otherwise.
    pub fn fallback_response_mode(&self) -> ResponseMode {
        self.response_type.default_response_mode()
    }
}
