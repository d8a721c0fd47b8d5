use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use anyhow::Context;
use derive_new::new;
use thiserror::Error;
use url::Url;

use authorize_types::response_mode::ResponseMode;
use authorize_types::state::State;
use authorize_types::url_encodable::UrlEncodable;

use crate::authorization_request::ValidatedAuthorizationRequest;
use crate::client::ClientError;
use crate::configuration::ProviderConfiguration;
use crate::error::OpenIdError;
use crate::models::client::ClientInformation;
use crate::response_mode::encoder::EncodingContext;
use crate::response_mode::policy;
use crate::response_mode::AuthorizationResponse;
use crate::response_type::resolver::{AuthorizationContext, ResponseTypeResolver};

#[derive(Error)]
pub enum AuthorizationError {
    #[error("Invalid redirect_uri")]
    InvalidRedirectUri,
    #[error("Missing redirect_uri")]
    MissingRedirectUri,
    #[error("Invalid client {}", .0)]
    InvalidClient(#[from] ClientError),
    #[error("Missing client")]
    MissingClient,
    #[error("Err: {}", .err)]
    RedirectableErr {
        #[source]
        err: OpenIdError,
        response_mode: ResponseMode,
        redirect_uri: Url,
        state: Option<State>,
        provider: Arc<ProviderConfiguration>,
        client: Arc<ClientInformation>,
    },
    #[error(transparent)]
    InternalError(#[from] anyhow::Error),
}

impl Debug for AuthorizationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

/// Drives a request from policy validation to the encoded response:
/// resolve the mode, gate it, hand the request to the token factory, echo
/// `state`, encode. Failures after mode resolution stay redirectable so
/// the client hears about them through its own channel.
#[derive(new)]
pub struct AuthorizationService<R> {
    resolver: R,
    provider: Arc<ProviderConfiguration>,
}

impl<R> AuthorizationService<R>
where
    R: ResponseTypeResolver,
{
    pub async fn authorize(
        &self,
        client: Arc<ClientInformation>,
        request: ValidatedAuthorizationRequest,
    ) -> Result<AuthorizationResponse, AuthorizationError> {
        let response_mode = match policy::validate_response_mode(&client, &request) {
            Ok(response_mode) => response_mode,
            Err(err) => return Err(self.redirectable_err(err, &client, &request)),
        };

        let context = AuthorizationContext {
            client: &client,
            request: &request,
            provider: &self.provider,
        };
        let parameters = match self.resolver.resolve(&context).await {
            Ok(parameters) => parameters,
            Err(err) => return Err(self.redirectable_err(err, &client, &request)),
        };
        let parameters = (parameters, request.state.clone()).params();

        let encoding_context = EncodingContext {
            client: &client,
            redirect_uri: &request.redirect_uri,
            response_mode,
            provider: &self.provider,
        };
        Ok(AuthorizationResponse::new(encoding_context, parameters)
            .context("Error creating authorization response")?)
    }

    fn redirectable_err(
        &self,
        err: OpenIdError,
        client: &Arc<ClientInformation>,
        request: &ValidatedAuthorizationRequest,
    ) -> AuthorizationError {
        let response_mode = request
            .response_mode()
            .unwrap_or_else(|_| request.fallback_response_mode());
        AuthorizationError::RedirectableErr {
            err,
            response_mode,
            redirect_uri: request.redirect_uri.clone(),
            state: request.state.clone(),
            provider: self.provider.clone(),
            client: client.clone(),
        }
    }
}
