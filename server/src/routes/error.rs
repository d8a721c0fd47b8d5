use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

use authorize_core::error::OpenIdError;
use authorize_core::response_mode::encoder::EncodingContext;
use authorize_core::response_mode::AuthorizationResponse;
use authorize_core::services::authorization::AuthorizationError;

use crate::routes::authorization::respond;

#[derive(Error, Debug)]
#[error(transparent)]
pub struct AuthorizationErrorWrapper(#[from] AuthorizationError);

impl IntoResponse for AuthorizationErrorWrapper {
    fn into_response(self) -> Response {
        match self.0 {
            // the negotiated channel is known, so the error travels on it
            AuthorizationError::RedirectableErr {
                err,
                response_mode,
                redirect_uri,
                state,
                provider,
                client,
            } => {
                let context = EncodingContext {
                    client: &client,
                    redirect_uri: &redirect_uri,
                    response_mode,
                    provider: &provider,
                };
                match AuthorizationResponse::new(context, (err, state)) {
                    Ok(response) => respond(response),
                    Err(err) => {
                        error!("Error encoding redirectable error: {}", err);
                        StatusCode::INTERNAL_SERVER_ERROR.into_response()
                    }
                }
            }
            // no trusted redirect URI: the only non-redirected error path
            err @ (AuthorizationError::InvalidRedirectUri
            | AuthorizationError::MissingRedirectUri
            | AuthorizationError::InvalidClient(_)
            | AuthorizationError::MissingClient) => {
                let description = err.to_string();
                (
                    StatusCode::BAD_REQUEST,
                    Json(OpenIdError::invalid_client(description)),
                )
                    .into_response()
            }
            AuthorizationError::InternalError(err) => {
                error!("Unexpected authorization error: {:?}", err);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
