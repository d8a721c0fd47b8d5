use std::sync::Arc;

use axum::extract::{Extension, Query};
use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE, LOCATION, PRAGMA};
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Form;

use authorize_core::authorization_request::AuthorizationRequest;
use authorize_core::client::{retrieve_client_info_by_unparsed, ClientStore};
use authorize_core::configuration::ProviderConfiguration;
use authorize_core::error::OpenIdError;
use authorize_core::models::client::ClientInformation;
use authorize_core::response_mode::encoder::{render_form_post_html, EncodingContext};
use authorize_core::response_mode::AuthorizationResponse;
use authorize_core::response_type::resolver::ResponseTypeResolver;
use authorize_core::services::authorization::{AuthorizationError, AuthorizationService};

use crate::routes::error::AuthorizationErrorWrapper;

pub async fn authorize<R>(
    service: Extension<Arc<AuthorizationService<R>>>,
    clients: Extension<Arc<dyn ClientStore>>,
    provider: Extension<Arc<ProviderConfiguration>>,
    request: Query<AuthorizationRequest>,
) -> Result<Response, AuthorizationErrorWrapper>
where
    R: ResponseTypeResolver + 'static,
{
    handle_authorization(&service, &clients, &provider, request.0).await
}

/// RFC 6749 allows the authorization request to arrive as a POST form.
pub async fn authorize_form<R>(
    service: Extension<Arc<AuthorizationService<R>>>,
    clients: Extension<Arc<dyn ClientStore>>,
    provider: Extension<Arc<ProviderConfiguration>>,
    request: Form<AuthorizationRequest>,
) -> Result<Response, AuthorizationErrorWrapper>
where
    R: ResponseTypeResolver + 'static,
{
    handle_authorization(&service, &clients, &provider, request.0).await
}

async fn handle_authorization<R>(
    service: &AuthorizationService<R>,
    clients: &Arc<dyn ClientStore>,
    provider: &Arc<ProviderConfiguration>,
    request: AuthorizationRequest,
) -> Result<Response, AuthorizationErrorWrapper>
where
    R: ResponseTypeResolver,
{
    let client = Arc::new(get_client(clients, &request).await?);
    validate_redirect_uri(&client, &request)?;
    match request.validate(&client, provider) {
        Ok(request) => {
            let response = service.authorize(client, request).await?;
            Ok(respond(response))
        }
        Err((err, request)) => handle_validation_error(provider, &client, err, request),
    }
}

/// Validation failures are still delivered to the redirect URI, through
/// the best channel the raw request admits.
fn handle_validation_error(
    provider: &ProviderConfiguration,
    client: &ClientInformation,
    err: OpenIdError,
    request: AuthorizationRequest,
) -> Result<Response, AuthorizationErrorWrapper> {
    let redirect_uri = request
        .redirect_uri
        .as_ref()
        .ok_or(AuthorizationError::MissingRedirectUri)?;
    let context = EncodingContext {
        client,
        redirect_uri,
        response_mode: request.fallback_response_mode(),
        provider,
    };
    let response = AuthorizationResponse::new(context, (err, request.state))
        .map_err(|err| AuthorizationError::InternalError(err.into()))?;
    Ok(respond(response))
}

pub(crate) fn respond(response: AuthorizationResponse) -> Response {
    let mut response = match response {
        AuthorizationResponse::Redirect(url) => {
            let location = HeaderValue::from_str(url.as_str())
                .expect("redirect URI is a valid header value");
            (StatusCode::FOUND, [(LOCATION, location)]).into_response()
        }
        AuthorizationResponse::FormPost(action, parameters) => {
            let html = render_form_post_html(&action, &parameters);
            (
                StatusCode::OK,
                [(
                    CONTENT_TYPE,
                    HeaderValue::from_static("text/html; charset=utf-8"),
                )],
                html,
            )
                .into_response()
        }
    };
    let headers = response.headers_mut();
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
    headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
    response
}

fn validate_redirect_uri(
    client: &ClientInformation,
    request: &AuthorizationRequest,
) -> Result<(), AuthorizationError> {
    let redirect_uri = request
        .redirect_uri
        .as_ref()
        .ok_or(AuthorizationError::MissingRedirectUri)?;
    if !client.redirect_uri_registered(redirect_uri) {
        return Err(AuthorizationError::InvalidRedirectUri);
    }
    Ok(())
}

async fn get_client(
    clients: &Arc<dyn ClientStore>,
    request: &AuthorizationRequest,
) -> Result<ClientInformation, AuthorizationError> {
    let client_id = request
        .client_id
        .as_ref()
        .ok_or(AuthorizationError::MissingClient)?;
    retrieve_client_info_by_unparsed(clients, client_id)
        .await?
        .ok_or(AuthorizationError::MissingClient)
}
