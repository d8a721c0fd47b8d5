use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE, PRAGMA};
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use indexmap::IndexMap;
use regex::Regex;
use time::OffsetDateTime;
use tower::ServiceExt;
use url::Url;

use authorize_core::client::{ClientStore, InMemoryClientStore};
use authorize_core::configuration::ProviderConfiguration;
use authorize_core::error::OpenIdError;
use authorize_core::models::client::{ClientInformation, ClientMetadata};
use authorize_core::response_type::resolver::{AuthorizationContext, ResponseTypeResolver};
use authorize_core::services::authorization::AuthorizationService;
use authorize_server::routes::oauth_router;
use authorize_types::client::ClientID;
use authorize_types::response_mode::ResponseMode;
use authorize_types::response_type::ResponseTypeValue::{Code, IdToken, Token};
use authorize_types::scopes::Scopes;

pub const CLIENT_ID: &str = "response-mode-client";
pub const REDIRECT_URI: &str = "https://client.example.com/callback";
pub const STATE: &str = "12345678901234567890";
pub const NONCE: &str = "111111111";

/// Stand-in for the external token factory: issues opaque values for every
/// artifact the response-type set names, like the mock server backing the
/// original integration suite.
pub struct StubTokenFactory;

#[async_trait]
impl ResponseTypeResolver for StubTokenFactory {
    async fn resolve(
        &self,
        context: &AuthorizationContext<'_>,
    ) -> Result<IndexMap<String, String>, OpenIdError> {
        let response_type = &context.request.response_type;
        let mut params = IndexMap::new();
        if response_type.contains(Code) {
            params.insert("code".to_owned(), opaque_value());
        }
        if response_type.contains(Token) {
            params.insert("access_token".to_owned(), opaque_value());
            params.insert("token_type".to_owned(), "bearer".to_owned());
            params.insert(
                "expires_in".to_owned(),
                context
                    .provider
                    .access_token_ttl()
                    .whole_seconds()
                    .to_string(),
            );
        }
        if response_type.contains(IdToken) {
            let nonce = context
                .request
                .nonce
                .clone()
                .map(String::from)
                .unwrap_or_default();
            params.insert(
                "id_token".to_owned(),
                format!("eyJhbGciOiJSUzI1NiJ9.{}{}.signature", opaque_value(), nonce),
            );
        }
        Ok(params)
    }
}

fn opaque_value() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

pub fn test_app(response_modes: Vec<ResponseMode>) -> Router {
    let _ = tracing_subscriber::fmt::try_init();
    let provider = Arc::new(ProviderConfiguration::default());
    let store = InMemoryClientStore::new();
    store.insert(ClientInformation::new(
        ClientID::new(CLIENT_ID),
        OffsetDateTime::now_utc(),
        ClientMetadata {
            redirect_uris: vec![Url::parse(REDIRECT_URI).unwrap()],
            response_types: vec![Code, Token, IdToken],
            response_modes,
            scope: Scopes::from(vec!["openid", "profile"]),
        },
    ));
    let clients: Arc<dyn ClientStore> = Arc::new(store);
    let service = Arc::new(AuthorizationService::new(StubTokenFactory, provider.clone()));
    oauth_router(service, clients, provider)
}

pub fn authorization_uri(
    response_type: &str,
    response_mode: Option<&str>,
    scope: Option<&str>,
) -> String {
    format!(
        "/authorize?{}",
        authorization_form_body(response_type, response_mode, scope)
    )
}

pub fn authorization_form_body(
    response_type: &str,
    response_mode: Option<&str>,
    scope: Option<&str>,
) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    serializer.append_pair("response_type", response_type);
    serializer.append_pair("client_id", CLIENT_ID);
    serializer.append_pair("redirect_uri", REDIRECT_URI);
    serializer.append_pair("state", STATE);
    serializer.append_pair("nonce", NONCE);
    if let Some(response_mode) = response_mode {
        serializer.append_pair("response_mode", response_mode);
    }
    if let Some(scope) = scope {
        serializer.append_pair("scope", scope);
    }
    serializer.finish()
}

pub async fn send(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn send_form(app: Router, body: String) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri("/authorize")
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub fn assert_cache_headers(response: &Response<Body>) {
    assert_eq!(
        "no-store",
        response.headers().get(CACHE_CONTROL).unwrap().to_str().unwrap()
    );
    assert_eq!(
        "no-cache",
        response.headers().get(PRAGMA).unwrap().to_str().unwrap()
    );
}

pub fn location(response: &Response<Body>) -> Url {
    let location = response
        .headers()
        .get(axum::http::header::LOCATION)
        .expect("expected a Location header")
        .to_str()
        .unwrap();
    Url::parse(location).unwrap()
}

pub fn pairs(input: &str) -> IndexMap<String, String> {
    url::form_urlencoded::parse(input.as_bytes())
        .into_owned()
        .collect()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Recovers the `{name -> value}` mapping from the hidden inputs of a
/// form-post document, the way a permissive HTML parser would.
pub fn hidden_inputs(html: &str) -> IndexMap<String, String> {
    let input = Regex::new(r#"<input type="hidden" name="([^"]*)" value="([^"]*)"/>"#).unwrap();
    input
        .captures_iter(html)
        .map(|caps| {
            (
                html_escape::decode_html_entities(&caps[1]).into_owned(),
                html_escape::decode_html_entities(&caps[2]).into_owned(),
            )
        })
        .collect()
}

/// Asserts the 200 form-post shape and returns the recovered parameters.
pub async fn form_post_params(response: Response<Body>) -> IndexMap<String, String> {
    assert_eq!(StatusCode::OK, response.status());
    assert_eq!(
        "text/html; charset=utf-8",
        response.headers().get(CONTENT_TYPE).unwrap().to_str().unwrap()
    );
    assert_cache_headers(&response);
    let html = body_string(response).await;
    assert!(html.contains(&format!(r#"<form method="POST" action="{}">"#, REDIRECT_URI)));
    hidden_inputs(&html)
}
