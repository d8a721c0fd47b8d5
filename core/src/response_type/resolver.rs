use async_trait::async_trait;
use indexmap::IndexMap;

use crate::authorization_request::ValidatedAuthorizationRequest;
use crate::configuration::ProviderConfiguration;
use crate::error::OpenIdError;
use crate::models::client::ClientInformation;

/// Everything the token factory may need to produce the artifacts named by
/// the response-type set.
pub struct AuthorizationContext<'a> {
    pub client: &'a ClientInformation,
    pub request: &'a ValidatedAuthorizationRequest,
    pub provider: &'a ProviderConfiguration,
}

/// Token-factory boundary. Implementations issue the parameters matching
/// the request's response-type set (`code`, `access_token`, `token_type`,
/// `expires_in`, `id_token`); issuance itself happens outside this crate.
///
/// `state` must not be produced here. The authorization service echoes it
/// after issuance, on the success and error paths alike.
#[async_trait]
pub trait ResponseTypeResolver: Send + Sync {
    async fn resolve(
        &self,
        context: &AuthorizationContext<'_>,
    ) -> Result<IndexMap<String, String>, OpenIdError>;
}
