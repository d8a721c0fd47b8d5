use indexmap::IndexMap;

use crate::response_mode::encoder::{EncodingContext, ResponseModeEncoder, Result};
use crate::response_mode::AuthorizationResponse;

pub(crate) struct QueryEncoder;

impl ResponseModeEncoder for QueryEncoder {
    fn encode(
        &self,
        context: &EncodingContext,
        parameters: IndexMap<String, String>,
    ) -> Result<AuthorizationResponse> {
        let mut callback_uri = context.redirect_uri.clone();
        // params already on the registered URI survive, outcome keys win
        let mut merged: IndexMap<String, String> =
            callback_uri.query_pairs().into_owned().collect();
        merged.extend(parameters);
        callback_uri.set_query(None);
        if !merged.is_empty() {
            callback_uri.query_pairs_mut().extend_pairs(merged).finish();
        }
        Ok(AuthorizationResponse::Redirect(callback_uri))
    }
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;
    use url::Url;

    use authorize_types::client::ClientID;
    use authorize_types::response_mode::ResponseMode;
    use authorize_types::response_type::ResponseTypeValue::Code;
    use authorize_types::scopes::Scopes;

    use crate::configuration::ProviderConfiguration;
    use crate::models::client::{ClientInformation, ClientMetadata};
    use crate::response_mode::encoder::query::QueryEncoder;
    use crate::response_mode::encoder::{EncodingContext, ResponseModeEncoder};
    use crate::response_mode::AuthorizationResponse;

    fn encode(redirect_uri: &str, params: IndexMap<String, String>) -> Url {
        let redirect_uri = Url::parse(redirect_uri).unwrap();
        let client = ClientInformation::new(
            ClientID::new("test-client"),
            time::OffsetDateTime::now_utc(),
            ClientMetadata {
                redirect_uris: vec![redirect_uri.clone()],
                response_types: vec![Code],
                response_modes: vec![],
                scope: Scopes::default(),
            },
        );
        let provider = ProviderConfiguration::default();
        let context = EncodingContext {
            client: &client,
            redirect_uri: &redirect_uri,
            response_mode: ResponseMode::Query,
            provider: &provider,
        };
        match QueryEncoder.encode(&context, params).unwrap() {
            AuthorizationResponse::Redirect(url) => url,
            other => panic!("expected redirect, got {:?}", other),
        }
    }

    #[test]
    fn test_can_append_parameters_to_query() {
        let mut params = IndexMap::new();
        params.insert("code".to_string(), "some_code".to_string());
        params.insert("state".to_string(), "abc".to_string());

        let url = encode("https://www.test.com/callback", params);

        assert_eq!(
            "https://www.test.com/callback?code=some_code&state=abc",
            url.as_str()
        )
    }

    #[test]
    fn test_registered_query_parameters_are_preserved() {
        let mut params = IndexMap::new();
        params.insert("code".to_string(), "some_code".to_string());

        let url = encode("https://www.test.com/callback?tenant=acme", params);

        let pairs: IndexMap<String, String> = url.query_pairs().into_owned().collect();
        assert_eq!(Some(&"acme".to_string()), pairs.get("tenant"));
        assert_eq!(Some(&"some_code".to_string()), pairs.get("code"));
    }

    #[test]
    fn test_outcome_keys_override_registered_duplicates() {
        let mut params = IndexMap::new();
        params.insert("state".to_string(), "fresh".to_string());

        let url = encode("https://www.test.com/callback?state=stale", params);

        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(vec![("state".to_string(), "fresh".to_string())], pairs)
    }
}
