use form_urlencoded::Serializer;
use indexmap::IndexMap;

use crate::response_mode::encoder::{EncodingContext, ResponseModeEncoder, Result};
use crate::response_mode::AuthorizationResponse;

pub(crate) struct FragmentEncoder;

impl ResponseModeEncoder for FragmentEncoder {
    fn encode(
        &self,
        context: &EncodingContext,
        parameters: IndexMap<String, String>,
    ) -> Result<AuthorizationResponse> {
        let mut callback_uri = context.redirect_uri.clone();
        let fragment = Self::encode_fragment(parameters);
        // drops any fragment carried by the registered redirect URI
        callback_uri.set_fragment(Some(&fragment));
        Ok(AuthorizationResponse::Redirect(callback_uri))
    }
}

impl FragmentEncoder {
    fn encode_fragment(parameters: IndexMap<String, String>) -> String {
        let mut serializer = Serializer::new("".to_string());
        serializer.extend_pairs(parameters).finish()
    }
}
