use indexmap::IndexMap;
use url::Url;

use authorize_types::response_mode::ResponseMode;

use crate::configuration::ProviderConfiguration;
use crate::models::client::ClientInformation;
use crate::response_mode::encoder::form_post::FormPostEncoder;
use crate::response_mode::encoder::fragment::FragmentEncoder;
use crate::response_mode::encoder::query::QueryEncoder;
use crate::response_mode::error::{Error, Result};

use super::AuthorizationResponse;

pub(crate) mod form_post;
pub(crate) mod fragment;
pub(crate) mod query;

pub use self::form_post::render_html as render_form_post_html;

pub struct EncodingContext<'a> {
    pub client: &'a ClientInformation,
    pub redirect_uri: &'a Url,
    pub response_mode: ResponseMode,
    pub provider: &'a ProviderConfiguration,
}

/// One contract over the three on-wire encodings. Exactly one encoder runs
/// per response; parameters never leak into another component of the
/// redirect URI.
pub trait ResponseModeEncoder {
    fn encode(
        &self,
        context: &EncodingContext,
        parameters: IndexMap<String, String>,
    ) -> Result<AuthorizationResponse>;
}

#[derive(Default, Copy, Clone)]
pub struct DynamicResponseModeEncoder;

impl ResponseModeEncoder for DynamicResponseModeEncoder {
    fn encode(
        &self,
        context: &EncodingContext,
        parameters: IndexMap<String, String>,
    ) -> Result<AuthorizationResponse> {
        let response_mode = context.response_mode;

        if !context
            .provider
            .response_modes_supported()
            .contains(&response_mode)
        {
            return Err(Error::UnsupportedResponseMode(response_mode));
        }

        match response_mode {
            ResponseMode::Query => QueryEncoder.encode(context, parameters),
            ResponseMode::Fragment => FragmentEncoder.encode(context, parameters),
            ResponseMode::FormPost => FormPostEncoder.encode(context, parameters),
        }
    }
}
