use derive_builder::Builder;
use getset::{CopyGetters, Getters};
use time::Duration;

use authorize_types::response_mode::ResponseMode;
use authorize_types::response_type::ResponseType;
use authorize_types::response_type::ResponseTypeValue::{Code, IdToken, Token};
use authorize_types::response_type;

#[derive(Debug, Builder, Getters, CopyGetters)]
#[builder(pattern = "owned", setter(into, strip_option), default)]
pub struct ProviderConfiguration {
    #[get = "pub"]
    response_types_supported: Vec<ResponseType>,
    #[get = "pub"]
    response_modes_supported: Vec<ResponseMode>,
    /// Feeds the `expires_in` parameter of issued access tokens.
    #[get_copy = "pub"]
    access_token_ttl: Duration,
}

impl Default for ProviderConfiguration {
    fn default() -> Self {
        Self {
            response_types_supported: vec![
                response_type![Code],
                response_type![Token],
                response_type![IdToken],
                response_type![IdToken, Token],
                response_type![Code, Token],
                response_type![Code, IdToken],
                response_type![Code, IdToken, Token],
            ],
            response_modes_supported: vec![
                ResponseMode::Query,
                ResponseMode::Fragment,
                ResponseMode::FormPost,
            ],
            access_token_ttl: Duration::hours(1),
        }
    }
}

impl ProviderConfiguration {
    pub fn allows_response_type(&self, response_type: &ResponseType) -> bool {
        self.response_types_supported.contains(response_type)
    }
}
