pub mod encoder;
mod error;
pub mod policy;

use indexmap::IndexMap;
use url::Url;

use authorize_types::response_mode::ResponseMode;
use authorize_types::url_encodable::UrlEncodable;

use self::encoder::{
    fragment::FragmentEncoder, query::QueryEncoder, DynamicResponseModeEncoder, EncodingContext,
    ResponseModeEncoder,
};
pub use self::error::{Error, Result};
use crate::error::OpenIdError;

/// The one-shot outcome of an authorization request: a 302 for `query` and
/// `fragment`, or the parameters of a self-submitting form for
/// `form_post`.
#[derive(Debug, PartialEq, Eq)]
pub enum AuthorizationResponse {
    Redirect(Url),
    FormPost(Url, IndexMap<String, String>),
}

impl AuthorizationResponse {
    pub fn new<P: UrlEncodable>(
        context: EncodingContext,
        parameters: P,
    ) -> Result<AuthorizationResponse> {
        let parameters = parameters.params();
        let result = DynamicResponseModeEncoder
            .encode(&context, parameters)
            .map_err(OpenIdError::server_error);
        match result {
            Ok(res) => Ok(res),
            Err(err) => encode_err(&context, err),
        }
    }
}

/// Last-resort projection of an error through a redirect-capable channel.
/// `form_post` is deliberately absent: if the form encoder itself failed
/// there is nothing left to render the form with.
fn encode_err(context: &EncodingContext, err: OpenIdError) -> Result<AuthorizationResponse> {
    match context.response_mode {
        ResponseMode::Fragment => FragmentEncoder.encode(context, err.params()),
        ResponseMode::Query => QueryEncoder.encode(context, err.params()),
        _ => Err(Error::InternalError(err.into())),
    }
}
