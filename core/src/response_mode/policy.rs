use tracing::debug;

use authorize_types::response_mode::ResponseMode;

use crate::authorization_request::ValidatedAuthorizationRequest;
use crate::error::OpenIdError;
use crate::models::client::ClientInformation;

const INVALID_REQUEST_DESCRIPTION: &str =
    "The request is missing a required parameter, includes an invalid parameter value, \
     includes a parameter more than once, or is otherwise malformed";

/// Decides the effective response mode and runs the two policy checks, in
/// order: the security pairing first, the client allow-list second. The
/// first failure wins and is delivered through the channel picked by the
/// caller.
pub fn validate_response_mode(
    client: &ClientInformation,
    request: &ValidatedAuthorizationRequest,
) -> Result<ResponseMode, OpenIdError> {
    let response_mode = request.response_mode()?;
    let response_type = &request.response_type;

    if response_type.is_token_bearing() && response_mode == ResponseMode::Query {
        debug!(
            "Rejecting query response_mode for token-bearing response_type '{}'",
            response_type
        );
        return Err(
            OpenIdError::invalid_request(INVALID_REQUEST_DESCRIPTION).with_hint(format!(
                "Insecure response_mode 'query' for the response_type '[{}]'.",
                response_type
            )),
        );
    }

    if !client.allows_response_mode(response_mode) {
        debug!(
            "Client {} does not allow response_mode '{}'",
            client.id(),
            response_mode
        );
        return Err(
            OpenIdError::invalid_request(INVALID_REQUEST_DESCRIPTION).with_hint(format!(
                "The client is not allowed to request response_mode \"{}\".",
                response_mode
            )),
        );
    }

    Ok(response_mode)
}
