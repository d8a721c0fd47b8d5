use thiserror::Error;

use authorize_types::response_mode::ResponseMode;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Response mode {0:?} not enabled for this provider")]
    UnsupportedResponseMode(ResponseMode),
    #[error(transparent)]
    InternalError(#[from] anyhow::Error),
}
