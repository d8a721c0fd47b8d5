pub mod client;
pub mod nonce;
pub mod response_mode;
pub mod response_type;
pub mod scopes;
pub mod state;
pub mod url_encodable;
mod utils;
