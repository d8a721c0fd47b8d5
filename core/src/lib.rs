pub mod authorization_request;
pub mod client;
pub mod configuration;
pub mod error;
pub mod models;
pub mod response_mode;
pub mod response_type;
pub mod services;
