use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Registry key for a client. The registry itself lives outside this
/// library, so the id is an opaque non-empty string.
#[derive(Serialize, Deserialize, Clone, Debug, Hash, Eq, PartialEq)]
pub struct ClientID(String);

#[derive(Error, Debug)]
#[error("Invalid client id: {}", .0)]
pub struct ParseError(String);

impl ClientID {
    pub fn new<T: Into<String>>(id: T) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ClientID {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(ParseError(s.to_owned()));
        }
        Ok(ClientID(s.to_owned()))
    }
}

impl From<ClientID> for String {
    fn from(id: ClientID) -> Self {
        id.0
    }
}

impl Display for ClientID {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
