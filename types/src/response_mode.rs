use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The channel by which authorization parameters are delivered to the
/// client's redirect URI. The set is closed: anything else is an
/// `unsupported_response_mode`.
#[derive(Serialize, Deserialize, Debug, Eq, PartialEq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum ResponseMode {
    Query,
    Fragment,
    FormPost,
}

#[derive(Error, Debug)]
#[error("Unsupported response mode {}.", .0)]
pub struct ParseError(pub String);

impl FromStr for ResponseMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "query" => Ok(ResponseMode::Query),
            "fragment" => Ok(ResponseMode::Fragment),
            "form_post" => Ok(ResponseMode::FormPost),
            _ => Err(ParseError(s.to_owned())),
        }
    }
}

impl Display for ResponseMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ResponseMode::Query => write!(f, "query"),
            ResponseMode::Fragment => write!(f, "fragment"),
            ResponseMode::FormPost => write!(f, "form_post"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::response_mode::ResponseMode;

    #[test]
    fn test_can_serialize_response_mode() {
        assert_eq!("form_post", serialize(ResponseMode::FormPost));
        assert_eq!("fragment", serialize(ResponseMode::Fragment));
        assert_eq!("query", serialize(ResponseMode::Query));
    }

    #[test]
    fn test_can_deserialize_response_mode() {
        assert_eq!(ResponseMode::FormPost, deserialize("form_post"));
        assert_eq!(ResponseMode::Fragment, deserialize("fragment"));
        assert_eq!(ResponseMode::Query, deserialize("query"));
    }

    #[test]
    fn test_parse_rejects_unknown_literal() {
        assert!("web_message".parse::<ResponseMode>().is_err());
        assert!("".parse::<ResponseMode>().is_err());
    }

    fn serialize(response_mode: ResponseMode) -> String {
        serde_json::to_string(&response_mode)
            .unwrap()
            .replace('\"', "")
    }

    fn deserialize(response_mode: &str) -> ResponseMode {
        serde_json::from_str(format!("\"{}\"", response_mode).as_str()).unwrap()
    }
}
