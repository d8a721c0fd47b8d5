use std::fmt;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use indexmap::IndexSet;
use serde::de::{Unexpected, Visitor};
use serde::{de, Deserialize, Serializer};
use serde::{Deserializer, Serialize};
use thiserror::Error;

use crate::response_mode::ResponseMode;
use crate::serialize_to_str;

#[macro_export]
macro_rules! response_type {
    ($($rt:expr),*) =>{
        {
            let mut temp_vec = vec![];
            $(
                temp_vec.push($rt);
            )*
            $crate::response_type::ResponseType::new(temp_vec)
        }
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Hash, Copy, Clone, Ord, PartialOrd)]
#[serde(rename_all = "snake_case")]
pub enum ResponseTypeValue {
    Code,
    IdToken,
    Token,
}

impl Display for ResponseTypeValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let value = match self {
            ResponseTypeValue::Code => "code",
            ResponseTypeValue::IdToken => "id_token",
            ResponseTypeValue::Token => "token",
        };
        write!(f, "{}", value)
    }
}

#[derive(Error, Debug)]
#[error("Error parsing response type value {}.", .0)]
pub struct ParseError(pub String);

impl FromStr for ResponseTypeValue {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "code" => Ok(ResponseTypeValue::Code),
            "id_token" => Ok(ResponseTypeValue::IdToken),
            "token" => Ok(ResponseTypeValue::Token),
            _ => Err(ParseError(s.to_owned())),
        }
    }
}

/// Space-delimited `response_type` as an unordered, non-empty set.
///
/// Equality and hashing are order independent, but the set remembers the
/// order in which the values were received: error hints render the set
/// exactly as the client sent it.
#[derive(Debug, Eq, Clone)]
pub struct ResponseType(IndexSet<ResponseTypeValue>);

impl ResponseType {
    pub fn new(values: Vec<ResponseTypeValue>) -> Self {
        let values_set: IndexSet<_> = values.into_iter().collect();
        ResponseType(values_set)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResponseTypeValue> {
        self.0.iter()
    }

    pub fn contains(&self, value: ResponseTypeValue) -> bool {
        self.0.contains(&value)
    }

    /// True when the artifact set carries an access token or id_token,
    /// which must never travel in a query component.
    pub fn is_token_bearing(&self) -> bool {
        self.contains(ResponseTypeValue::Token) || self.contains(ResponseTypeValue::IdToken)
    }

    pub fn default_response_mode(&self) -> ResponseMode {
        if self.is_token_bearing() {
            ResponseMode::Fragment
        } else {
            ResponseMode::Query
        }
    }
}

impl Hash for ResponseType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut values: Vec<_> = self.0.iter().collect();
        values.sort();
        for v in values {
            v.hash(state)
        }
    }
}

impl PartialEq for ResponseType {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Display for ResponseType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let x = self
            .0
            .iter()
            .map(|rt| rt.to_string())
            .collect::<Vec<String>>()
            .join(" ");
        write!(f, "{}", x)
    }
}

impl FromStr for ResponseType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(ParseError(s.to_owned()));
        }
        let values = s
            .split(' ')
            .map(ResponseTypeValue::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ResponseType::new(values))
    }
}

serialize_to_str!(ResponseType);

impl<'de> Deserialize<'de> for ResponseType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ResponseTypeVisitor;

        impl<'de> Visitor<'de> for ResponseTypeVisitor {
            type Value = ResponseType;

            fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
                formatter.write_str("'code id_token'")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                ResponseType::from_str(v).map_err(|err| {
                    de::Error::invalid_value(Unexpected::Str(&err.0), &ResponseTypeVisitor)
                })
            }
        }
        deserializer.deserialize_str(ResponseTypeVisitor)
    }
}
