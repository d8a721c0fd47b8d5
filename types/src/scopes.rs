use std::fmt;
use std::fmt::{Display, Formatter};

use lazy_static::lazy_static;
use regex::Regex;
use serde::de::Visitor;
use serde::{Deserialize, Deserializer, Serializer};

use crate::serialize_to_str;

lazy_static! {
    static ref PARAMETERIZED_SCOPE_PATTERN: Regex =
        Regex::new("^\\w+:\\w+$").expect("Could not create Parameterized Scopes");
}

#[derive(Eq, Debug, Clone)]
pub enum Scope {
    Simple(String),
    Parameterized(String, String),
}

impl Scope {
    pub fn value(&self) -> String {
        match self {
            Scope::Simple(scope) => scope.to_lowercase(),
            Scope::Parameterized(scope, param) => {
                format!("{}:{}", scope.to_lowercase(), param)
            }
        }
    }
}

impl PartialEq for Scope {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Scope::Simple(first), Scope::Simple(second)) => first == second,
            (Scope::Parameterized(first, _), Scope::Parameterized(second, _)) => first == second,
            _ => false,
        }
    }
}

impl Display for Scope {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl<T: Into<String>> From<T> for Scope {
    fn from(scope: T) -> Self {
        let scope = scope.into();
        match PARAMETERIZED_SCOPE_PATTERN.is_match(&scope) {
            true => {
                let parts: Vec<&str> = scope.split(':').collect();
                Scope::Parameterized(parts[0].to_owned(), parts[1].to_owned())
            }
            false => Scope::Simple(scope),
        }
    }
}

#[derive(Debug, Eq, PartialEq, Clone, Default)]
pub struct Scopes(Vec<Scope>);

impl Scopes {
    pub fn new<I: Into<Scopes>>(values: I) -> Self {
        values.into()
    }

    pub fn from_vec(values: Vec<Scope>) -> Self {
        Scopes(values)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, scope: &Scope) -> bool {
        self.0.contains(scope)
    }

    pub fn contains_all(&self, scope: &Scopes) -> bool {
        scope.iter().all(|item| self.contains(item))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Scope> {
        self.0.iter()
    }
}

impl Display for Scopes {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let scope_vec = self
            .0
            .iter()
            .map(|scope| format!("{}", scope))
            .collect::<Vec<String>>();
        write!(f, "{}", scope_vec.join(" "))
    }
}

impl<T: Into<String>> From<Vec<T>> for Scopes {
    fn from(values: Vec<T>) -> Self {
        let mut vec: Vec<Scope> = Vec::with_capacity(values.len());
        for v in values {
            vec.push(v.into().into());
        }
        Scopes(vec)
    }
}

serialize_to_str!(Scopes);

impl<'de> Deserialize<'de> for Scopes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ScopesVisitor;

        impl<'de> Visitor<'de> for ScopesVisitor {
            type Value = Scopes;

            fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
                formatter.write_str("a space separated string")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                let values = v
                    .split(' ')
                    .filter(|s| !s.is_empty())
                    .collect::<Vec<&str>>();
                Ok(Scopes::from(values))
            }
        }
        deserializer.deserialize_str(ScopesVisitor)
    }
}
