use std::fmt::{Display, Formatter};

use serde::Deserialize;

/// Granted scope, kept exactly as the grant step produced it.
#[derive(Debug, Clone, Default, Deserialize, Eq, PartialEq)]
#[serde(transparent)]
pub struct Scope(String);

impl Scope {
    pub fn new<S: Into<String>>(scope: S) -> Self {
        Self(scope.into())
    }
}

impl From<String> for Scope {
    fn from(scope: String) -> Self {
        Self(scope)
    }
}

impl From<&str> for Scope {
    fn from(scope: &str) -> Self {
        Self(scope.to_owned())
    }
}

impl AsRef<str> for Scope {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Scope {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
