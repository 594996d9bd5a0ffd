use std::fmt::{Display, Formatter};

use serde::Deserialize;

/// Identity of the resource owner that approved an authorization request.
#[derive(Debug, Clone, Deserialize, Eq, PartialEq, Hash)]
pub struct UserID(String);

impl UserID {
    pub fn new<ID: Into<String>>(id: ID) -> Self {
        UserID(id.into())
    }
}

impl From<String> for UserID {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for UserID {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for UserID {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
