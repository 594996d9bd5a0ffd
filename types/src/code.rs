use std::fmt::{Display, Formatter};

use serde::Deserialize;
use uuid::Uuid;

/// The bearer value of an authorization code.
///
/// Freshly issued codes come from a v4 UUID, so they carry 122 random bits and
/// cannot be derived from anything else the client knows.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Deserialize)]
pub struct Code(String);

impl Code {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }
}

impl From<String> for Code {
    fn from(c: String) -> Self {
        Self(c)
    }
}

impl From<&str> for Code {
    fn from(c: &str) -> Self {
        Self(c.to_owned())
    }
}

impl AsRef<str> for Code {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Code {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for Code {
    fn default() -> Self {
        Self::generate()
    }
}
