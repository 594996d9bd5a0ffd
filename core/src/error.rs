use std::fmt::{Display, Formatter};

use serde::Serialize;
use thiserror::Error;
use time::Duration;

use crate::adapter::PersistenceError;
use crate::redirect_uri::RedirectUriError;

/// OAuth2 error codes a token endpoint reports for a failed code exchange.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OAuthErrorType {
    InvalidGrant,
    ServerError,
}

impl Display for OAuthErrorType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            OAuthErrorType::InvalidGrant => write!(f, "invalid_grant"),
            OAuthErrorType::ServerError => write!(f, "server_error"),
        }
    }
}

#[derive(Error, Debug)]
pub enum AuthorisationCodeError {
    #[error("Authorization code not found")]
    CodeNotFound,
    #[error("Invalid redirect uri")]
    InvalidRedirectUri(#[from] RedirectUriError),
    #[error("Authorization code expired")]
    CodeExpired,
    #[error("Authorization code lifetime {0} is out of range")]
    ExpiryOutOfRange(Duration),
    #[error("Storage error: {}", .0)]
    Storage(#[from] PersistenceError),
}

impl AuthorisationCodeError {
    pub fn error_type(&self) -> OAuthErrorType {
        match self {
            AuthorisationCodeError::CodeNotFound
            | AuthorisationCodeError::InvalidRedirectUri(_)
            | AuthorisationCodeError::CodeExpired => OAuthErrorType::InvalidGrant,
            AuthorisationCodeError::ExpiryOutOfRange(_) | AuthorisationCodeError::Storage(_) => {
                OAuthErrorType::ServerError
            }
        }
    }
}
