use std::ops::Deref;

use derive_builder::Builder;
use getset::{CopyGetters, Getters};
use time::{Duration, OffsetDateTime};

use oauth_types::client::ClientID;
use oauth_types::code::Code;
use oauth_types::scope::Scope;
use oauth_types::subject::UserID;

use crate::error::AuthorisationCodeError;
use crate::models::client::ClientInformation;
use crate::models::user::AuthenticatedUser;

/// A code bound to the client, user, redirect uri and scope it was issued for.
///
/// The record never changes once issued. There is no consumed marker, so a
/// code stays redeemable until `expires_at`.
#[derive(Debug, Clone, Eq, PartialEq, Builder, Getters, CopyGetters)]
#[builder(setter(into))]
pub struct AuthorisationCode {
    #[get = "pub"]
    code: Code,
    #[get_copy = "pub"]
    client_id: ClientID,
    #[get = "pub"]
    user_id: UserID,
    #[builder(default, setter(into, strip_option))]
    redirect_uri: Option<String>,
    #[get = "pub"]
    scope: Scope,
    #[get_copy = "pub"]
    expires_at: OffsetDateTime,
    #[get_copy = "pub"]
    created_at: OffsetDateTime,
}

impl AuthorisationCode {
    /// Mints a new code at `now`. An empty redirect uri is stored as absent.
    ///
    /// Fails when `now + expires_in` is outside the representable date range.
    pub fn new(
        client: &ClientInformation,
        user: &AuthenticatedUser,
        expires_in: Duration,
        redirect_uri: Option<String>,
        scope: Scope,
        now: OffsetDateTime,
    ) -> Result<Self, AuthorisationCodeError> {
        let expires_at = now
            .checked_add(expires_in)
            .ok_or(AuthorisationCodeError::ExpiryOutOfRange(expires_in))?;
        Ok(Self {
            code: Code::generate(),
            client_id: client.id(),
            user_id: user.id().clone(),
            redirect_uri: redirect_uri.filter(|uri| !uri.is_empty()),
            scope,
            expires_at,
            created_at: now,
        })
    }

    pub fn redirect_uri(&self) -> Option<&str> {
        self.redirect_uri.as_deref()
    }

    /// A code is still valid at the exact instant it expires.
    pub fn is_expired(&self, now: OffsetDateTime) -> bool {
        now > self.expires_at
    }
}

/// An authorization code together with the client and user it references.
#[derive(Debug, Clone, Eq, PartialEq, Getters)]
#[get = "pub"]
pub struct ResolvedAuthorisationCode {
    authorisation_code: AuthorisationCode,
    client: ClientInformation,
    user: AuthenticatedUser,
}

impl ResolvedAuthorisationCode {
    pub fn new(
        authorisation_code: AuthorisationCode,
        client: ClientInformation,
        user: AuthenticatedUser,
    ) -> Self {
        Self {
            authorisation_code,
            client,
            user,
        }
    }
}

impl Deref for ResolvedAuthorisationCode {
    type Target = AuthorisationCode;

    fn deref(&self) -> &Self::Target {
        &self.authorisation_code
    }
}
