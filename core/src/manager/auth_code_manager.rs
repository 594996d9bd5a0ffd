use std::sync::Arc;

use time::Duration;
use tracing::{debug, error, warn};

use oauth_types::code::Code;
use oauth_types::scope::Scope;

use crate::configuration::clock::Clock;
use crate::configuration::ProviderConfiguration;
use crate::error::AuthorisationCodeError;
use crate::models::authorisation_code::{AuthorisationCode, ResolvedAuthorisationCode};
use crate::models::client::ClientInformation;
use crate::models::user::AuthenticatedUser;
use crate::redirect_uri::validate_redirect_uri;

/// Issues authorization codes and validates them when a client redeems one.
///
/// Redemption does not consume the code. Until it expires, the same code can
/// be redeemed any number of times by the client it was issued to.
pub struct AuthorisationCodeManager {
    provider: Arc<ProviderConfiguration>,
}

impl AuthorisationCodeManager {
    pub fn new(provider: Arc<ProviderConfiguration>) -> Self {
        Self { provider }
    }

    /// Mints and stores a code for an already authenticated client and user.
    ///
    /// `expires_in` must be positive. Neither the redirect uri nor the scope
    /// are validated here.
    pub async fn grant(
        &self,
        client: ClientInformation,
        user: AuthenticatedUser,
        expires_in: Duration,
        redirect_uri: Option<String>,
        scope: Scope,
    ) -> Result<ResolvedAuthorisationCode, AuthorisationCodeError> {
        let now = self.provider.clock_provider().now();
        let code = AuthorisationCode::new(&client, &user, expires_in, redirect_uri, scope, now)
            .map_err(|err| {
                error!("Error minting authorization code for client {}: {}", client.id(), err);
                err
            })?;
        let code = self
            .provider
            .adapters()
            .code()
            .insert(code)
            .await
            .map_err(|err| {
                error!("Error saving authorization code for client {}: {}", client.id(), err);
                err
            })?;
        debug!(
            "Granted authorization code to client {} for user {}, expires at {}",
            client.id(),
            user.id(),
            code.expires_at()
        );
        Ok(ResolvedAuthorisationCode::new(code, client, user))
    }

    /// Same as [`grant`](Self::grant), expiring after the configured lifetime.
    pub async fn grant_with_default_ttl(
        &self,
        client: ClientInformation,
        user: AuthenticatedUser,
        redirect_uri: Option<String>,
        scope: Scope,
    ) -> Result<ResolvedAuthorisationCode, AuthorisationCodeError> {
        let expires_in = self.provider.ttl().authorization_code;
        self.grant(client, user, expires_in, redirect_uri, scope)
            .await
    }

    /// Looks up `code` for `client` and checks it against the redirect uri
    /// presented now.
    ///
    /// Checks run in order: existence, redirect uri, expiry. A failed check
    /// leaves the stored code untouched.
    pub async fn redeem(
        &self,
        code: &Code,
        redirect_uri: &str,
        client: &ClientInformation,
    ) -> Result<ResolvedAuthorisationCode, AuthorisationCodeError> {
        let found = self
            .provider
            .adapters()
            .code()
            .find_by_client_and_code(&client.id(), code)
            .await
            .map_err(|err| {
                error!("Error fetching authorization code for client {}: {}", client.id(), err);
                err
            })?;
        let Some(found) = found else {
            warn!("Authorization code not found for client {}", client.id());
            return Err(AuthorisationCodeError::CodeNotFound);
        };

        if let Some(stored) = found.redirect_uri() {
            debug!(
                "Validating redirect uri: {}, authorization code redirect uri: {}",
                redirect_uri, stored
            );
            validate_redirect_uri(stored, redirect_uri).map_err(|err| {
                warn!("Rejected authorization code for client {}: {}", client.id(), err);
                AuthorisationCodeError::InvalidRedirectUri(err)
            })?;
        }

        if found.is_expired(self.provider.clock_provider().now()) {
            warn!(
                "Authorization code for client {} expired at {}",
                client.id(),
                found.expires_at()
            );
            return Err(AuthorisationCodeError::CodeExpired);
        }

        Ok(found)
    }
}
