use std::fmt::Debug;

use async_trait::async_trait;
use thiserror::Error;

use oauth_types::client::ClientID;
use oauth_types::code::Code;
use oauth_types::subject::UserID;

use crate::models::authorisation_code::{AuthorisationCode, ResolvedAuthorisationCode};

pub mod code_repository;
pub mod generic_adapter;

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("Database error: {}", .0)]
    DB(#[from] anyhow::Error),
    #[error("Authorization code references missing client {0}")]
    MissingClient(ClientID),
    #[error("Authorization code references missing user {0}")]
    MissingUser(UserID),
}

#[async_trait]
pub trait Adapter {
    type Item: Send + Sync;
    type Id: Sized;

    async fn find(&self, id: &Self::Id) -> Result<Option<Self::Item>, PersistenceError>;

    async fn insert(&self, item: Self::Item) -> Result<Self::Item, PersistenceError>;

    async fn update(&self, item: Self::Item) -> Result<Self::Item, PersistenceError>;
}

/// Storage access needed by the authorization-code lifecycle.
///
/// Codes are only addressable through the client they were issued to, there is
/// no lookup by code value alone.
#[async_trait]
pub trait AuthorisationCodeRepository {
    /// Persists a new code. Fails if `(client_id, code)` is already taken.
    async fn insert(&self, code: AuthorisationCode)
        -> Result<AuthorisationCode, PersistenceError>;

    /// Finds a code with its client and user loaded.
    async fn find_by_client_and_code(
        &self,
        client_id: &ClientID,
        code: &Code,
    ) -> Result<Option<ResolvedAuthorisationCode>, PersistenceError>;
}
