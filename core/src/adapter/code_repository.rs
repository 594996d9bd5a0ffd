use std::sync::Arc;

use anyhow::anyhow;
use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use oauth_types::client::ClientID;
use oauth_types::code::Code;
use oauth_types::subject::UserID;

use crate::adapter::{Adapter, AuthorisationCodeRepository, PersistenceError};
use crate::models::authorisation_code::{AuthorisationCode, ResolvedAuthorisationCode};
use crate::models::client::ClientInformation;
use crate::models::user::AuthenticatedUser;

pub type ClientAdapter = Arc<dyn Adapter<Item = ClientInformation, Id = ClientID> + Send + Sync>;
pub type UserAdapter = Arc<dyn Adapter<Item = AuthenticatedUser, Id = UserID> + Send + Sync>;

/// Keeps codes keyed by `(client, code)` and joins the client and user from
/// their own adapters on lookup.
///
/// Expired codes are never purged here, removing them is left to an external
/// maintenance job.
pub struct InMemoryAuthorisationCodeRepository {
    codes: DashMap<(ClientID, Code), AuthorisationCode>,
    clients: ClientAdapter,
    users: UserAdapter,
}

impl InMemoryAuthorisationCodeRepository {
    pub fn new(clients: ClientAdapter, users: UserAdapter) -> Self {
        Self {
            codes: DashMap::new(),
            clients,
            users,
        }
    }
}

#[async_trait]
impl AuthorisationCodeRepository for InMemoryAuthorisationCodeRepository {
    async fn insert(
        &self,
        code: AuthorisationCode,
    ) -> Result<AuthorisationCode, PersistenceError> {
        match self.codes.entry((code.client_id(), code.code().clone())) {
            Entry::Occupied(_) => Err(PersistenceError::DB(anyhow!(
                "Authorization code already issued to client {}",
                code.client_id()
            ))),
            Entry::Vacant(entry) => {
                entry.insert(code.clone());
                Ok(code)
            }
        }
    }

    async fn find_by_client_and_code(
        &self,
        client_id: &ClientID,
        code: &Code,
    ) -> Result<Option<ResolvedAuthorisationCode>, PersistenceError> {
        let found = self
            .codes
            .get(&(*client_id, code.clone()))
            .map(|item| item.value().clone());
        let Some(found) = found else {
            return Ok(None);
        };

        let client = self
            .clients
            .find(&found.client_id())
            .await?
            .ok_or_else(|| PersistenceError::MissingClient(found.client_id()))?;
        let user = self
            .users
            .find(found.user_id())
            .await?
            .ok_or_else(|| PersistenceError::MissingUser(found.user_id().clone()))?;

        Ok(Some(ResolvedAuthorisationCode::new(found, client, user)))
    }
}

#[cfg(test)]
mod tests {
    use time::{Duration, OffsetDateTime};

    use oauth_types::scope::Scope;

    use crate::adapter::generic_adapter::InMemoryGenericAdapter;

    use super::*;

    struct Fixture {
        repository: InMemoryAuthorisationCodeRepository,
        clients: Arc<InMemoryGenericAdapter<ClientID, ClientInformation>>,
        users: Arc<InMemoryGenericAdapter<UserID, AuthenticatedUser>>,
    }

    fn fixture() -> Fixture {
        let clients = Arc::new(InMemoryGenericAdapter::new());
        let users = Arc::new(InMemoryGenericAdapter::new());
        let repository = InMemoryAuthorisationCodeRepository::new(clients.clone(), users.clone());
        Fixture {
            repository,
            clients,
            users,
        }
    }

    fn issue(client: &ClientInformation, user: &AuthenticatedUser) -> AuthorisationCode {
        AuthorisationCode::new(
            client,
            user,
            Duration::minutes(10),
            Some("https://app.example.com/cb".to_owned()),
            Scope::new("read"),
            OffsetDateTime::now_utc(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_find_loads_client_and_user() {
        let fixture = fixture();
        let client = ClientInformation::new(ClientID::default(), "Test Client");
        let user = AuthenticatedUser::new(UserID::new("user-1"), "john");
        fixture.clients.insert(client.clone()).await.unwrap();
        fixture.users.insert(user.clone()).await.unwrap();

        let code = fixture.repository.insert(issue(&client, &user)).await.unwrap();
        let found = fixture
            .repository
            .find_by_client_and_code(&client.id(), code.code())
            .await
            .unwrap()
            .expect("Expected code to be found");

        assert_eq!(&code, found.authorisation_code());
        assert_eq!(&client, found.client());
        assert_eq!(&user, found.user());
    }

    #[tokio::test]
    async fn test_code_is_scoped_to_its_client() {
        let fixture = fixture();
        let client = ClientInformation::new(ClientID::default(), "Test Client");
        let user = AuthenticatedUser::new(UserID::new("user-1"), "john");
        fixture.clients.insert(client.clone()).await.unwrap();
        fixture.users.insert(user.clone()).await.unwrap();
        let code = fixture.repository.insert(issue(&client, &user)).await.unwrap();

        let found = fixture
            .repository
            .find_by_client_and_code(&ClientID::default(), code.code())
            .await
            .unwrap();

        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_rejects_duplicated_code_for_same_client() {
        let fixture = fixture();
        let client = ClientInformation::new(ClientID::default(), "Test Client");
        let user = AuthenticatedUser::new(UserID::new("user-1"), "john");
        let code = issue(&client, &user);

        fixture.repository.insert(code.clone()).await.unwrap();
        let result = fixture.repository.insert(code).await;

        assert!(matches!(result, Err(PersistenceError::DB(_))));
    }

    #[tokio::test]
    async fn test_missing_relation_is_an_error() {
        let fixture = fixture();
        let client = ClientInformation::new(ClientID::default(), "Test Client");
        let user = AuthenticatedUser::new(UserID::new("user-1"), "john");
        fixture.clients.insert(client.clone()).await.unwrap();
        let code = fixture.repository.insert(issue(&client, &user)).await.unwrap();

        let result = fixture
            .repository
            .find_by_client_and_code(&client.id(), code.code())
            .await;

        assert!(matches!(result, Err(PersistenceError::MissingUser(id)) if id == *user.id()));
    }
}
