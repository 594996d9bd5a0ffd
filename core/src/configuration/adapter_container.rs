use std::sync::Arc;

use oauth_types::client::ClientID;
use oauth_types::subject::UserID;

use crate::adapter::code_repository::{
    ClientAdapter, InMemoryAuthorisationCodeRepository, UserAdapter,
};
use crate::adapter::generic_adapter::InMemoryGenericAdapter;
use crate::adapter::AuthorisationCodeRepository;
use crate::models::client::ClientInformation;
use crate::models::user::AuthenticatedUser;

pub type CodeRepository = Arc<dyn AuthorisationCodeRepository + Send + Sync>;

pub struct AdapterContainer {
    code: CodeRepository,
    client: ClientAdapter,
    user: UserAdapter,
}

impl AdapterContainer {
    pub fn new(code: CodeRepository, client: ClientAdapter, user: UserAdapter) -> Self {
        Self { code, client, user }
    }

    pub fn code(&self) -> CodeRepository {
        self.code.clone()
    }

    pub fn client(&self) -> ClientAdapter {
        self.client.clone()
    }

    pub fn user(&self) -> UserAdapter {
        self.user.clone()
    }
}

impl Default for AdapterContainer {
    fn default() -> Self {
        let client: ClientAdapter =
            Arc::new(InMemoryGenericAdapter::<ClientID, ClientInformation>::new());
        let user: UserAdapter = Arc::new(InMemoryGenericAdapter::<UserID, AuthenticatedUser>::new());
        AdapterContainer {
            code: Arc::new(InMemoryAuthorisationCodeRepository::new(
                client.clone(),
                user.clone(),
            )),
            client,
            user,
        }
    }
}
