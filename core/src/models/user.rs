use getset::Getters;

use oauth_types::identifiable::Identifiable;
use oauth_types::subject::UserID;

#[derive(Debug, Clone, Eq, PartialEq, Getters)]
#[get = "pub"]
pub struct AuthenticatedUser {
    id: UserID,
    username: String,
}

impl AuthenticatedUser {
    pub fn new<U: Into<String>>(id: UserID, username: U) -> Self {
        Self {
            id,
            username: username.into(),
        }
    }
}

impl Identifiable<UserID> for AuthenticatedUser {
    fn id(&self) -> &UserID {
        &self.id
    }
}
