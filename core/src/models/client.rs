use getset::{CopyGetters, Getters};

use oauth_types::client::ClientID;
use oauth_types::identifiable::Identifiable;

/// A client that has already been resolved and authenticated by the caller.
#[derive(Debug, Clone, Eq, PartialEq, CopyGetters, Getters)]
pub struct ClientInformation {
    #[get_copy = "pub"]
    id: ClientID,
    #[get = "pub"]
    name: String,
}

impl ClientInformation {
    pub fn new<N: Into<String>>(id: ClientID, name: N) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl Identifiable<ClientID> for ClientInformation {
    fn id(&self) -> &ClientID {
        &self.id
    }
}
