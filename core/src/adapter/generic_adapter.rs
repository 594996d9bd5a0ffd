use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;

use anyhow::anyhow;
use async_trait::async_trait;
use dashmap::DashMap;

use oauth_types::identifiable::Identifiable;

use crate::adapter::{Adapter, PersistenceError};

#[derive(Debug, Clone)]
pub struct InMemoryGenericAdapter<ID, IT>
where
    ID: Eq + Hash + Send + Sync + Clone + Debug,
{
    storage: Arc<DashMap<ID, IT>>,
}

impl<ID, IT> InMemoryGenericAdapter<ID, IT>
where
    ID: Eq + Hash + Send + Sync + Clone + Debug,
{
    pub fn new() -> Self {
        Self {
            storage: Arc::new(DashMap::new()),
        }
    }
}

impl<ID, IT> Default for InMemoryGenericAdapter<ID, IT>
where
    ID: Eq + Hash + Send + Sync + Clone + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<ID, IT> Adapter for InMemoryGenericAdapter<ID, IT>
where
    ID: Eq + Hash + Send + Sync + Clone + Debug,
    IT: Identifiable<ID> + Send + Sync + Clone + Debug,
{
    type Id = ID;
    type Item = IT;

    async fn find(&self, id: &Self::Id) -> Result<Option<Self::Item>, PersistenceError> {
        let item = self.storage.get(id).map(|item| item.value().clone());
        Ok(item)
    }

    async fn insert(&self, item: Self::Item) -> Result<Self::Item, PersistenceError> {
        let id = item.id();
        if self.storage.contains_key(id) {
            return Err(PersistenceError::DB(anyhow!(
                "Storage already contains item with id: {:?}",
                id
            )));
        }
        self.storage.insert(id.clone(), item.clone());
        Ok(item)
    }

    async fn update(&self, item: Self::Item) -> Result<Self::Item, PersistenceError> {
        let id = item.id();
        if !self.storage.contains_key(id) {
            return Err(PersistenceError::DB(anyhow!(
                "Storage does not contain item with id: {:?}",
                id
            )));
        }
        self.storage.insert(id.clone(), item.clone());
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use oauth_types::client::ClientID;

    use crate::models::client::ClientInformation;

    use super::*;

    #[tokio::test]
    async fn test_rejects_duplicated_insert() {
        let adapter = InMemoryGenericAdapter::<ClientID, ClientInformation>::new();
        let client = ClientInformation::new(ClientID::default(), "first");

        adapter.insert(client.clone()).await.unwrap();
        let result = adapter.insert(client).await;

        assert!(matches!(result, Err(PersistenceError::DB(_))));
    }

    #[tokio::test]
    async fn test_update_requires_existing_item() {
        let adapter = InMemoryGenericAdapter::<ClientID, ClientInformation>::new();
        let client = ClientInformation::new(ClientID::default(), "first");

        assert!(adapter.update(client.clone()).await.is_err());

        adapter.insert(client.clone()).await.unwrap();
        let renamed = ClientInformation::new(client.id(), "renamed");
        adapter.update(renamed).await.unwrap();

        let found = adapter.find(&client.id()).await.unwrap().unwrap();
        assert_eq!("renamed", found.name().as_str());
    }
}
