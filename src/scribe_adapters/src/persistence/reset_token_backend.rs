use async_trait::async_trait;
use scribe_core::{Email, ResetToken, ResetTokenStore, ResetTokenStoreError};

use super::{
    document_store::DocumentCollection,
    document_reset_token_store::DocumentResetTokenStore,
    hashmap_reset_token_store::HashMapResetTokenStore,
    redis_reset_token_store::RedisResetTokenStore,
};

/// The reset-token store picked by configuration.
#[derive(Clone)]
pub enum ResetTokenBackend<C> {
    Document(DocumentResetTokenStore<C>),
    Redis(RedisResetTokenStore),
    InMemory(HashMapResetTokenStore),
}

#[async_trait]
impl<C: DocumentCollection> ResetTokenStore for ResetTokenBackend<C> {
    async fn put(&self, email: &Email, token: ResetToken) -> Result<(), ResetTokenStoreError> {
        match self {
            Self::Document(store) => store.put(email, token).await,
            Self::Redis(store) => store.put(email, token).await,
            Self::InMemory(store) => store.put(email, token).await,
        }
    }

    async fn get(&self, email: &Email) -> Result<ResetToken, ResetTokenStoreError> {
        match self {
            Self::Document(store) => store.get(email).await,
            Self::Redis(store) => store.get(email).await,
            Self::InMemory(store) => store.get(email).await,
        }
    }

    async fn delete(&self, email: &Email) -> Result<(), ResetTokenStoreError> {
        match self {
            Self::Document(store) => store.delete(email).await,
            Self::Redis(store) => store.delete(email).await,
            Self::InMemory(store) => store.delete(email).await,
        }
    }
}
