use std::sync::Arc;

use dashmap::DashMap;
use scribe_core::{Email, ResetToken, ResetTokenStore, ResetTokenStoreError};

#[derive(Default, Clone)]
pub struct HashMapResetTokenStore {
    tokens: Arc<DashMap<Email, ResetToken>>,
}

impl HashMapResetTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl ResetTokenStore for HashMapResetTokenStore {
    async fn put(&self, email: &Email, token: ResetToken) -> Result<(), ResetTokenStoreError> {
        self.tokens.insert(email.clone(), token);
        Ok(())
    }

    async fn get(&self, email: &Email) -> Result<ResetToken, ResetTokenStoreError> {
        self.tokens
            .get(email)
            .map(|entry| entry.value().clone())
            .ok_or(ResetTokenStoreError::TokenNotFound)
    }

    async fn delete(&self, email: &Email) -> Result<(), ResetTokenStoreError> {
        self.tokens.remove(email);
        Ok(())
    }
}
