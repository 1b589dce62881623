use async_trait::async_trait;
use bson::doc;
use scribe_core::{Email, ResetToken, ResetTokenStore, ResetTokenStoreError};

use super::document_store::{DocumentCollection, DocumentStoreError, Query};

/// Reset tokens kept as `{ email, token }` documents.
#[derive(Clone)]
pub struct DocumentResetTokenStore<C> {
    collection: C,
}

impl<C: DocumentCollection> DocumentResetTokenStore<C> {
    pub fn new(collection: C) -> Self {
        Self { collection }
    }
}

fn by_email(email: &Email) -> Query {
    Query::new().equals("email", email.as_str())
}

fn store_error(error: DocumentStoreError) -> ResetTokenStoreError {
    ResetTokenStoreError::UnexpectedError(error.to_string())
}

#[async_trait]
impl<C: DocumentCollection> ResetTokenStore for DocumentResetTokenStore<C> {
    #[tracing::instrument(name = "DocumentResetTokenStore::put", skip_all)]
    async fn put(&self, email: &Email, token: ResetToken) -> Result<(), ResetTokenStoreError> {
        self.collection
            .delete_one(&by_email(email))
            .await
            .map_err(store_error)?;

        self.collection
            .insert_one(doc! { "email": email.as_str(), "token": token.as_str() })
            .await
            .map_err(store_error)?;

        Ok(())
    }

    #[tracing::instrument(name = "DocumentResetTokenStore::get", skip_all)]
    async fn get(&self, email: &Email) -> Result<ResetToken, ResetTokenStoreError> {
        let document = self
            .collection
            .find_one(&by_email(email))
            .await
            .map_err(store_error)?
            .ok_or(ResetTokenStoreError::TokenNotFound)?;

        document
            .get_str("token")
            .map(ResetToken::from_presented)
            .map_err(|e| ResetTokenStoreError::UnexpectedError(e.to_string()))
    }

    #[tracing::instrument(name = "DocumentResetTokenStore::delete", skip_all)]
    async fn delete(&self, email: &Email) -> Result<(), ResetTokenStoreError> {
        self.collection
            .delete_one(&by_email(email))
            .await
            .map_err(store_error)?;
        Ok(())
    }
}
