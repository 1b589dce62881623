use async_trait::async_trait;
use bson::{Document, doc, oid::ObjectId};
use futures::TryStreamExt;
use mongodb::{
    Client, Collection, Database, IndexModel,
    error::{Error, ErrorKind, WriteFailure},
    options::{ClientOptions, Credential, IndexOptions},
};
use secrecy::ExposeSecret;

use super::document_store::{
    DocumentCollection, DocumentDatabase, DocumentStoreError, Query, set_document,
};
use crate::config::DatabaseSettings;

const DUPLICATE_KEY_CODE: i32 = 11000;

fn store_error(error: Error) -> DocumentStoreError {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error))
            if write_error.code == DUPLICATE_KEY_CODE =>
        {
            DocumentStoreError::DuplicateKey(write_error.message.clone())
        }
        _ => DocumentStoreError::Driver(error.to_string()),
    }
}

#[derive(Clone)]
pub struct MongoCollection {
    inner: Collection<Document>,
}

impl MongoCollection {
    pub fn new(inner: Collection<Document>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl DocumentCollection for MongoCollection {
    fn name(&self) -> &str {
        self.inner.name()
    }

    #[tracing::instrument(name = "MongoCollection::insert_one", skip_all, fields(collection = %self.name()))]
    async fn insert_one(&self, document: Document) -> Result<ObjectId, DocumentStoreError> {
        let result = self.inner.insert_one(document).await.map_err(store_error)?;
        result.inserted_id.as_object_id().ok_or_else(|| {
            DocumentStoreError::Driver(format!(
                "inserted id is not an object id: {}",
                result.inserted_id
            ))
        })
    }

    #[tracing::instrument(name = "MongoCollection::find", skip_all, fields(collection = %self.name()))]
    async fn find(&self, query: &Query) -> Result<Vec<Document>, DocumentStoreError> {
        let cursor = self
            .inner
            .find(query.to_document())
            .await
            .map_err(store_error)?;
        cursor.try_collect().await.map_err(store_error)
    }

    #[tracing::instrument(name = "MongoCollection::find_one", skip_all, fields(collection = %self.name()))]
    async fn find_one(&self, query: &Query) -> Result<Option<Document>, DocumentStoreError> {
        self.inner
            .find_one(query.to_document())
            .await
            .map_err(store_error)
    }

    #[tracing::instrument(name = "MongoCollection::update_fields", skip_all, fields(collection = %self.name()))]
    async fn update_fields(
        &self,
        id: ObjectId,
        changes: Document,
    ) -> Result<bool, DocumentStoreError> {
        let result = self
            .inner
            .update_one(doc! { "_id": id }, set_document(changes))
            .await
            .map_err(store_error)?;
        Ok(result.matched_count > 0)
    }

    #[tracing::instrument(name = "MongoCollection::delete_one", skip_all, fields(collection = %self.name()))]
    async fn delete_one(&self, query: &Query) -> Result<u64, DocumentStoreError> {
        let result = self
            .inner
            .delete_one(query.to_document())
            .await
            .map_err(store_error)?;
        Ok(result.deleted_count)
    }

    async fn create_unique_index(&self, field: &str) -> Result<(), DocumentStoreError> {
        let index = IndexModel::builder()
            .keys(doc! { field: 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        self.inner.create_index(index).await.map_err(store_error)?;
        Ok(())
    }

    async fn count(&self) -> Result<u64, DocumentStoreError> {
        self.inner
            .count_documents(doc! {})
            .await
            .map_err(store_error)
    }
}

#[derive(Clone)]
pub struct MongoDatabase {
    database: Database,
}

impl MongoDatabase {
    pub fn new(database: Database) -> Self {
        Self { database }
    }

    /// Builds a client from `settings`; credentials are attached only when a
    /// username is configured. The driver connects lazily.
    #[tracing::instrument(name = "MongoDatabase::connect", skip_all, fields(database = %settings.name))]
    pub async fn connect(settings: &DatabaseSettings) -> Result<Self, DocumentStoreError> {
        let mut options = ClientOptions::parse(&settings.url)
            .await
            .map_err(store_error)?;

        if !settings.username.is_empty() {
            options.credential = Some(
                Credential::builder()
                    .username(settings.username.clone())
                    .password(settings.password.expose_secret().clone())
                    .build(),
            );
        }

        let client = Client::with_options(options).map_err(store_error)?;
        Ok(Self::new(client.database(&settings.name)))
    }
}

impl DocumentDatabase for MongoDatabase {
    type Collection = MongoCollection;

    fn collection(&self, name: &str) -> MongoCollection {
        MongoCollection::new(self.database.collection::<Document>(name))
    }
}
