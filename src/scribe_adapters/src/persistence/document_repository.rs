use std::marker::PhantomData;

use async_trait::async_trait;
use bson::{Bson, Document, oid::ObjectId};
use scribe_core::{Repository, RepositoryError};

use super::document_store::{DocumentCollection, Query};

/// Fields that differ between a stored record and an incoming one,
/// collected as a `$set` body.
///
/// Zero values in the incoming record count as "unchanged": clearing a
/// field through an update is not possible.
#[derive(Debug, Default)]
pub struct FieldChanges {
    set: Document,
}

impl FieldChanges {
    pub fn apply<T>(&mut self, field: &str, current: &mut T, incoming: T)
    where
        T: PartialEq + Default + Into<Bson> + Clone,
    {
        self.apply_with(field, current, incoming, |value| value.clone().into());
    }

    pub fn apply_with<T>(
        &mut self,
        field: &str,
        current: &mut T,
        incoming: T,
        to_bson: impl FnOnce(&T) -> Bson,
    ) where
        T: PartialEq + Default,
    {
        if incoming == T::default() || incoming == *current {
            return;
        }
        self.set.insert(field, to_bson(&incoming));
        *current = incoming;
    }

    /// Flags have no unset state, so they are always compared.
    pub fn apply_flag(&mut self, field: &str, current: &mut bool, incoming: bool) {
        if incoming != *current {
            self.set.insert(field, incoming);
            *current = incoming;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    pub fn into_document(self) -> Document {
        self.set
    }
}

/// How one entity kind is laid out in its collection.
pub trait DocumentMapping: Send + Sync + 'static {
    type Record: Send + Sync;
    type Draft: Send + Sync;
    type Filter: Send + Sync;
    type Id: AsRef<str> + Send + Sync;

    const COLLECTION: &'static str;
    const UNIQUE_FIELDS: &'static [&'static str] = &[];

    fn to_document(draft: &Self::Draft) -> Document;
    fn with_id(draft: Self::Draft, id: ObjectId) -> Self::Record;
    fn from_document(document: &Document) -> Result<Self::Record, RepositoryError>;
    fn record_id(record: &Self::Record) -> &Self::Id;
    /// Sparse filter to query; unset and empty fields are left out.
    fn to_query(filter: &Self::Filter) -> Query;
    /// Copies every changed mutable field of `incoming` onto `stored`.
    fn diff(stored: &mut Self::Record, incoming: Self::Record, changes: &mut FieldChanges);
}

pub(crate) fn parse_object_id(raw: &str) -> Result<ObjectId, RepositoryError> {
    ObjectId::parse_str(raw).map_err(|_| RepositoryError::InvalidId(raw.to_owned()))
}

/// Generic repository over a document collection.
pub struct DocumentRepository<C, M> {
    collection: C,
    was_empty: bool,
    _mapping: PhantomData<fn() -> M>,
}

impl<C, M> DocumentRepository<C, M>
where
    C: DocumentCollection,
    M: DocumentMapping,
{
    /// Creates the mapping's unique indexes and records whether the
    /// collection held any documents.
    #[tracing::instrument(name = "DocumentRepository::new", skip_all, fields(collection = M::COLLECTION))]
    pub async fn new(collection: C) -> Result<Self, RepositoryError> {
        for field in M::UNIQUE_FIELDS {
            collection.create_unique_index(field).await?;
        }
        let was_empty = collection.count().await? == 0;

        Ok(Self {
            collection,
            was_empty,
            _mapping: PhantomData,
        })
    }

    /// Whether the collection was empty when this repository was built.
    pub fn was_empty(&self) -> bool {
        self.was_empty
    }

    async fn load(&self, id: ObjectId) -> Result<M::Record, RepositoryError> {
        let document = self
            .collection
            .find_one(&Query::by_id(id))
            .await?
            .ok_or(RepositoryError::NotFound)?;
        M::from_document(&document)
    }
}

impl<C: Clone, M> Clone for DocumentRepository<C, M> {
    fn clone(&self) -> Self {
        Self {
            collection: self.collection.clone(),
            was_empty: self.was_empty,
            _mapping: PhantomData,
        }
    }
}

#[async_trait]
impl<C, M> Repository for DocumentRepository<C, M>
where
    C: DocumentCollection,
    M: DocumentMapping,
{
    type Record = M::Record;
    type Draft = M::Draft;
    type Filter = M::Filter;
    type Id = M::Id;

    #[tracing::instrument(name = "DocumentRepository::create", skip_all, fields(collection = M::COLLECTION))]
    async fn create(&self, draft: M::Draft) -> Result<M::Record, RepositoryError> {
        let id = self.collection.insert_one(M::to_document(&draft)).await?;
        Ok(M::with_id(draft, id))
    }

    #[tracing::instrument(name = "DocumentRepository::find", skip_all, fields(collection = M::COLLECTION))]
    async fn find(&self, filter: &M::Filter) -> Result<Vec<M::Record>, RepositoryError> {
        self.collection
            .find(&M::to_query(filter))
            .await?
            .iter()
            .map(M::from_document)
            .collect()
    }

    #[tracing::instrument(name = "DocumentRepository::find_by_id", skip_all, fields(collection = M::COLLECTION))]
    async fn find_by_id(&self, id: &M::Id) -> Result<M::Record, RepositoryError> {
        self.load(parse_object_id(id.as_ref())?).await
    }

    #[tracing::instrument(name = "DocumentRepository::update", skip_all, fields(collection = M::COLLECTION))]
    async fn update(&self, record: M::Record) -> Result<M::Record, RepositoryError> {
        let id = parse_object_id(M::record_id(&record).as_ref())?;
        let mut stored = self.load(id).await?;

        let mut changes = FieldChanges::default();
        M::diff(&mut stored, record, &mut changes);
        if changes.is_empty() {
            return Ok(stored);
        }

        if !self
            .collection
            .update_fields(id, changes.into_document())
            .await?
        {
            return Err(RepositoryError::NotFound);
        }

        Ok(stored)
    }

    #[tracing::instrument(name = "DocumentRepository::delete", skip_all, fields(collection = M::COLLECTION))]
    async fn delete(&self, id: &M::Id) -> Result<(), RepositoryError> {
        let id = parse_object_id(id.as_ref())?;
        self.collection.delete_one(&Query::by_id(id)).await?;
        Ok(())
    }
}
