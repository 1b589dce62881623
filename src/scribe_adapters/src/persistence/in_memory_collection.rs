use std::{
    collections::{BTreeMap, BTreeSet},
    sync::Arc,
};

use async_trait::async_trait;
use bson::{Bson, Document, oid::ObjectId};
use dashmap::DashMap;
use tokio::sync::RwLock;

use super::document_store::{DocumentCollection, DocumentDatabase, DocumentStoreError, Query};

#[derive(Default)]
struct CollectionState {
    documents: BTreeMap<ObjectId, Document>,
    unique_fields: BTreeSet<String>,
}

impl CollectionState {
    /// First unique field of `candidate` already taken by another document.
    fn conflict(&self, candidate: &Document, own_id: Option<&ObjectId>) -> Option<(String, Bson)> {
        self.unique_fields.iter().find_map(|field| {
            let value = candidate.get(field)?;
            self.documents
                .iter()
                .filter(|(id, _)| Some(*id) != own_id)
                .any(|(_, other)| other.get(field) == Some(value))
                .then(|| (field.clone(), value.clone()))
        })
    }
}

/// Process-local collection with the same unique-index semantics as the
/// real store. Clones share state.
#[derive(Clone)]
pub struct InMemoryCollection {
    name: Arc<str>,
    state: Arc<RwLock<CollectionState>>,
}

impl InMemoryCollection {
    pub fn new(name: &str) -> Self {
        Self {
            name: Arc::from(name),
            state: Arc::new(RwLock::new(CollectionState::default())),
        }
    }

    fn duplicate_key_error(&self, field: &str, value: &Bson) -> DocumentStoreError {
        let value = match value {
            Bson::String(s) => format!("\"{s}\""),
            other => other.to_string(),
        };
        DocumentStoreError::DuplicateKey(format!(
            "E11000 duplicate key error collection: {} index: {field}_1 dup key: {{ {field}: {value} }}",
            self.name
        ))
    }
}

#[async_trait]
impl DocumentCollection for InMemoryCollection {
    fn name(&self) -> &str {
        &self.name
    }

    async fn insert_one(&self, mut document: Document) -> Result<ObjectId, DocumentStoreError> {
        let mut state = self.state.write().await;
        if let Some((field, value)) = state.conflict(&document, None) {
            return Err(self.duplicate_key_error(&field, &value));
        }

        let id = ObjectId::new();
        document.insert("_id", id);
        state.documents.insert(id, document);
        Ok(id)
    }

    async fn find(&self, query: &Query) -> Result<Vec<Document>, DocumentStoreError> {
        let state = self.state.read().await;
        Ok(state
            .documents
            .values()
            .filter(|document| query.matches(document))
            .cloned()
            .collect())
    }

    async fn find_one(&self, query: &Query) -> Result<Option<Document>, DocumentStoreError> {
        let state = self.state.read().await;
        Ok(state
            .documents
            .values()
            .find(|document| query.matches(document))
            .cloned())
    }

    async fn update_fields(
        &self,
        id: ObjectId,
        changes: Document,
    ) -> Result<bool, DocumentStoreError> {
        let mut state = self.state.write().await;
        let Some(stored) = state.documents.get(&id) else {
            return Ok(false);
        };

        let mut updated = stored.clone();
        for (field, value) in changes {
            updated.insert(field, value);
        }
        if let Some((field, value)) = state.conflict(&updated, Some(&id)) {
            return Err(self.duplicate_key_error(&field, &value));
        }

        state.documents.insert(id, updated);
        Ok(true)
    }

    async fn delete_one(&self, query: &Query) -> Result<u64, DocumentStoreError> {
        let mut state = self.state.write().await;
        let found = state
            .documents
            .iter()
            .find(|(_, document)| query.matches(document))
            .map(|(id, _)| *id);

        Ok(match found {
            Some(id) => {
                state.documents.remove(&id);
                1
            }
            None => 0,
        })
    }

    async fn create_unique_index(&self, field: &str) -> Result<(), DocumentStoreError> {
        self.state
            .write()
            .await
            .unique_fields
            .insert(field.to_owned());
        Ok(())
    }

    async fn count(&self) -> Result<u64, DocumentStoreError> {
        Ok(self.state.read().await.documents.len() as u64)
    }
}

/// Named in-memory collections; asking twice for a name yields the same one.
#[derive(Clone, Default)]
pub struct InMemoryDatabase {
    collections: Arc<DashMap<String, InMemoryCollection>>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentDatabase for InMemoryDatabase {
    type Collection = InMemoryCollection;

    fn collection(&self, name: &str) -> InMemoryCollection {
        self.collections
            .entry(name.to_owned())
            .or_insert_with(|| InMemoryCollection::new(name))
            .clone()
    }
}
