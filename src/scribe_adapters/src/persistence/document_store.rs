use std::cmp::Ordering;

use async_trait::async_trait;
use bson::{Bson, Document, doc, oid::ObjectId};
use scribe_core::RepositoryError;
use thiserror::Error;

use super::duplicate_key::parse_duplicate_key_fields;

#[derive(Debug, Error)]
pub enum DocumentStoreError {
    /// Unique index violation, carrying the store's raw diagnostic.
    #[error("{0}")]
    DuplicateKey(String),
    #[error("Document store error: {0}")]
    Driver(String),
}

impl From<DocumentStoreError> for RepositoryError {
    fn from(error: DocumentStoreError) -> Self {
        match error {
            DocumentStoreError::DuplicateKey(message) => RepositoryError::Duplicate {
                fields: parse_duplicate_key_fields(&message),
            },
            DocumentStoreError::Driver(message) => RepositoryError::Unexpected(message),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    Equals(Bson),
    /// Inclusive bounds; an absent bound is left out.
    Range {
        gte: Option<Bson>,
        lte: Option<Bson>,
    },
}

/// Conjunction of per-field conditions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    conditions: Vec<(String, Condition)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn by_id(id: ObjectId) -> Self {
        Self::new().equals("_id", id)
    }

    pub fn equals(mut self, field: &str, value: impl Into<Bson>) -> Self {
        self.conditions
            .push((field.to_owned(), Condition::Equals(value.into())));
        self
    }

    /// Adds an equality condition unless `value` is absent or empty.
    pub fn equals_non_empty(self, field: &str, value: Option<&str>) -> Self {
        match value {
            Some(value) if !value.is_empty() => self.equals(field, value),
            _ => self,
        }
    }

    pub fn range(mut self, field: &str, gte: Option<Bson>, lte: Option<Bson>) -> Self {
        if gte.is_some() || lte.is_some() {
            self.conditions
                .push((field.to_owned(), Condition::Range { gte, lte }));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn conditions(&self) -> &[(String, Condition)] {
        &self.conditions
    }

    /// Driver filter form: `{field: value}` or `{field: {$gte, $lte}}`.
    pub fn to_document(&self) -> Document {
        let mut filter = Document::new();
        for (field, condition) in &self.conditions {
            match condition {
                Condition::Equals(value) => {
                    filter.insert(field.clone(), value.clone());
                }
                Condition::Range { gte, lte } => {
                    let mut bounds = Document::new();
                    if let Some(gte) = gte {
                        bounds.insert("$gte", gte.clone());
                    }
                    if let Some(lte) = lte {
                        bounds.insert("$lte", lte.clone());
                    }
                    filter.insert(field.clone(), bounds);
                }
            }
        }
        filter
    }

    /// Evaluates the query against a document held in process.
    pub fn matches(&self, document: &Document) -> bool {
        self.conditions
            .iter()
            .all(|(field, condition)| match (condition, document.get(field)) {
                (Condition::Equals(expected), Some(actual)) => expected == actual,
                (Condition::Equals(_), None) => false,
                (Condition::Range { gte, lte }, Some(actual)) => {
                    let above = gte.as_ref().is_none_or(|bound| {
                        matches!(
                            compare(actual, bound),
                            Some(Ordering::Greater | Ordering::Equal)
                        )
                    });
                    let below = lte.as_ref().is_none_or(|bound| {
                        matches!(
                            compare(actual, bound),
                            Some(Ordering::Less | Ordering::Equal)
                        )
                    });
                    above && below
                }
                (Condition::Range { .. }, None) => false,
            })
    }
}

fn compare(a: &Bson, b: &Bson) -> Option<Ordering> {
    match (a, b) {
        (Bson::DateTime(a), Bson::DateTime(b)) => Some(a.cmp(b)),
        (Bson::String(a), Bson::String(b)) => Some(a.cmp(b)),
        (Bson::Int32(a), Bson::Int32(b)) => Some(a.cmp(b)),
        (Bson::Int64(a), Bson::Int64(b)) => Some(a.cmp(b)),
        (Bson::Double(a), Bson::Double(b)) => a.partial_cmp(b),
        _ => None,
    }
}

/// A named collection of BSON documents keyed by `_id`.
#[async_trait]
pub trait DocumentCollection: Send + Sync {
    fn name(&self) -> &str;

    /// Stores `document` under a fresh `_id` and returns it.
    async fn insert_one(&self, document: Document) -> Result<ObjectId, DocumentStoreError>;
    async fn find(&self, query: &Query) -> Result<Vec<Document>, DocumentStoreError>;
    async fn find_one(&self, query: &Query) -> Result<Option<Document>, DocumentStoreError>;
    /// Applies `changes` as a `$set`. Returns whether a document matched `id`.
    async fn update_fields(
        &self,
        id: ObjectId,
        changes: Document,
    ) -> Result<bool, DocumentStoreError>;
    /// Removes the first match; returns how many documents were removed.
    async fn delete_one(&self, query: &Query) -> Result<u64, DocumentStoreError>;
    async fn create_unique_index(&self, field: &str) -> Result<(), DocumentStoreError>;
    async fn count(&self) -> Result<u64, DocumentStoreError>;
}

/// Hands out collections by name.
pub trait DocumentDatabase: Send + Sync {
    type Collection: DocumentCollection + Clone + 'static;

    fn collection(&self, name: &str) -> Self::Collection;
}

pub(crate) fn set_document(changes: Document) -> Document {
    doc! { "$set": changes }
}
