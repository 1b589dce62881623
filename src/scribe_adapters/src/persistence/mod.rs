pub mod document_repository;
pub mod document_reset_token_store;
pub mod document_store;
pub mod duplicate_key;
pub mod hashmap_reset_token_store;
pub mod in_memory_collection;
pub mod mappings;
pub mod mongo_collection;
pub mod redis_reset_token_store;
pub mod reset_token_backend;

pub use document_repository::{DocumentMapping, DocumentRepository, FieldChanges};
pub use document_reset_token_store::DocumentResetTokenStore;
pub use document_store::{
    Condition, DocumentCollection, DocumentDatabase, DocumentStoreError, Query,
};
pub use duplicate_key::parse_duplicate_key_fields;
pub use hashmap_reset_token_store::HashMapResetTokenStore;
pub use in_memory_collection::{InMemoryCollection, InMemoryDatabase};
pub use mappings::{
    BlogDocumentRepository, CommentDocumentRepository, UserDocumentRepository,
};
pub use mongo_collection::{MongoCollection, MongoDatabase};
pub use redis_reset_token_store::{RedisResetTokenStore, get_redis_connection};
pub use reset_token_backend::ResetTokenBackend;
