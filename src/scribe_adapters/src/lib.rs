pub mod auth;
pub mod config;
pub mod email;
pub mod http;
pub mod persistence;

pub use crate::{
    auth::{Argon2Hasher, BearerAuthError, BearerTokenValidator, JwtTokenCodec},
    config::{ResetTokenBackendKind, Settings, SettingsError},
    email::{MockEmailClient, RelayEmailClient, ResetEmailNotifier},
    http::{ApiError, AppState, Ports},
};
pub use persistence::{
    BlogDocumentRepository, CommentDocumentRepository, DocumentCollection, DocumentDatabase,
    DocumentResetTokenStore, HashMapResetTokenStore, InMemoryCollection, InMemoryDatabase,
    MongoCollection, MongoDatabase, RedisResetTokenStore, ResetTokenBackend,
    UserDocumentRepository,
};
