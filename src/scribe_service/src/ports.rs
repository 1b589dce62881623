use scribe_adapters::{
    Argon2Hasher, BearerTokenValidator, BlogDocumentRepository, CommentDocumentRepository,
    DocumentCollection, DocumentDatabase, DocumentResetTokenStore, JwtTokenCodec,
    RedisResetTokenStore, ResetEmailNotifier, ResetTokenBackend, ResetTokenBackendKind, Settings,
    UserDocumentRepository,
    config::{JwtSettings, constants::collections},
    http::Ports,
    persistence::get_redis_connection,
};
use scribe_core::{EmailClient, RepositoryError};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Every port backed by one document database.
pub struct DocumentPorts<C, E> {
    users: UserDocumentRepository<C>,
    blogs: BlogDocumentRepository<C>,
    comments: CommentDocumentRepository<C>,
    reset_tokens: ResetTokenBackend<C>,
    hasher: Argon2Hasher,
    tokens: JwtTokenCodec,
    notifier: ResetEmailNotifier<E>,
    validator: BearerTokenValidator<JwtTokenCodec>,
}

impl<C, E> DocumentPorts<C, E>
where
    C: DocumentCollection + Clone + 'static,
    E: EmailClient + 'static,
{
    /// Opens the entity collections and creates their indexes.
    pub async fn build<D>(
        database: &D,
        reset_tokens: ResetTokenBackend<C>,
        hasher: Argon2Hasher,
        jwt: &JwtSettings,
        notifier: ResetEmailNotifier<E>,
    ) -> Result<Self, RepositoryError>
    where
        D: DocumentDatabase<Collection = C>,
    {
        let tokens = JwtTokenCodec::new(jwt);

        Ok(Self {
            users: UserDocumentRepository::new(database.collection(collections::USERS)).await?,
            blogs: BlogDocumentRepository::new(database.collection(collections::BLOGS)).await?,
            comments: CommentDocumentRepository::new(database.collection(collections::COMMENTS))
                .await?,
            reset_tokens,
            hasher,
            validator: BearerTokenValidator::new(tokens.clone()),
            tokens,
            notifier,
        })
    }

    /// Whether the user collection held no documents when the ports were built.
    pub fn users_were_empty(&self) -> bool {
        self.users.was_empty()
    }
}

/// The reset-token store selected by `settings.reset_tokens`.
pub fn reset_token_backend<D>(
    settings: &Settings,
    database: &D,
) -> redis::RedisResult<ResetTokenBackend<D::Collection>>
where
    D: DocumentDatabase,
{
    match settings.reset_tokens.backend {
        ResetTokenBackendKind::Document => Ok(ResetTokenBackend::Document(
            DocumentResetTokenStore::new(database.collection(collections::RESET_TOKENS)),
        )),
        ResetTokenBackendKind::Redis => {
            let conn = get_redis_connection(&settings.reset_tokens.redis_host_name)?;
            Ok(ResetTokenBackend::Redis(RedisResetTokenStore::new(Arc::new(
                RwLock::new(conn),
            ))))
        }
    }
}

impl<C, E> Ports for DocumentPorts<C, E>
where
    C: DocumentCollection + Clone + 'static,
    E: EmailClient + 'static,
{
    type Users = UserDocumentRepository<C>;
    type Blogs = BlogDocumentRepository<C>;
    type Comments = CommentDocumentRepository<C>;
    type ResetTokens = ResetTokenBackend<C>;
    type Hasher = Argon2Hasher;
    type Tokens = JwtTokenCodec;
    type Notifier = ResetEmailNotifier<E>;
    type Validator = BearerTokenValidator<JwtTokenCodec>;

    fn users(&self) -> &Self::Users {
        &self.users
    }

    fn blogs(&self) -> &Self::Blogs {
        &self.blogs
    }

    fn comments(&self) -> &Self::Comments {
        &self.comments
    }

    fn reset_tokens(&self) -> &Self::ResetTokens {
        &self.reset_tokens
    }

    fn hasher(&self) -> &Self::Hasher {
        &self.hasher
    }

    fn tokens(&self) -> &Self::Tokens {
        &self.tokens
    }

    fn notifier(&self) -> &Self::Notifier {
        &self.notifier
    }

    fn validator(&self) -> &Self::Validator {
        &self.validator
    }
}
