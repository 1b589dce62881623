use scribe_core::{
    Email, HashingError, Password, PasswordHasher, RepositoryError, TokenCodec, TokenError,
    TokenPair, User, UserFilter, UserRepository,
};

/// Error types specific to login use case
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("User not found")]
    UserNotFound,
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Hashing(#[from] HashingError),
    #[error(transparent)]
    Token(#[from] TokenError),
}

/// Login use case - verifies credentials and issues a token pair
pub struct LoginUseCase<'a, U, H, T>
where
    U: UserRepository,
    H: PasswordHasher,
    T: TokenCodec,
{
    user_repository: &'a U,
    hasher: &'a H,
    token_codec: &'a T,
}

impl<'a, U, H, T> LoginUseCase<'a, U, H, T>
where
    U: UserRepository,
    H: PasswordHasher,
    T: TokenCodec,
{
    pub fn new(user_repository: &'a U, hasher: &'a H, token_codec: &'a T) -> Self {
        Self {
            user_repository,
            hasher,
            token_codec,
        }
    }

    /// Resolve the account for `email` and check `password` against its hash.
    #[tracing::instrument(name = "LoginUseCase::authenticate", skip(self, password))]
    pub async fn authenticate(&self, email: &Email, password: &Password) -> Result<User, LoginError> {
        let user = self
            .user_repository
            .find(&UserFilter::by_email(email.clone()))
            .await?
            .into_iter()
            .next()
            .ok_or(LoginError::UserNotFound)?;

        if !self.hasher.verify(&user.password_hash, password).await? {
            return Err(LoginError::InvalidCredentials);
        }

        Ok(user)
    }

    #[tracing::instrument(name = "LoginUseCase::execute", skip(self, password))]
    pub async fn execute(&self, email: Email, password: Password) -> Result<TokenPair, LoginError> {
        let user = self.authenticate(&email, &password).await?;
        let tokens = self.token_codec.issue_pair(&user)?;

        Ok(tokens)
    }
}
