use scribe_core::{
    Email, HashingError, Password, PasswordHasher, RepositoryError, ResetToken, ResetTokenStore,
    ResetTokenStoreError, UserFilter, UserRepository,
};

#[derive(Debug, thiserror::Error)]
pub enum ResetPasswordError {
    #[error("User not found")]
    UserNotFound,
    #[error("Invalid reset token")]
    InvalidToken,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    TokenStore(ResetTokenStoreError),
    #[error(transparent)]
    Hashing(#[from] HashingError),
}

impl From<ResetTokenStoreError> for ResetPasswordError {
    fn from(error: ResetTokenStoreError) -> Self {
        match error {
            ResetTokenStoreError::TokenNotFound => Self::InvalidToken,
            other => Self::TokenStore(other),
        }
    }
}

/// Reset-password use case - consumes a reset token and sets a new password.
///
/// The stored token is deleted before the password is written. If the write
/// fails the token is already spent and a new one must be requested.
pub struct ResetPasswordUseCase<'a, U, S, H>
where
    U: UserRepository,
    S: ResetTokenStore,
    H: PasswordHasher,
{
    user_repository: &'a U,
    reset_token_store: &'a S,
    hasher: &'a H,
}

impl<'a, U, S, H> ResetPasswordUseCase<'a, U, S, H>
where
    U: UserRepository,
    S: ResetTokenStore,
    H: PasswordHasher,
{
    pub fn new(user_repository: &'a U, reset_token_store: &'a S, hasher: &'a H) -> Self {
        Self {
            user_repository,
            reset_token_store,
            hasher,
        }
    }

    #[tracing::instrument(name = "ResetPasswordUseCase::execute", skip(self, token, new_password))]
    pub async fn execute(
        &self,
        email: Email,
        token: ResetToken,
        new_password: Password,
    ) -> Result<(), ResetPasswordError> {
        let mut user = self
            .user_repository
            .find(&UserFilter::by_email(email))
            .await?
            .into_iter()
            .next()
            .ok_or(ResetPasswordError::UserNotFound)?;

        let stored = self.reset_token_store.get(&user.email).await?;
        if stored != token {
            return Err(ResetPasswordError::InvalidToken);
        }

        self.reset_token_store.delete(&user.email).await?;

        user.password_hash = self.hasher.hash(&new_password).await?;
        self.user_repository.update(user).await?;

        tracing::info!("Password reset");
        Ok(())
    }
}
