use scribe_core::{
    Email, RepositoryError, ResetNotifier, ResetToken, ResetTokenError, ResetTokenStore,
    ResetTokenStoreError, UserFilter, UserRepository,
};

#[derive(Debug, thiserror::Error)]
pub enum ForgotPasswordError {
    #[error("User not found")]
    UserNotFound,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    TokenGeneration(#[from] ResetTokenError),
    #[error(transparent)]
    TokenStore(#[from] ResetTokenStoreError),
    #[error("Failed to send reset email: {0}")]
    Notification(String),
}

/// Forgot-password use case - issues a reset token and mails it.
///
/// A new token replaces any outstanding one for the same email. Nothing is
/// retried: a failed send leaves the stored token in place.
pub struct ForgotPasswordUseCase<'a, U, S, N>
where
    U: UserRepository,
    S: ResetTokenStore,
    N: ResetNotifier,
{
    user_repository: &'a U,
    reset_token_store: &'a S,
    notifier: &'a N,
}

impl<'a, U, S, N> ForgotPasswordUseCase<'a, U, S, N>
where
    U: UserRepository,
    S: ResetTokenStore,
    N: ResetNotifier,
{
    pub fn new(user_repository: &'a U, reset_token_store: &'a S, notifier: &'a N) -> Self {
        Self {
            user_repository,
            reset_token_store,
            notifier,
        }
    }

    #[tracing::instrument(name = "ForgotPasswordUseCase::execute", skip(self))]
    pub async fn execute(&self, email: Email) -> Result<(), ForgotPasswordError> {
        let user = self
            .user_repository
            .find(&UserFilter::by_email(email))
            .await?
            .into_iter()
            .next()
            .ok_or(ForgotPasswordError::UserNotFound)?;

        let token = ResetToken::generate()?;
        self.reset_token_store
            .put(&user.email, token.clone())
            .await?;

        self.notifier
            .send_reset_email(&user.email, &token)
            .await
            .map_err(ForgotPasswordError::Notification)?;

        tracing::info!("Reset token issued");
        Ok(())
    }
}
