use scribe_core::{
    Email, ProfileUpdate, RepositoryError, User, UserFilter, UserId, UserRepository,
};

#[derive(Debug, thiserror::Error)]
pub enum UserDirectoryError {
    #[error("User not found")]
    UserNotFound,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Lookups and profile maintenance over the user collection.
pub struct UserDirectoryUseCase<'a, U>
where
    U: UserRepository,
{
    user_repository: &'a U,
}

impl<'a, U> UserDirectoryUseCase<'a, U>
where
    U: UserRepository,
{
    pub fn new(user_repository: &'a U) -> Self {
        Self { user_repository }
    }

    #[tracing::instrument(name = "UserDirectoryUseCase::list", skip(self))]
    pub async fn list(&self) -> Result<Vec<User>, UserDirectoryError> {
        Ok(self.user_repository.find(&UserFilter::default()).await?)
    }

    #[tracing::instrument(name = "UserDirectoryUseCase::get_by_id", skip(self))]
    pub async fn get_by_id(&self, id: &UserId) -> Result<User, UserDirectoryError> {
        Ok(self.user_repository.find_by_id(id).await?)
    }

    #[tracing::instrument(name = "UserDirectoryUseCase::get_by_email", skip(self))]
    pub async fn get_by_email(&self, email: Email) -> Result<User, UserDirectoryError> {
        self.first(UserFilter::by_email(email)).await
    }

    #[tracing::instrument(name = "UserDirectoryUseCase::get_by_telegram_username", skip(self))]
    pub async fn get_by_telegram_username(
        &self,
        telegram_username: &str,
    ) -> Result<User, UserDirectoryError> {
        self.first(UserFilter::by_telegram_username(telegram_username))
            .await
    }

    /// Empty fields in `update` keep their stored values.
    #[tracing::instrument(name = "UserDirectoryUseCase::update_profile", skip(self, update))]
    pub async fn update_profile(
        &self,
        id: &UserId,
        update: ProfileUpdate,
    ) -> Result<User, UserDirectoryError> {
        let mut user = self.user_repository.find_by_id(id).await?;
        user.apply_profile(update);

        Ok(self.user_repository.update(user).await?)
    }

    #[tracing::instrument(name = "UserDirectoryUseCase::delete", skip(self))]
    pub async fn delete(&self, id: &UserId) -> Result<(), UserDirectoryError> {
        Ok(self.user_repository.delete(id).await?)
    }

    async fn first(&self, filter: UserFilter) -> Result<User, UserDirectoryError> {
        self.user_repository
            .find(&filter)
            .await?
            .into_iter()
            .next()
            .ok_or(UserDirectoryError::UserNotFound)
    }
}
