use scribe_core::{RepositoryError, User, UserId, UserRepository};

/// Activate/deactivate/promote/demote: read, flip one flag, diff-update.
pub struct AccountFlagsUseCase<'a, U>
where
    U: UserRepository,
{
    user_repository: &'a U,
}

impl<'a, U> AccountFlagsUseCase<'a, U>
where
    U: UserRepository,
{
    pub fn new(user_repository: &'a U) -> Self {
        Self { user_repository }
    }

    #[tracing::instrument(name = "AccountFlagsUseCase::activate", skip(self))]
    pub async fn activate(&self, id: &UserId) -> Result<User, RepositoryError> {
        self.set(id, |user| user.is_active = true).await
    }

    #[tracing::instrument(name = "AccountFlagsUseCase::deactivate", skip(self))]
    pub async fn deactivate(&self, id: &UserId) -> Result<User, RepositoryError> {
        self.set(id, |user| user.is_active = false).await
    }

    #[tracing::instrument(name = "AccountFlagsUseCase::promote", skip(self))]
    pub async fn promote(&self, id: &UserId) -> Result<User, RepositoryError> {
        self.set(id, |user| user.is_admin = true).await
    }

    #[tracing::instrument(name = "AccountFlagsUseCase::demote", skip(self))]
    pub async fn demote(&self, id: &UserId) -> Result<User, RepositoryError> {
        self.set(id, |user| user.is_admin = false).await
    }

    async fn set(&self, id: &UserId, flip: impl FnOnce(&mut User)) -> Result<User, RepositoryError> {
        let mut user = self.user_repository.find_by_id(id).await?;
        flip(&mut user);
        self.user_repository.update(user).await
    }
}
