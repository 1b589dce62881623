use scribe_core::{HashingError, PasswordHasher, Registration, RepositoryError, User, UserRepository};

#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Hashing(#[from] HashingError),
}

/// Register use case - hashes the password and stores the account.
///
/// The account's initial flags come from `Registration::role`; a duplicate
/// email, telegram handle or phone number surfaces as
/// `RepositoryError::Duplicate` unchanged.
pub struct RegisterUseCase<'a, U, H>
where
    U: UserRepository,
    H: PasswordHasher,
{
    user_repository: &'a U,
    hasher: &'a H,
}

impl<'a, U, H> RegisterUseCase<'a, U, H>
where
    U: UserRepository,
    H: PasswordHasher,
{
    pub fn new(user_repository: &'a U, hasher: &'a H) -> Self {
        Self {
            user_repository,
            hasher,
        }
    }

    #[tracing::instrument(name = "RegisterUseCase::execute", skip_all, fields(email = %registration.email))]
    pub async fn execute(&self, registration: Registration) -> Result<User, RegisterError> {
        let password_hash = self.hasher.hash(&registration.password).await?;
        let user = self
            .user_repository
            .create(registration.into_new_user(password_hash))
            .await?;

        Ok(user)
    }
}
