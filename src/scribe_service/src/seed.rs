use scribe_adapters::config::AdminSettings;
use scribe_application::{RegisterError, RegisterUseCase};
use scribe_core::{
    AccountRole, Email, Password, PasswordHasher, Registration, User, UserError, UserRepository,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Invalid administrator settings: {0}")]
    InvalidAdmin(#[from] UserError),
    #[error(transparent)]
    Register(#[from] RegisterError),
}

/// Creates the configured administrator, active and privileged.
#[tracing::instrument(name = "Seeding administrator", skip_all)]
pub async fn seed_admin<U, H>(
    user_repository: &U,
    hasher: &H,
    admin: &AdminSettings,
) -> Result<User, SeedError>
where
    U: UserRepository,
    H: PasswordHasher,
{
    let registration = Registration {
        email: Email::parse(admin.email.as_str())?,
        password: Password::parse(admin.password.clone())?,
        telegram_username: admin.telegram_username.clone(),
        first_name: admin.first_name.clone(),
        last_name: admin.last_name.clone(),
        phone_number: admin.phone_number.clone(),
        role: AccountRole::SeededAdmin,
    };

    let user = RegisterUseCase::new(user_repository, hasher)
        .execute(registration)
        .await?;

    tracing::info!(email = %user.email, "Administrator created");
    Ok(user)
}
