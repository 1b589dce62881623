use secrecy::Secret;
use thiserror::Error;

use super::{email::Email, ids::UserId, password::Password};

#[derive(Debug, Error, PartialEq)]
pub enum UserError {
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),
    #[error("Password must not be empty")]
    EmptyPassword,
}

/// A stored account.
///
/// `password_hash` is the one-way hash; the plaintext never reaches this type.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: Email,
    pub password_hash: Secret<String>,
    pub telegram_username: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub is_active: bool,
    pub is_admin: bool,
}

impl User {
    /// Overwrite the profile fields with `update`.
    ///
    /// Empty fields in `update` leave the stored value in place once the
    /// record goes through the repository's diff update.
    pub fn apply_profile(&mut self, update: ProfileUpdate) {
        self.telegram_username = update.telegram_username;
        self.first_name = update.first_name;
        self.last_name = update.last_name;
        self.phone_number = update.phone_number;
    }
}

/// A user record that has not been stored yet.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: Email,
    pub password_hash: Secret<String>,
    pub telegram_username: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub is_active: bool,
    pub is_admin: bool,
}

impl NewUser {
    pub fn with_id(self, id: UserId) -> User {
        User {
            id,
            email: self.email,
            password_hash: self.password_hash,
            telegram_username: self.telegram_username,
            first_name: self.first_name,
            last_name: self.last_name,
            phone_number: self.phone_number,
            is_active: self.is_active,
            is_admin: self.is_admin,
        }
    }
}

/// How an account comes into existence; decides its initial flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountRole {
    /// Regular registration: inactive, not an administrator.
    Member,
    /// First-boot administrator: active and administrator.
    SeededAdmin,
}

/// Registration input, carrying the plaintext password.
#[derive(Debug, Clone)]
pub struct Registration {
    pub email: Email,
    pub password: Password,
    pub telegram_username: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub role: AccountRole,
}

impl Registration {
    pub fn into_new_user(self, password_hash: Secret<String>) -> NewUser {
        let privileged = self.role == AccountRole::SeededAdmin;

        NewUser {
            email: self.email,
            password_hash,
            telegram_username: self.telegram_username,
            first_name: self.first_name,
            last_name: self.last_name,
            phone_number: self.phone_number,
            is_active: privileged,
            is_admin: privileged,
        }
    }
}

/// Profile fields a user may change about themselves.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub telegram_username: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
}

/// Sparse user query. `None` and empty values are left out of the query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserFilter {
    pub email: Option<Email>,
    pub telegram_username: Option<String>,
    pub phone_number: Option<String>,
}

impl UserFilter {
    pub fn by_email(email: Email) -> Self {
        Self {
            email: Some(email),
            ..Self::default()
        }
    }

    pub fn by_telegram_username(username: impl Into<String>) -> Self {
        Self {
            telegram_username: Some(username.into()),
            ..Self::default()
        }
    }

    pub fn by_phone_number(phone_number: impl Into<String>) -> Self {
        Self {
            phone_number: Some(phone_number.into()),
            ..Self::default()
        }
    }
}
