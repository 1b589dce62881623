use async_trait::async_trait;
use secrecy::Secret;
use thiserror::Error;

use crate::domain::{
    claims::{Claims, TokenPair},
    email::Email,
    password::Password,
    reset_token::ResetToken,
    user::User,
};

#[async_trait]
pub trait EmailClient: Send + Sync {
    async fn send_email(
        &self,
        recipient: &Email,
        subject: &str,
        content: &str,
    ) -> Result<(), String>;
}

/// Delivers a freshly issued reset token to its owner.
#[async_trait]
pub trait ResetNotifier: Send + Sync {
    async fn send_reset_email(&self, recipient: &Email, token: &ResetToken) -> Result<(), String>;
}

#[derive(Debug, Error)]
pub enum HashingError {
    #[error("Failed to hash password: {0}")]
    Hash(String),
    #[error("Hashing task failed: {0}")]
    Task(String),
}

/// One-way salted password hashing.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &Password) -> Result<Secret<String>, HashingError>;

    /// `Ok(false)` on mismatch; only a malformed stored hash or a failed
    /// worker surfaces as an error.
    async fn verify(
        &self,
        password_hash: &Secret<String>,
        candidate: &Password,
    ) -> Result<bool, HashingError>;
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Invalid claims")]
    InvalidClaims,
    #[error("Failed to sign token: {0}")]
    Signing(String),
}

impl PartialEq for TokenError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::InvalidClaims, Self::InvalidClaims) | (Self::Signing(_), Self::Signing(_))
        )
    }
}

/// Issues and checks signed access/refresh tokens.
///
/// Validation is pure computation, so the methods are synchronous.
pub trait TokenCodec: Send + Sync {
    fn issue_pair(&self, user: &User) -> Result<TokenPair, TokenError>;
    fn validate_access_token(&self, token: &str) -> Result<Claims, TokenError>;
    fn validate_refresh_token(&self, token: &str) -> Result<Claims, TokenError>;
}
