use chrono::{DateTime, Utc};
use scribe_core::{
    AccountRole, DateRange, Email, Password, ProfileUpdate, Registration, User, UserError,
};
use secrecy::Secret;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct RefreshRequest {
    #[validate(length(min = 1))]
    pub refresh_token: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ForgotPasswordRequest {
    #[validate(email)]
    pub email: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ResetPasswordQuery {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub token: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ResetPasswordRequest {
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
    #[validate(length(min = 1))]
    pub telegram_username: String,
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    #[validate(length(min = 1))]
    pub phone_number: String,
}

impl CreateUserRequest {
    /// Accounts created over HTTP always start inactive and unprivileged.
    pub fn into_registration(self) -> Result<Registration, UserError> {
        Ok(Registration {
            email: Email::parse(self.email)?,
            password: Password::parse(Secret::new(self.password))?,
            telegram_username: self.telegram_username,
            first_name: self.first_name,
            last_name: self.last_name,
            phone_number: self.phone_number,
            role: AccountRole::Member,
        })
    }
}

/// Profile fields; omitted or empty fields keep their stored values.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct UpdateUserRequest {
    pub telegram_username: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
}

impl From<UpdateUserRequest> for ProfileUpdate {
    fn from(request: UpdateUserRequest) -> Self {
        ProfileUpdate {
            telegram_username: request.telegram_username,
            first_name: request.first_name,
            last_name: request.last_name,
            phone_number: request.phone_number,
        }
    }
}

/// A user as shown to clients. The password hash is never included.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub telegram_username: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub is_active: bool,
    pub is_admin: bool,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.into(),
            telegram_username: user.telegram_username,
            first_name: user.first_name,
            last_name: user.last_name,
            phone_number: user.phone_number,
            is_active: user.is_active,
            is_admin: user.is_admin,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct BlogRequest {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub body: String,
    #[validate(length(min = 1))]
    pub status: String,
}

/// `GET /blogs` filters. Only one kind of filter applies per request, checked
/// in this order: writer, status, date range.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct BlogQuery {
    pub writer_id: Option<String>,
    pub status: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

impl BlogQuery {
    pub fn date_range(&self) -> DateRange {
        DateRange {
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CommentRequest {
    #[validate(length(min = 1))]
    pub body: String,
}
