use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use scribe_application::{
    ForgotPasswordError, LoginError, RefreshTokensError, RegisterError, ResetPasswordError,
    UserDirectoryError,
};
use scribe_core::{RepositoryError, TokenError, UserError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Duplicate(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("Admin access is required")]
    Forbidden,

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status_code, error_message) = match self {
            ApiError::Duplicate(_) => (StatusCode::CONFLICT, self.to_string()),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::InvalidInput(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, self.to_string()),
            ApiError::Forbidden => (StatusCode::FORBIDDEN, self.to_string()),
            ApiError::UnexpectedError(detail) => {
                tracing::error!(error = %detail, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    String::from("Unexpected error"),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status_code, body).into_response()
    }
}

impl From<RepositoryError> for ApiError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::Duplicate { .. } => ApiError::Duplicate(error.to_string()),
            RepositoryError::NotFound => ApiError::NotFound(error.to_string()),
            RepositoryError::InvalidId(_) => ApiError::InvalidInput(error.to_string()),
            RepositoryError::Unexpected(e) => ApiError::UnexpectedError(e),
        }
    }
}

impl From<UserError> for ApiError {
    fn from(error: UserError) -> Self {
        ApiError::InvalidInput(error.to_string())
    }
}

impl From<TokenError> for ApiError {
    fn from(error: TokenError) -> Self {
        match error {
            TokenError::InvalidClaims => ApiError::Unauthorized(error.to_string()),
            TokenError::Signing(e) => ApiError::UnexpectedError(e),
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::InvalidInput(errors.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidInput(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidInput(rejection.body_text())
    }
}

impl From<RegisterError> for ApiError {
    fn from(error: RegisterError) -> Self {
        match error {
            RegisterError::Repository(e) => e.into(),
            RegisterError::Hashing(e) => ApiError::UnexpectedError(e.to_string()),
        }
    }
}

impl From<LoginError> for ApiError {
    fn from(error: LoginError) -> Self {
        match error {
            LoginError::UserNotFound => ApiError::NotFound(error.to_string()),
            LoginError::InvalidCredentials => ApiError::Unauthorized(error.to_string()),
            LoginError::Repository(e) => e.into(),
            LoginError::Hashing(e) => ApiError::UnexpectedError(e.to_string()),
            LoginError::Token(e) => e.into(),
        }
    }
}

impl From<RefreshTokensError> for ApiError {
    fn from(error: RefreshTokensError) -> Self {
        match error {
            RefreshTokensError::Token(e) => e.into(),
            RefreshTokensError::Repository(e) => e.into(),
        }
    }
}

impl From<ForgotPasswordError> for ApiError {
    fn from(error: ForgotPasswordError) -> Self {
        match error {
            ForgotPasswordError::UserNotFound => ApiError::NotFound(error.to_string()),
            ForgotPasswordError::Repository(e) => e.into(),
            ForgotPasswordError::TokenGeneration(_)
            | ForgotPasswordError::TokenStore(_)
            | ForgotPasswordError::Notification(_) => ApiError::UnexpectedError(error.to_string()),
        }
    }
}

impl From<ResetPasswordError> for ApiError {
    fn from(error: ResetPasswordError) -> Self {
        match error {
            ResetPasswordError::UserNotFound => ApiError::NotFound(error.to_string()),
            ResetPasswordError::InvalidToken => ApiError::Unauthorized(error.to_string()),
            ResetPasswordError::Repository(e) => e.into(),
            ResetPasswordError::TokenStore(_) | ResetPasswordError::Hashing(_) => {
                ApiError::UnexpectedError(error.to_string())
            }
        }
    }
}

impl From<UserDirectoryError> for ApiError {
    fn from(error: UserDirectoryError) -> Self {
        match error {
            UserDirectoryError::UserNotFound => ApiError::NotFound(error.to_string()),
            UserDirectoryError::Repository(e) => e.into(),
        }
    }
}
