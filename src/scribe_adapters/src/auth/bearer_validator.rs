use async_trait::async_trait;
use axum_extra::headers::{Authorization, HeaderMapExt, authorization::Bearer};
use scribe_core::{AuthValidator, Claims, TokenCodec, TokenError};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum BearerAuthError {
    #[error("Missing token")]
    MissingToken,
    #[error("Invalid token")]
    InvalidToken(#[from] TokenError),
}

/// Reads `Authorization: Bearer <access token>` and checks it with the
/// token codec.
#[derive(Clone)]
pub struct BearerTokenValidator<T> {
    codec: T,
}

impl<T> BearerTokenValidator<T> {
    pub fn new(codec: T) -> Self {
        Self { codec }
    }
}

#[async_trait]
impl<T> AuthValidator for BearerTokenValidator<T>
where
    T: TokenCodec + Clone + 'static,
{
    type Claims = Claims;
    type RequestParts = http::request::Parts;
    type Error = BearerAuthError;

    async fn validate(&self, parts: &Self::RequestParts) -> Result<Self::Claims, Self::Error> {
        let Authorization(bearer) = parts
            .headers
            .typed_get::<Authorization<Bearer>>()
            .ok_or(BearerAuthError::MissingToken)?;

        Ok(self.codec.validate_access_token(bearer.token())?)
    }
}
