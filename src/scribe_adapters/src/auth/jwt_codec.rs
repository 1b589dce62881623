use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use scribe_core::{Claims, TokenCodec, TokenError, TokenKind, TokenPair, User};
use secrecy::ExposeSecret;

use crate::config::JwtSettings;

/// HS256 access/refresh tokens signed with one shared secret.
#[derive(Clone)]
pub struct JwtTokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    issuer: String,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl JwtTokenCodec {
    pub fn new(settings: &JwtSettings) -> Self {
        let secret = settings.secret.expose_secret().as_bytes();

        // Expiry is checked against the caller's clock in `validate_at`.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.validate_exp = false;
        validation.set_issuer(&[settings.issuer.as_str()]);

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            issuer: settings.issuer.clone(),
            access_ttl: settings.access_ttl(),
            refresh_ttl: settings.refresh_ttl(),
        }
    }

    pub fn issue_pair_at(&self, user: &User, now: DateTime<Utc>) -> Result<TokenPair, TokenError> {
        let refresh = Claims::for_user(user, TokenKind::Refresh, &self.issuer, now, self.refresh_ttl);
        let access = refresh.restamped(TokenKind::Access, self.access_ttl);

        Ok(TokenPair {
            refresh_token: self.sign(&refresh)?,
            access_token: self.sign(&access)?,
        })
    }

    /// Signature, issuer, kind and expiry must all hold at `now`.
    pub fn validate_at(
        &self,
        token: &str,
        kind: TokenKind,
        now: DateTime<Utc>,
    ) -> Result<Claims, TokenError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!(error = %e, "token rejected");
                TokenError::InvalidClaims
            })?;

        if claims.kind != kind || !claims.is_live_at(now) {
            return Err(TokenError::InvalidClaims);
        }

        Ok(claims)
    }

    fn sign(&self, claims: &Claims) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }
}

impl TokenCodec for JwtTokenCodec {
    fn issue_pair(&self, user: &User) -> Result<TokenPair, TokenError> {
        self.issue_pair_at(user, Utc::now())
    }

    fn validate_access_token(&self, token: &str) -> Result<Claims, TokenError> {
        self.validate_at(token, TokenKind::Access, Utc::now())
    }

    fn validate_refresh_token(&self, token: &str) -> Result<Claims, TokenError> {
        self.validate_at(token, TokenKind::Refresh, Utc::now())
    }
}
