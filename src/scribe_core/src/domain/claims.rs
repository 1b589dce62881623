use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::{email::Email, ids::UserId, user::User};

/// Discriminates the two signed token kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

/// Identity and lifetime carried inside a signed token.
///
/// Timestamps are seconds since the epoch, as registered JWT claims expect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: UserId,
    pub email: Email,
    pub telegram_username: String,
    pub is_admin: bool,
    #[serde(rename = "type")]
    pub kind: TokenKind,
    pub iss: String,
    pub iat: i64,
    pub nbf: i64,
    pub exp: i64,
}

impl Claims {
    pub fn for_user(
        user: &User,
        kind: TokenKind,
        issuer: &str,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Self {
        let now = issued_at.timestamp();

        Self {
            user_id: user.id.clone(),
            email: user.email.clone(),
            telegram_username: user.telegram_username.clone(),
            is_admin: user.is_admin,
            kind,
            iss: issuer.to_owned(),
            iat: now,
            nbf: now,
            exp: (issued_at + ttl).timestamp(),
        }
    }

    /// Re-stamp the same identity as another kind with a new lifetime.
    pub fn restamped(&self, kind: TokenKind, ttl: Duration) -> Self {
        Self {
            kind,
            exp: self.iat + ttl.num_seconds(),
            ..self.clone()
        }
    }

    /// A token is live while its expiry is strictly in the future.
    pub fn is_live_at(&self, now: DateTime<Utc>) -> bool {
        self.exp > now.timestamp()
    }
}

/// A freshly issued refresh/access pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub refresh_token: String,
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use secrecy::Secret;

    use super::*;

    fn user() -> User {
        User {
            id: UserId::new("42"),
            email: Email::parse("a@x.com").unwrap(),
            password_hash: Secret::from("hash".to_owned()),
            telegram_username: "@a".to_owned(),
            first_name: String::new(),
            last_name: String::new(),
            phone_number: "+1".to_owned(),
            is_active: true,
            is_admin: true,
        }
    }

    #[test]
    fn test_for_user_copies_identity_and_stamps_times() {
        let now = Utc::now();
        let claims = Claims::for_user(&user(), TokenKind::Refresh, "scribe", now, Duration::seconds(60));

        assert_eq!(claims.user_id.as_str(), "42");
        assert_eq!(claims.email.as_str(), "a@x.com");
        assert!(claims.is_admin);
        assert_eq!(claims.kind, TokenKind::Refresh);
        assert_eq!(claims.iat, now.timestamp());
        assert_eq!(claims.nbf, now.timestamp());
        assert_eq!(claims.exp, now.timestamp() + 60);
    }

    #[test]
    fn test_restamped_changes_kind_and_expiry_only() {
        let now = Utc::now();
        let refresh = Claims::for_user(&user(), TokenKind::Refresh, "scribe", now, Duration::seconds(60));
        let access = refresh.restamped(TokenKind::Access, Duration::seconds(10));

        assert_eq!(access.kind, TokenKind::Access);
        assert_eq!(access.exp, now.timestamp() + 10);
        assert_eq!(access.iat, refresh.iat);
        assert_eq!(access.user_id, refresh.user_id);
    }

    #[test]
    fn test_expired_claims_are_not_live() {
        let issued = Utc::now() - Duration::seconds(30);
        let claims = Claims::for_user(&user(), TokenKind::Access, "scribe", issued, Duration::seconds(10));
        assert!(!claims.is_live_at(Utc::now()));
    }

    #[test]
    fn test_kind_serializes_lowercase_under_type() {
        let claims = Claims::for_user(&user(), TokenKind::Access, "scribe", Utc::now(), Duration::seconds(10));
        let json = serde_json::to_value(&claims).unwrap();
        assert_eq!(json["type"], "access");
    }
}
