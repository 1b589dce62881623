//! Hand-written port doubles shared by the use-case tests.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use secrecy::{ExposeSecret, Secret};
use tokio::sync::RwLock;

use scribe_core::{
    AccountRole, Claims, Email, HashingError, NewUser, Password, Registration, Repository,
    RepositoryError, ResetNotifier, ResetToken, ResetTokenStore, ResetTokenStoreError,
    TokenCodec, TokenError, TokenKind, TokenPair, User, UserFilter, UserId,
};

pub fn email(raw: &str) -> Email {
    Email::parse(raw).unwrap()
}

pub fn password(raw: &str) -> Password {
    Password::try_from(Secret::from(raw.to_owned())).unwrap()
}

pub fn registration(address: &str, plaintext: &str, telegram: &str, phone: &str) -> Registration {
    Registration {
        email: email(address),
        password: password(plaintext),
        telegram_username: telegram.to_owned(),
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        phone_number: phone.to_owned(),
        role: AccountRole::Member,
    }
}

#[derive(Clone, Default)]
pub struct MockUserRepository {
    pub users: Arc<RwLock<HashMap<UserId, User>>>,
    next_id: Arc<Mutex<u64>>,
}

impl MockUserRepository {
    pub async fn stored(&self, id: &UserId) -> User {
        self.users.read().await.get(id).cloned().unwrap()
    }
}

fn matches_filter(user: &User, filter: &UserFilter) -> bool {
    filter.email.as_ref().is_none_or(|e| &user.email == e)
        && filter
            .telegram_username
            .as_ref()
            .is_none_or(|t| &user.telegram_username == t)
        && filter
            .phone_number
            .as_ref()
            .is_none_or(|p| &user.phone_number == p)
}

#[async_trait]
impl Repository for MockUserRepository {
    type Record = User;
    type Draft = NewUser;
    type Filter = UserFilter;
    type Id = UserId;

    async fn create(&self, draft: NewUser) -> Result<User, RepositoryError> {
        let mut users = self.users.write().await;
        if let Some(taken) = users.values().find(|u| u.email == draft.email) {
            return Err(RepositoryError::Duplicate {
                fields: [("email".to_owned(), taken.email.to_string())].into(),
            });
        }
        if users
            .values()
            .any(|u| u.telegram_username == draft.telegram_username)
        {
            return Err(RepositoryError::Duplicate {
                fields: [("telegram_username".to_owned(), draft.telegram_username)].into(),
            });
        }
        if users.values().any(|u| u.phone_number == draft.phone_number) {
            return Err(RepositoryError::Duplicate {
                fields: [("phone_number".to_owned(), draft.phone_number)].into(),
            });
        }

        let id = {
            let mut next = self.next_id.lock().unwrap();
            *next += 1;
            UserId::new(next.to_string())
        };
        let user = draft.with_id(id.clone());
        users.insert(id, user.clone());
        Ok(user)
    }

    async fn find(&self, filter: &UserFilter) -> Result<Vec<User>, RepositoryError> {
        let users = self.users.read().await;
        let mut found: Vec<User> = users
            .values()
            .filter(|u| matches_filter(u, filter))
            .cloned()
            .collect();
        found.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(found)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<User, RepositoryError> {
        self.users
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn update(&self, record: User) -> Result<User, RepositoryError> {
        let mut users = self.users.write().await;
        match users.get_mut(&record.id) {
            Some(stored) => {
                *stored = record.clone();
                Ok(record)
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    async fn delete(&self, id: &UserId) -> Result<(), RepositoryError> {
        self.users.write().await.remove(id);
        Ok(())
    }
}

/// Reversible stand-in: the "hash" is the plaintext behind a prefix.
#[derive(Clone, Default)]
pub struct MockHasher;

#[async_trait]
impl scribe_core::PasswordHasher for MockHasher {
    async fn hash(&self, password: &Password) -> Result<Secret<String>, HashingError> {
        Ok(Secret::from(format!(
            "hashed:{}",
            password.as_ref().expose_secret()
        )))
    }

    async fn verify(
        &self,
        password_hash: &Secret<String>,
        candidate: &Password,
    ) -> Result<bool, HashingError> {
        Ok(password_hash.expose_secret()
            == &format!("hashed:{}", candidate.as_ref().expose_secret()))
    }
}

/// Issues numbered opaque tokens and remembers the claims behind each.
#[derive(Clone, Default)]
pub struct MockTokenCodec {
    issued: Arc<Mutex<HashMap<String, Claims>>>,
}

impl MockTokenCodec {
    fn validate(&self, token: &str, kind: TokenKind) -> Result<Claims, TokenError> {
        let issued = self.issued.lock().unwrap();
        match issued.get(token) {
            Some(claims) if claims.kind == kind && claims.is_live_at(Utc::now()) => {
                Ok(claims.clone())
            }
            _ => Err(TokenError::InvalidClaims),
        }
    }
}

impl TokenCodec for MockTokenCodec {
    fn issue_pair(&self, user: &User) -> Result<TokenPair, TokenError> {
        let refresh = Claims::for_user(
            user,
            TokenKind::Refresh,
            "test",
            Utc::now(),
            Duration::seconds(60),
        );
        let access = refresh.restamped(TokenKind::Access, Duration::seconds(10));

        let mut issued = self.issued.lock().unwrap();
        let refresh_token = format!("refresh-{}", issued.len());
        issued.insert(refresh_token.clone(), refresh);
        let access_token = format!("access-{}", issued.len());
        issued.insert(access_token.clone(), access);

        Ok(TokenPair {
            refresh_token,
            access_token,
        })
    }

    fn validate_access_token(&self, token: &str) -> Result<Claims, TokenError> {
        self.validate(token, TokenKind::Access)
    }

    fn validate_refresh_token(&self, token: &str) -> Result<Claims, TokenError> {
        self.validate(token, TokenKind::Refresh)
    }
}

#[derive(Clone, Default)]
pub struct MockResetTokenStore {
    pub tokens: Arc<RwLock<HashMap<Email, ResetToken>>>,
}

#[async_trait]
impl ResetTokenStore for MockResetTokenStore {
    async fn put(&self, email: &Email, token: ResetToken) -> Result<(), ResetTokenStoreError> {
        self.tokens.write().await.insert(email.clone(), token);
        Ok(())
    }

    async fn get(&self, email: &Email) -> Result<ResetToken, ResetTokenStoreError> {
        self.tokens
            .read()
            .await
            .get(email)
            .cloned()
            .ok_or(ResetTokenStoreError::TokenNotFound)
    }

    async fn delete(&self, email: &Email) -> Result<(), ResetTokenStoreError> {
        self.tokens.write().await.remove(email);
        Ok(())
    }
}

/// Records every reset email instead of sending it.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    pub sent: Arc<Mutex<Vec<(Email, ResetToken)>>>,
    pub fail: bool,
}

impl RecordingNotifier {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<(Email, ResetToken)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl ResetNotifier for RecordingNotifier {
    async fn send_reset_email(&self, recipient: &Email, token: &ResetToken) -> Result<(), String> {
        if self.fail {
            return Err("relay unavailable".to_owned());
        }
        self.sent
            .lock()
            .unwrap()
            .push((recipient.clone(), token.clone()));
        Ok(())
    }
}
