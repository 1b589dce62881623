use std::sync::Arc;

use redis::{Commands, Connection};
use scribe_core::{Email, ResetToken, ResetTokenStore, ResetTokenStoreError};
use tokio::sync::RwLock;

/// Reset tokens under `reset_token:<email>`. `SET` overwrites, so a new
/// token replaces the old one in a single command.
#[derive(Clone)]
pub struct RedisResetTokenStore {
    conn: Arc<RwLock<Connection>>,
}

impl RedisResetTokenStore {
    pub fn new(conn: Arc<RwLock<Connection>>) -> Self {
        Self { conn }
    }
}

pub fn get_redis_connection(redis_host_name: &str) -> redis::RedisResult<Connection> {
    let redis_url = format!("redis://{redis_host_name}/");
    redis::Client::open(redis_url)?.get_connection()
}

#[async_trait::async_trait]
impl ResetTokenStore for RedisResetTokenStore {
    #[tracing::instrument(name = "RedisResetTokenStore::put", skip_all)]
    async fn put(&self, email: &Email, token: ResetToken) -> Result<(), ResetTokenStoreError> {
        let key = get_key(email);
        let mut conn = self.conn.write().await;
        conn.set::<_, _, ()>(key, token.as_str())
            .map_err(|e| ResetTokenStoreError::UnexpectedError(e.to_string()))
    }

    #[tracing::instrument(name = "RedisResetTokenStore::get", skip_all)]
    async fn get(&self, email: &Email) -> Result<ResetToken, ResetTokenStoreError> {
        let key = get_key(email);
        let mut conn = self.conn.write().await;
        let token: Option<String> = conn
            .get(&key)
            .map_err(|e| ResetTokenStoreError::UnexpectedError(e.to_string()))?;

        token
            .map(ResetToken::from_presented)
            .ok_or(ResetTokenStoreError::TokenNotFound)
    }

    #[tracing::instrument(name = "RedisResetTokenStore::delete", skip_all)]
    async fn delete(&self, email: &Email) -> Result<(), ResetTokenStoreError> {
        let key = get_key(email);
        let mut conn = self.conn.write().await;
        conn.del::<_, ()>(&key)
            .map_err(|e| ResetTokenStoreError::UnexpectedError(e.to_string()))
    }
}

const RESET_TOKEN_KEY_PREFIX: &str = "reset_token:";

fn get_key(email: &Email) -> String {
    format!("{RESET_TOKEN_KEY_PREFIX}{email}")
}
