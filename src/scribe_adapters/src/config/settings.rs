use std::{path::PathBuf, time::Duration};

use config::{Config, Environment, File};
use secrecy::Secret;
use serde::Deserialize;
use thiserror::Error;

use super::constants::{CONFIG_DIRECTORY, env, prod};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    #[error(
        "Access token ttl ({access}s) must be shorter than refresh token ttl ({refresh}s)"
    )]
    TokenTtlOrder { access: i64, refresh: i64 },
    #[error("Token ttl must be positive, got {0}s")]
    NonPositiveTtl(i64),
}

/// Process configuration, loaded once at start-up and passed down.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub email_client: EmailClientSettings,
    pub jwt: JwtSettings,
    pub admin: AdminSettings,
    #[serde(default)]
    pub reset_tokens: ResetTokenSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_address")]
    pub address: String,
    /// Public origin used to build links in outgoing mail.
    pub base_url: String,
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: String,
    #[serde(default)]
    pub username: String,
    #[serde(default = "empty_secret")]
    pub password: Secret<String>,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmailClientSettings {
    #[serde(default = "default_email_base_url")]
    pub base_url: String,
    pub sender: String,
    pub auth_token: Secret<String>,
    #[serde(default = "default_email_timeout")]
    pub timeout_in_millis: u64,
}

impl EmailClientSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_in_millis)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct JwtSettings {
    pub secret: Secret<String>,
    #[serde(default = "default_issuer")]
    pub issuer: String,
    #[serde(default = "default_access_ttl")]
    pub access_ttl_in_seconds: i64,
    #[serde(default = "default_refresh_ttl")]
    pub refresh_ttl_in_seconds: i64,
}

impl JwtSettings {
    pub fn access_ttl(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.access_ttl_in_seconds)
    }

    pub fn refresh_ttl(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.refresh_ttl_in_seconds)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        for ttl in [self.access_ttl_in_seconds, self.refresh_ttl_in_seconds] {
            if ttl <= 0 {
                return Err(SettingsError::NonPositiveTtl(ttl));
            }
        }
        if self.access_ttl_in_seconds >= self.refresh_ttl_in_seconds {
            return Err(SettingsError::TokenTtlOrder {
                access: self.access_ttl_in_seconds,
                refresh: self.refresh_ttl_in_seconds,
            });
        }
        Ok(())
    }
}

/// The administrator created on first boot against an empty user collection.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminSettings {
    pub email: String,
    pub password: Secret<String>,
    pub telegram_username: String,
    pub phone_number: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResetTokenBackendKind {
    #[default]
    Document,
    Redis,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResetTokenSettings {
    #[serde(default)]
    pub backend: ResetTokenBackendKind,
    #[serde(default = "default_redis_host_name")]
    pub redis_host_name: String,
}

impl Default for ResetTokenSettings {
    fn default() -> Self {
        Self {
            backend: ResetTokenBackendKind::default(),
            redis_host_name: default_redis_host_name(),
        }
    }
}

impl Settings {
    /// Layers `config/base`, `config/$SCRIBE_ENVIRONMENT` and `SCRIBE_*`
    /// environment variables (nested keys separated by `__`).
    pub fn load() -> Result<Self, SettingsError> {
        dotenvy::dotenv().ok();

        let directory = std::env::current_dir()
            .map(|dir| dir.join(CONFIG_DIRECTORY))
            .unwrap_or_else(|_| PathBuf::from(CONFIG_DIRECTORY));
        let environment = std::env::var(env::ENVIRONMENT_ENV_VAR)
            .unwrap_or_else(|_| env::DEFAULT_ENVIRONMENT.to_owned());

        let config = Config::builder()
            .add_source(File::from(directory.join("base")).required(false))
            .add_source(File::from(directory.join(environment)).required(false))
            .add_source(
                Environment::with_prefix(env::ENV_PREFIX)
                    .prefix_separator("_")
                    .separator(env::ENV_SEPARATOR)
                    .list_separator(",")
                    .with_list_parse_key("server.allowed_origins")
                    .try_parsing(true),
            )
            .build()?;

        Self::from_config(config)
    }

    pub fn from_config(config: Config) -> Result<Self, SettingsError> {
        let settings: Settings = config.try_deserialize()?;
        settings.jwt.validate()?;
        Ok(settings)
    }
}

fn default_address() -> String {
    prod::APP_ADDRESS.to_owned()
}

fn default_email_base_url() -> String {
    prod::email_client::BASE_URL.to_owned()
}

fn default_email_timeout() -> u64 {
    prod::email_client::TIMEOUT_IN_MILLIS
}

fn default_issuer() -> String {
    prod::JWT_ISSUER.to_owned()
}

fn default_access_ttl() -> i64 {
    prod::ACCESS_TTL_IN_SECONDS
}

fn default_refresh_ttl() -> i64 {
    prod::REFRESH_TTL_IN_SECONDS
}

fn default_redis_host_name() -> String {
    prod::REDIS_HOST_NAME.to_owned()
}

fn empty_secret() -> Secret<String> {
    Secret::new(String::new())
}
