pub mod constants;
pub mod settings;

pub use settings::{
    AdminSettings, DatabaseSettings, EmailClientSettings, JwtSettings, ResetTokenBackendKind,
    ResetTokenSettings, ServerSettings, Settings, SettingsError,
};
