pub mod account_flags;
pub mod blogs;
pub mod forgot_password;
pub mod login;
pub mod refresh_tokens;
pub mod register;
pub mod reset_password;
pub mod user_directory;
