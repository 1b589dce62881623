pub mod blog;
pub mod claims;
pub mod comment;
pub mod email;
pub mod ids;
pub mod password;
pub mod reset_token;
pub mod user;
