pub mod argon2_hasher;
pub mod bearer_validator;
pub mod jwt_codec;

pub use argon2_hasher::Argon2Hasher;
pub use bearer_validator::{BearerAuthError, BearerTokenValidator};
pub use jwt_codec::JwtTokenCodec;
