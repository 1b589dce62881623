pub mod ports;
pub mod scribe_service;
pub mod seed;
pub mod tracing;

pub use ports::{DocumentPorts, reset_token_backend};
pub use scribe_service::ScribeService;
pub use seed::{SeedError, seed_admin};
