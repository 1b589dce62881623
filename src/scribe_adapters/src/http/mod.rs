pub mod context;
pub mod dto;
pub mod error;
pub mod extract;
pub mod routes;
pub mod state;

pub use context::{AdminUser, CurrentUser, Identity, RequestContext, identify};
pub use error::{ApiError, ErrorResponse};
pub use state::{AppState, Ports};
