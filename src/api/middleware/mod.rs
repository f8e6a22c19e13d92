//! API middleware.

mod auth;
mod rate_limit;

pub use auth::{current_user, session_middleware};
pub use rate_limit::{rate_limit_middleware, RateLimitError};
