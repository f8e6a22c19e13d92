//! Infrastructure layer - External systems integration
//!
//! - Database connection, migrations and the user repository
//! - Third-party data source clients
//! - In-process session records and rate limit windows

pub mod db;
pub mod rate_limiter;
pub mod repositories;
pub mod session_store;
pub mod sources;

pub use db::{Database, Migrator};
pub use rate_limiter::{RateDecision, RateLimiter, RateWindow};
pub use repositories::{UserRepository, UserStore};
pub use session_store::{InMemorySessionStore, SessionRecord, SessionStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockUserRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use session_store::MockSessionStore;
