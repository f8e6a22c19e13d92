//! Application services layer - use cases.
//!
//! Services orchestrate domain logic and infrastructure. They depend on
//! the repository, store and source traits, never on concrete backends.

mod auth_service;
pub mod container;
mod dashboard_service;
mod session_service;

pub use container::{ServiceContainer, Services};

pub use auth_service::{AuthService, Authenticator};
pub use dashboard_service::DashboardService;
pub use session_service::{Claims, SessionManager, SessionService};

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
