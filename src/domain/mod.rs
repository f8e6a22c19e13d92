//! Domain layer - Core entities and value objects
//!
//! Independent of infrastructure concerns; contains users, passwords
//! and the dashboard view model.

pub mod dashboard;
pub mod password;
pub mod user;

pub use dashboard::{DashboardView, TimeInfo};
pub use password::Password;
pub use user::{CreateUser, CurrentUser, User};
