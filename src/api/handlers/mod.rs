//! HTTP request handlers.

pub mod auth_handler;
pub mod dashboard_handler;

pub use auth_handler::{auth_routes, logout};
pub use dashboard_handler::dashboard;
