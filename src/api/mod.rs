//! API layer - HTTP handlers and middleware
//!
//! This module contains all HTTP-related concerns:
//! - Page handlers (dashboard, login, registration)
//! - Middleware (sessions, rate limiting)
//! - Custom extractors
//! - Route definitions

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::AppState;
