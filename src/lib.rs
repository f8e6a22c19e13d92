//! Daily Dashboard - weather, quotes, fun facts and jokes.
//!
//! The dashboard is available as a terminal printout and as a small web
//! application with accounts, sessions and per-client rate limiting.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core entities (users, passwords, the dashboard view)
//! - **services**: Use cases (authentication, sessions, dashboard aggregation)
//! - **infra**: Database, session store, rate limiter, remote data sources
//! - **api**: HTTP handlers, middleware, and routes
//! - **utils**: Text formatting and HTML templates
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Print the dashboard
//! cargo run
//!
//! # Start the web dashboard
//! cargo run -- serve --port 5000
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod utils;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{DashboardView, Password, User};
pub use errors::{AppError, AppResult};
