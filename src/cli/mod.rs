//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `show` - Print the dashboard (default)
//! - `serve` - Start the web dashboard
//! - `migrate` - Database migrations

pub mod args;

pub use args::{Cli, Commands};
