//! Utility functions and helpers.

pub mod templates;
pub mod text;
