//! Core types and utilities
//!
//! This module contains fundamental error types and constants
//! shared across the application.

pub mod constants;
pub mod error;

// Re-export commonly used items
pub use error::{LinkFactsError, Result};
