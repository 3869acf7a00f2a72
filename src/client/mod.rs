//! Submission client
//!
//! This module issues the single analysis request and maps the
//! response onto the crate's error taxonomy.

pub mod analyzer;

// Re-export commonly used items
pub use analyzer::{AnalyzeProfiles, AnalyzerClient};
