//! linkfacts - CLI client for the LinkedIn profile analysis service
//!
//! Collects three profile URLs, validates them locally, submits them in a
//! single JSON request, and renders the returned profiles as cards with
//! restricted markdown formatting for the generated facts.

pub mod client;
pub mod config;
pub mod core;
pub mod logging;
pub mod markdown;
pub mod session;
pub mod types;
pub mod ui;
pub mod validation;

// Re-export the most commonly used items at the crate root
pub use crate::client::{AnalyzeProfiles, AnalyzerClient};
pub use crate::core::error::{LinkFactsError, Result};
pub use crate::session::{Session, ViewState};
pub use crate::types::{AnalysisReport, Profile, SubmissionInput};
