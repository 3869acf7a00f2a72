//! Submission lifecycle state machine
//!
//! One `Session` owns one view state and one client. The lifecycle per
//! submission is `Idle -> Loading -> {Success | Error} -> (next submit)`,
//! with the terminal state cleared on re-entry.

use crate::client::AnalyzeProfiles;
use crate::types::{AnalysisReport, SubmissionInput};

/// The mutually exclusive conditions the form can be in.
///
/// A sum type rather than independent flags, so a simultaneous
/// error-and-success view is unrepresentable.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    /// No submission attempted since the last reset
    Idle,
    /// A request is in flight; submission is unreachable
    Loading,
    /// The last submission failed, with the banner message to display
    Error(String),
    /// The last submission succeeded
    Success(AnalysisReport),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }
}

/// Orchestrates the request/response cycle for one form instance.
///
/// `submit` takes `&mut self`, so at most one request can be outstanding
/// per session; the single in-flight constraint is structural rather than
/// a disabled control.
#[derive(Debug)]
pub struct Session<C: AnalyzeProfiles> {
    client: C,
    state: ViewState,
}

impl<C: AnalyzeProfiles> Session<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            state: ViewState::Idle,
        }
    }

    /// Current view state.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Run one submission cycle with an already-validated input.
    ///
    /// Entering `Loading` clears whichever terminal state was showing, so a
    /// prior error disappears on resubmit and a prior result disappears on
    /// failure. Exactly one client call is made per invocation.
    pub async fn submit(&mut self, input: &SubmissionInput) -> &ViewState {
        self.state = ViewState::Loading;

        log::info!("Submitting {} profile URLs for analysis", input.urls().len());

        self.state = match self.client.analyze(input).await {
            Ok(report) => {
                log::info!("Submission succeeded with {} profiles", report.results.len());
                ViewState::Success(report)
            }
            Err(err) => {
                log::warn!("Submission failed: {err}");
                ViewState::Error(err.banner_message())
            }
        };

        &self.state
    }
}
