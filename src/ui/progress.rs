use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::core::constants::messages;

/// Busy indicator shown while a submission is in flight.
///
/// Replaces the submit action label for the duration of the request; the
/// spinner is the user-visible counterpart of the `Loading` view state.
pub struct ProgressReporter {
    spinner: Option<ProgressBar>,
    enabled: bool,
}

impl ProgressReporter {
    pub fn new(enabled: bool) -> Self {
        Self {
            spinner: None,
            enabled,
        }
    }

    /// Start the in-flight spinner.
    pub fn start_submission(&mut self) {
        if !self.enabled {
            return;
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        pb.set_message(messages::ANALYZING);
        pb.enable_steady_tick(Duration::from_millis(120));
        self.spinner = Some(pb);
    }

    /// Clear the spinner once the request resolved.
    pub fn finish_and_clear(&mut self) {
        if let Some(pb) = self.spinner.take() {
            pb.finish_and_clear();
        }
    }
}
