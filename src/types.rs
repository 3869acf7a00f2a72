use serde::{Deserialize, Serialize};

/// A validated, normalized batch of three profile URLs ready for submission.
///
/// Instances can only be produced by the validation module, so holding a
/// `SubmissionInput` is proof that every field passed the profile-URL check.
/// Field order is preserved all the way to the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionInput {
    urls: [String; 3],
}

impl SubmissionInput {
    /// Create a submission without re-validating.
    ///
    /// Restricted to the crate; the validator is the only caller so the
    /// "never submitted unless all three fields pass" invariant holds by
    /// construction.
    pub(crate) fn new_unchecked(url1: String, url2: String, url3: String) -> Self {
        Self {
            urls: [url1, url2, url3],
        }
    }

    /// The three URLs in the order they were entered.
    pub fn urls(&self) -> &[String; 3] {
        &self.urls
    }
}

/// A single analyzed profile record returned by the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Source URL of the analyzed profile
    pub profile_url: String,
    /// Display name
    pub name: String,
    /// Headline string
    pub headline: String,
    /// Short observations, possibly containing limited markup
    pub funny_facts: Vec<String>,
}

/// The full analysis response for one submission.
///
/// Treated as immutable once received; a new report fully replaces any
/// prior one in view state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Status string as reported by the service
    pub status: String,
    /// Count of profiles the service analyzed
    pub profiles_analyzed: usize,
    /// Profile records in the order the service returned them
    pub results: Vec<Profile>,
}
