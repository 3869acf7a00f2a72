/// Application-wide constants to avoid magic values throughout the codebase.
///
/// This module centralizes all magic strings, numbers, and other literal values
/// used across the application, making them easier to maintain and modify.
/// Remote analysis API constants
pub mod api {
    /// Default base URL of the analysis service
    pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000";
    /// Path of the profile analysis endpoint
    pub const ANALYZE_PATH: &str = "/analyze-profiles";
}

/// Submission form constants
pub mod form {
    /// Substring every valid profile URL must contain
    pub const PROFILE_URL_MARKER: &str = "linkedin.com/in/";
    /// Number of profile URLs a submission carries
    pub const REQUIRED_URLS: usize = 3;
}

/// Output format constants
pub mod output_formats {
    /// Text output format - colorful card output with grouping
    pub const TEXT: &str = "text";
    /// JSON output format - structured output for automation
    pub const JSON: &str = "json";
    /// Minimal output format - plain text without colors or emojis
    pub const MINIMAL: &str = "minimal";

    /// Default output format
    pub const DEFAULT: &str = TEXT;

    /// All valid output formats
    pub const ALL: [&str; 3] = [TEXT, JSON, MINIMAL];
}

/// Timeout and duration constants
pub mod timeouts {
    /// Default connection timeout in seconds
    pub const DEFAULT_TIMEOUT_SECONDS: u64 = 120;
    /// Maximum reasonable timeout in seconds (1 hour)
    pub const MAX_TIMEOUT_SECONDS: u64 = 3600;
    /// Minimum timeout in seconds
    pub const MIN_TIMEOUT_SECONDS: u64 = 1;
}

/// User-facing message constants
pub mod messages {
    /// Shown next to a field left empty
    pub const URL_REQUIRED: &str = "URL is required";
    /// Shown next to a field missing the profile URL marker
    pub const INVALID_PROFILE_URL: &str = "Must be a valid LinkedIn profile URL";
    /// Fallback when a rejected response carries no `detail` field
    pub const ANALYSIS_FAILED: &str = "Analysis failed";
    /// Fallback when a transport failure carries no message
    pub const GENERIC_ERROR: &str = "An error occurred";
    /// Busy indicator label while a submission is in flight
    pub const ANALYZING: &str = "Analyzing profiles...";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_constants() {
        assert_eq!(api::DEFAULT_ENDPOINT, "http://localhost:8000");
        assert_eq!(api::ANALYZE_PATH, "/analyze-profiles");
    }

    #[test]
    fn test_form_constants() {
        assert_eq!(form::PROFILE_URL_MARKER, "linkedin.com/in/");
        assert_eq!(form::REQUIRED_URLS, 3);
    }

    #[test]
    fn test_output_formats_constants() {
        assert_eq!(output_formats::TEXT, "text");
        assert_eq!(output_formats::JSON, "json");
        assert_eq!(output_formats::MINIMAL, "minimal");
        assert_eq!(output_formats::DEFAULT, "text");
        assert_eq!(output_formats::ALL.len(), 3);
    }

    #[test]
    fn test_timeout_constants() {
        assert_eq!(timeouts::DEFAULT_TIMEOUT_SECONDS, 120);
        assert_eq!(timeouts::MAX_TIMEOUT_SECONDS, 3600);
        assert_eq!(timeouts::MIN_TIMEOUT_SECONDS, 1);
    }

    #[test]
    fn test_message_constants() {
        assert_eq!(messages::URL_REQUIRED, "URL is required");
        assert_eq!(
            messages::INVALID_PROFILE_URL,
            "Must be a valid LinkedIn profile URL"
        );
        assert_eq!(messages::ANALYSIS_FAILED, "Analysis failed");
        assert_eq!(messages::GENERIC_ERROR, "An error occurred");
    }
}
