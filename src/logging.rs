use crate::config::Config;
use log::{debug, info, warn};

/// Initialize the logger with appropriate level based on verbosity
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off // Only show structured logs in verbose mode
    };

    env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log the resolved configuration
pub fn log_config_info(config: &Config) {
    let timeout = config.timeout.unwrap_or(120);
    info!(
        "Configuration: endpoint={}, timeout={timeout}s, format={}",
        config.endpoint_trimmed(),
        config.output_format_or_default()
    );
}

/// Log the start of a submission
pub fn log_submission_start(url_count: usize) {
    info!("Starting analysis of {url_count} profile URLs");
}

/// Log the outcome of a submission
pub fn log_submission_complete(profile_count: usize, duration_ms: u128) {
    info!("✅ Analysis complete: {profile_count} profile(s) ({duration_ms}ms)");
}

/// Log a failed submission
pub fn log_submission_failed(message: &str, duration_ms: u128) {
    warn!("❌ Analysis failed: {message} ({duration_ms}ms)");
}
