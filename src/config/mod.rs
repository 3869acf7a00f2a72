//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::core::constants::{api, output_formats, timeouts};
use crate::core::error::{LinkFactsError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the analysis service
    pub endpoint: Option<String>,

    /// Timeout in seconds for the analysis request
    pub timeout: Option<u64>,

    /// Custom User-Agent header
    pub user_agent: Option<String>,

    /// Output format (text, json, minimal)
    pub output_format: Option<String>,

    /// Enable verbose logging
    pub verbose: Option<bool>,

    /// Disable the in-flight spinner
    pub no_progress: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: Some(api::DEFAULT_ENDPOINT.to_string()),
            timeout: Some(timeouts::DEFAULT_TIMEOUT_SECONDS),
            user_agent: None,
            output_format: Some(output_formats::DEFAULT.to_string()),
            verbose: Some(false),
            no_progress: Some(false),
        }
    }
}

/// CLI-provided overrides, merged on top of file configuration.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub endpoint: Option<String>,
    pub timeout: Option<u64>,
    pub user_agent: Option<String>,
    pub output_format: Option<String>,
    pub verbose: bool,
    pub no_progress: bool,
}

impl Config {
    /// Load configuration from file, falling back to defaults
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            LinkFactsError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| {
            LinkFactsError::Config(format!(
                "Invalid TOML in config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Try to find and load a config file in standard locations
    pub fn load_from_standard_locations() -> Self {
        // Check for .linkfacts.toml in current directory
        if let Ok(config) = Self::load_from_file(".linkfacts.toml") {
            return config;
        }

        // Check for .linkfacts.toml in parent directories (up to 3 levels)
        for i in 1..=3 {
            let path = format!("{}.linkfacts.toml", "../".repeat(i));
            if let Ok(config) = Self::load_from_file(&path) {
                return config;
            }
        }

        Self::default()
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if let Some(ref endpoint) = cli_config.endpoint {
            self.endpoint = Some(endpoint.clone());
        }
        if let Some(timeout) = cli_config.timeout {
            self.timeout = Some(timeout);
        }
        if let Some(ref user_agent) = cli_config.user_agent {
            self.user_agent = Some(user_agent.clone());
        }
        if let Some(ref output_format) = cli_config.output_format {
            self.output_format = Some(output_format.clone());
        }
        if cli_config.verbose {
            self.verbose = Some(true);
        }
        if cli_config.no_progress {
            self.no_progress = Some(true);
        }
    }

    /// Get timeout as Duration
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout.unwrap_or(timeouts::DEFAULT_TIMEOUT_SECONDS))
    }

    /// Endpoint base URL without a trailing slash
    pub fn endpoint_trimmed(&self) -> String {
        self.endpoint
            .as_deref()
            .unwrap_or(api::DEFAULT_ENDPOINT)
            .trim_end_matches('/')
            .to_string()
    }

    /// Resolved output format name
    pub fn output_format_or_default(&self) -> &str {
        self.output_format
            .as_deref()
            .unwrap_or(output_formats::DEFAULT)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(timeout) = self.timeout {
            if timeout == 0 {
                return Err(LinkFactsError::Config(
                    "Timeout cannot be 0. Expected a positive integer representing seconds."
                        .to_string(),
                ));
            }
            if timeout > timeouts::MAX_TIMEOUT_SECONDS {
                return Err(LinkFactsError::Config(format!(
                    "Timeout of {timeout} seconds is extremely large (>1 hour). Consider using a smaller value."
                )));
            }
        }

        if let Some(ref endpoint) = self.endpoint {
            if endpoint.trim().is_empty() {
                return Err(LinkFactsError::Config(
                    "Endpoint cannot be empty".to_string(),
                ));
            }
            if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                return Err(LinkFactsError::Config(format!(
                    "Endpoint '{endpoint}' must start with http:// or https://"
                )));
            }
        }

        if let Some(ref format) = self.output_format {
            if !output_formats::ALL.contains(&format.as_str()) {
                return Err(LinkFactsError::Config(format!(
                    "Unknown output format '{}'. Expected one of: {}",
                    format,
                    output_formats::ALL.join(", ")
                )));
            }
        }

        Ok(())
    }
}
