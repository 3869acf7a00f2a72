// Command-line interface definitions and parsing for linkfacts

use crate::config::CliConfig;
use crate::core::constants::output_formats;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// LinkedIn profile URLs to analyze (exactly three, or none for interactive mode)
    #[arg(value_name = "URL", num_args = 0..=3)]
    pub urls: Vec<String>,

    // Core Options
    /// Base URL of the analysis service (default: http://localhost:8000)
    #[arg(long, value_name = "URL", help_heading = "Core Options")]
    pub endpoint: Option<String>,

    /// Connection timeout in seconds (default: 120)
    #[arg(
        short = 't',
        long,
        value_name = "SECONDS",
        help_heading = "Core Options"
    )]
    pub timeout: Option<u64>,

    // Output & Verbosity
    /// Suppress header and progress output
    #[arg(short = 'q', long, help_heading = "Output & Verbosity")]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long, help_heading = "Output & Verbosity")]
    pub verbose: bool,

    /// Output format
    #[arg(long, value_name = "FORMAT", value_parser = output_formats::ALL, help_heading = "Output & Verbosity")]
    pub format: Option<String>,

    /// Disable the in-flight spinner
    #[arg(long, help_heading = "Output & Verbosity")]
    pub no_progress: bool,

    /// Disable colored output
    #[arg(long, help_heading = "Output & Verbosity")]
    pub no_color: bool,

    // Network & Security
    /// Custom User-Agent header
    #[arg(long, value_name = "AGENT", help_heading = "Network & Security")]
    pub user_agent: Option<String>,

    // Configuration
    /// Use specific config file
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Ignore config files
    #[arg(long, help_heading = "Configuration")]
    pub no_config: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate shell completions
    #[command(name = "completion-generate", arg_required_else_help = true)]
    CompletionGenerate {
        /// The shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Convert parsed CLI flags into the override structure merged over file config
pub fn cli_to_config(cli: &Cli) -> CliConfig {
    CliConfig {
        endpoint: cli.endpoint.clone(),
        timeout: cli.timeout,
        user_agent: cli.user_agent.clone(),
        output_format: cli.format.clone(),
        verbose: cli.verbose,
        no_progress: cli.no_progress,
    }
}
