//! User interface components
//!
//! CLI parsing, interactive prompts, progress display, colors,
//! and result rendering.

pub mod cli;
pub mod color;
pub mod output;
pub mod progress;
pub mod prompt;

// Re-export commonly used items
pub use cli::{Cli, Commands, cli_to_config};
pub use progress::ProgressReporter;
