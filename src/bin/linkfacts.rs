use clap::{CommandFactory, Parser};
use linkfacts::client::AnalyzerClient;
use linkfacts::config::{CliConfig, Config};
use linkfacts::core::constants::{form, output_formats};
use linkfacts::logging;
use linkfacts::session::{Session, ViewState};
use linkfacts::ui::output;
use linkfacts::ui::prompt;
use linkfacts::ui::{Cli, Commands, ProgressReporter, cli_to_config};
use linkfacts::validation;

use std::time::Instant;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Handle completion commands first
    if let Some(exit_code) = handle_completion_commands(&cli) {
        std::process::exit(exit_code);
    }

    match run_linkfacts_logic(&cli).await {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Handle completion commands and return exit code if one was processed
fn handle_completion_commands(cli: &Cli) -> Option<i32> {
    match cli.command {
        Some(Commands::CompletionGenerate { shell }) => {
            let mut app = Cli::command();
            let name = app.get_name().to_string();
            clap_complete::generate(shell, &mut app, name, &mut std::io::stdout());
            Some(0)
        }
        None => None,
    }
}

/// Main submission logic extracted from main() for clarity
async fn run_linkfacts_logic(cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let cli_config = cli_to_config(cli);
    let config = load_and_merge_config(cli, &cli_config)?;

    logging::init_logger(config.verbose.unwrap_or(false), cli.quiet);
    logging::log_config_info(&config);

    let format = config.output_format_or_default().to_string();
    let use_color = !cli.no_color && linkfacts::ui::color::supports_formatting();
    let show_chrome = !cli.quiet && format == output_formats::TEXT;
    let spinner_enabled =
        !cli.quiet && !config.no_progress.unwrap_or(false) && format == output_formats::TEXT;

    let client = AnalyzerClient::from_config(&config)?;
    let mut session = Session::new(client);

    if show_chrome {
        println!("{}", output::render_header(use_color));
    }

    if cli.urls.is_empty() {
        run_interactive(&mut session, &format, use_color, spinner_enabled).await
    } else {
        run_one_shot(cli, &mut session, &format, use_color, spinner_enabled).await
    }
}

/// Resolve configuration from file (unless disabled) and CLI overrides
fn load_and_merge_config(
    cli: &Cli,
    cli_config: &CliConfig,
) -> Result<Config, Box<dyn std::error::Error>> {
    let mut config = if cli.no_config {
        Config::default()
    } else if let Some(ref path) = cli.config {
        Config::load_from_file(path)?
    } else {
        Config::load_from_standard_locations()
    };

    config.merge_with_cli(cli_config);
    config.validate()?;
    Ok(config)
}

/// Validate the positional URLs and run a single submission cycle
async fn run_one_shot(
    cli: &Cli,
    session: &mut Session<AnalyzerClient>,
    format: &str,
    use_color: bool,
    spinner_enabled: bool,
) -> Result<i32, Box<dyn std::error::Error>> {
    if cli.urls.len() != form::REQUIRED_URLS {
        eprintln!(
            "Error: Expected exactly {} profile URLs, got {}",
            form::REQUIRED_URLS,
            cli.urls.len()
        );
        eprintln!("\nFor more information, try '--help'.");
        return Ok(1);
    }

    // Validation failure blocks submission entirely; no request is issued
    let input = match validation::validate(&cli.urls[0], &cli.urls[1], &cli.urls[2]) {
        Ok(input) => input,
        Err(errors) => {
            for (field, message) in errors.iter() {
                eprintln!("{}: {}", field.label(), message);
            }
            return Ok(1);
        }
    };

    let exit_code = submit_and_render(session, &input, format, use_color, spinner_enabled).await;
    Ok(exit_code)
}

/// Prompt-submit-render loop for interactive mode
async fn run_interactive(
    session: &mut Session<AnalyzerClient>,
    format: &str,
    use_color: bool,
    spinner_enabled: bool,
) -> Result<i32, Box<dyn std::error::Error>> {
    let mut exit_code = 0;

    loop {
        let input = prompt::prompt_submission()?;
        exit_code = submit_and_render(session, &input, format, use_color, spinner_enabled).await;

        if !prompt::confirm_another_round()? {
            break;
        }
        println!();
    }

    Ok(exit_code)
}

/// Run one submission cycle and render the resulting view state
async fn submit_and_render(
    session: &mut Session<AnalyzerClient>,
    input: &linkfacts::types::SubmissionInput,
    format: &str,
    use_color: bool,
    spinner_enabled: bool,
) -> i32 {
    let mut progress = ProgressReporter::new(spinner_enabled);
    progress.start_submission();

    let started = Instant::now();
    logging::log_submission_start(input.urls().len());

    let state = session.submit(input).await;
    let duration_ms = started.elapsed().as_millis();

    progress.finish_and_clear();

    match state {
        ViewState::Success(report) => {
            logging::log_submission_complete(report.results.len(), duration_ms);
            println!("{}", output::render_report(report, format, use_color));
            0
        }
        ViewState::Error(message) => {
            logging::log_submission_failed(message, duration_ms);
            println!("{}", output::render_error_banner(message, format, use_color));
            1
        }
        // submit() always resolves to a terminal state
        ViewState::Idle | ViewState::Loading => 1,
    }
}
