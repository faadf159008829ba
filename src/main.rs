//! Pomodoro Timer - an interactive terminal countdown
//!
//! Press `s` to start a 25 minute work interval, `p` to pause it,
//! `r` to halt it and `q` (or ctrl+c) to quit.

use std::fs::File;
use std::io;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};

use pomodoro_tui::app::{parse_script, Replay};
use pomodoro_tui::cli::{Cli, Commands, Display, ReplayArgs};
use pomodoro_tui::tui;
use pomodoro_tui::types::TimerConfig;

/// Main entry point
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    if let Err(e) = init_tracing(&cli) {
        Display::show_error(&format!("{:#}", e));
        std::process::exit(1);
    }

    // Execute command
    if let Err(e) = execute(cli).await {
        Display::show_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber for logging.
///
/// The interactive timer owns the terminal, so its logs go to `--log-file`
/// or nowhere. The replay command logs to stderr.
fn init_tracing(cli: &Cli) -> Result<()> {
    use tracing_subscriber::{fmt, EnvFilter};

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let builder = fmt().with_env_filter(filter).with_target(false);

    match (&cli.log_file, &cli.command) {
        (Some(path), _) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        (None, Some(Commands::Replay(_))) => {
            builder.without_time().with_writer(io::stderr).init();
        }
        (None, _) => {
            builder.with_writer(io::sink).init();
        }
    }

    Ok(())
}

/// Executes the CLI command.
async fn execute(cli: Cli) -> Result<()> {
    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    let config = cli.timer.to_config();
    config.validate().context("Invalid timer configuration")?;

    match cli.command {
        None => {
            tracing::info!(work = ?config.work_duration, interval = ?config.interval, "starting timer");
            tui::run(config).await?;
        }
        Some(Commands::Replay(args)) => {
            replay(config, &args)?;
        }
        Some(Commands::Completions { shell }) => {
            generate_completions(shell);
        }
    }

    Ok(())
}

/// Runs a scripted event sequence and prints the final state.
fn replay(config: TimerConfig, args: &ReplayArgs) -> Result<()> {
    let steps = parse_script(args.events.as_slice()).context("Invalid replay script")?;

    let mut replay = Replay::new(config);
    replay.run(&steps);

    if args.json {
        Display::show_snapshot_json(&replay.app().snapshot())?;
    } else {
        Display::show_view(&replay.app().view());
    }

    Ok(())
}

/// Generates shell completion scripts.
fn generate_completions(shell: clap_complete::Shell) {
    use clap_complete::generate;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
}

// ============================================================================
// Tests
// ============================================================================
