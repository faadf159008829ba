//! Command definitions for the Pomodoro timer CLI.
//!
//! Uses clap derive macro for argument parsing.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use crate::types::{
    TimerConfig, DEFAULT_BREAK_MINUTES, DEFAULT_INTERVAL_MS, DEFAULT_WORK_MINUTES,
};

// ============================================================================
// CLI Structure
// ============================================================================

/// Pomodoro Timer - an interactive terminal countdown
#[derive(Parser, Debug)]
#[command(
    name = "pomodoro-tui",
    version,
    about = "Interactive terminal Pomodoro timer",
    long_about = "A single countdown in your terminal.\n\
                  Keys: s start, p stop, r reset, q / ctrl+c quit.",
    propagate_version = true
)]
pub struct Cli {
    /// Subcommand to execute (runs the interactive timer when omitted)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Timer durations
    #[command(flatten)]
    pub timer: TimerArgs,

    /// Write logs to this file
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

// ============================================================================
// Subcommands
// ============================================================================

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Feed a scripted event sequence through the timer and print the result
    Replay(ReplayArgs),

    /// Generate shell completion scripts
    Completions {
        /// Shell type for completion script
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ============================================================================
// Timer Arguments
// ============================================================================

/// Durations fixed for the lifetime of the process
#[derive(Args, Debug, Clone)]
pub struct TimerArgs {
    /// Work duration in minutes (1-120)
    #[arg(
        short,
        long,
        global = true,
        default_value_t = DEFAULT_WORK_MINUTES,
        value_parser = clap::value_parser!(u32).range(1..=120)
    )]
    pub work: u32,

    /// Break duration in minutes (1-60, reserved)
    #[arg(
        short,
        long,
        global = true,
        default_value_t = DEFAULT_BREAK_MINUTES,
        value_parser = clap::value_parser!(u32).range(1..=60)
    )]
    pub break_time: u32,

    /// Tick interval in milliseconds (1-60000)
    #[arg(
        short,
        long,
        global = true,
        default_value_t = DEFAULT_INTERVAL_MS,
        value_parser = clap::value_parser!(u64).range(1..=60_000)
    )]
    pub interval_ms: u64,
}

impl Default for TimerArgs {
    fn default() -> Self {
        Self {
            work: DEFAULT_WORK_MINUTES,
            break_time: DEFAULT_BREAK_MINUTES,
            interval_ms: DEFAULT_INTERVAL_MS,
        }
    }
}

impl TimerArgs {
    /// Builds the timer configuration from the arguments.
    pub fn to_config(&self) -> TimerConfig {
        TimerConfig::default()
            .with_work_minutes(self.work)
            .with_break_minutes(self.break_time)
            .with_interval(Duration::from_millis(self.interval_ms))
    }
}

// ============================================================================
// Replay Arguments
// ============================================================================

/// Arguments for the replay command
#[derive(Args, Debug, Clone)]
pub struct ReplayArgs {
    /// Events: key names (s, p, r, q, ctrl+c), tick, tick*N, timeout
    #[arg(required = true, num_args = 1..)]
    pub events: Vec<String>,

    /// Print the final snapshot as JSON instead of the rendered view
    #[arg(long)]
    pub json: bool,
}

// ============================================================================
// Tests
// ============================================================================
