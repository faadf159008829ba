//! Pomodoro Timer Library
//!
//! This library provides the core functionality for the interactive
//! terminal Pomodoro timer. It includes:
//! - Countdown state machine and tick scheduling
//! - Command routing from key presses to timer intents
//! - Application state shared by the terminal and replay hosts
//! - Terminal host built on ratatui and crossterm
//! - CLI command parsing and display utilities
//! - Type definitions for configuration and snapshots

pub mod app;
pub mod cli;
pub mod engine;
pub mod router;
pub mod tui;
pub mod types;

// Re-export commonly used types for convenience
pub use app::{App, Flow, Replay};
pub use engine::{Directive, ManualTicker, TickScheduler, TimerEngine, TokioTicker};
pub use router::{AppEvent, CommandRouter, Intent, Keymap, Outcome};
pub use tui::TuiError;
pub use types::{ConfigError, Snapshot, TimerConfig, TimerStatus};
