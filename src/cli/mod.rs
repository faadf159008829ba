//! CLI module for the Pomodoro timer.
//!
//! This module provides the command-line interface:
//! - `commands`: Command definitions using clap derive
//! - `display`: Output formatting for non-interactive commands

pub mod commands;
pub mod display;

pub use commands::{Cli, Commands, ReplayArgs, TimerArgs};
pub use display::Display;
