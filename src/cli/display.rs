//! Display utilities for the Pomodoro timer CLI.
//!
//! This module provides formatted output for:
//! - Replay results (rendered view or JSON snapshot)
//! - Error messages

use anyhow::{Context, Result};

use crate::types::Snapshot;

// ============================================================================
// Display
// ============================================================================

/// Display utilities for CLI output.
pub struct Display;

impl Display {
    /// Shows the rendered view of a replay.
    pub fn show_view(view: &str) {
        println!("{}", view);
    }

    /// Shows a snapshot as a single JSON line.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be serialized.
    pub fn show_snapshot_json(snapshot: &Snapshot) -> Result<()> {
        println!("{}", Self::snapshot_json(snapshot)?);
        Ok(())
    }

    /// Shows an error message.
    pub fn show_error(message: &str) {
        eprintln!("Error: {}", message);
    }

    fn snapshot_json(snapshot: &Snapshot) -> Result<String> {
        serde_json::to_string(snapshot).context("Failed to serialize snapshot")
    }
}

// ============================================================================
// Tests
// ============================================================================
