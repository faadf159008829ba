//! Text rendering of timer snapshots.
//!
//! This module produces the plain text shown by the terminal host and the
//! replay command:
//! - Headline with the remaining time or the done message
//! - Short legend of key commands

use std::time::Duration;

use crate::router::Keymap;
use crate::types::{Snapshot, TimerStatus};

/// Message shown once the countdown has finished.
pub const DONE_MESSAGE: &str = "All is done!";

/// Separator between legend entries.
const LEGEND_SEPARATOR: &str = " • ";

/// Renders a snapshot as display text.
///
/// The done message is only shown for an expired countdown.
pub fn render(snapshot: &Snapshot, keymap: &Keymap) -> String {
    if snapshot.done && snapshot.status == TimerStatus::Expired {
        return DONE_MESSAGE.to_string();
    }

    let remaining = format_duration(snapshot.remaining);
    let headline = match snapshot.status {
        TimerStatus::Idle => format!("Ready: {}", remaining),
        TimerStatus::Running | TimerStatus::Expired => format!("Remaining: {}", remaining),
        TimerStatus::Paused => format!("Paused: {}", remaining),
    };

    format!("{}\n\n{}", headline, help_view(keymap))
}

/// Renders the one-line key legend.
pub fn help_view(keymap: &Keymap) -> String {
    keymap
        .short_help()
        .iter()
        .map(|binding| format!("{} {}", binding.help_key(), binding.help_desc()))
        .collect::<Vec<_>>()
        .join(LEGEND_SEPARATOR)
}

/// Formats a duration as `1h2m3s`, `25m0s`, `1.5s` or `500ms`.
///
/// Precision below one millisecond is dropped.
pub fn format_duration(duration: Duration) -> String {
    let total_seconds = duration.as_secs();
    let millis = duration.subsec_millis();

    if total_seconds == 0 {
        return if millis == 0 {
            "0s".to_string()
        } else {
            format!("{}ms", millis)
        };
    }

    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    let seconds_part = if millis == 0 {
        format!("{}s", seconds)
    } else {
        let fraction = format!("{:03}", millis);
        format!("{}.{}s", seconds, fraction.trim_end_matches('0'))
    };

    if hours > 0 {
        format!("{}h{}m{}", hours, minutes, seconds_part)
    } else if minutes > 0 {
        format!("{}m{}", minutes, seconds_part)
    } else {
        seconds_part
    }
}
