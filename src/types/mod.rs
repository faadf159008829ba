//! Core data types for the Pomodoro timer.
//!
//! This module defines the data structures used for:
//! - Timer status tracking
//! - Timer configuration with validation
//! - Renderable snapshots of the timer

mod error;

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub use error::ConfigError;

/// Default work duration (25 minutes).
pub const DEFAULT_WORK_MINUTES: u32 = 25;

/// Default break duration (5 minutes).
pub const DEFAULT_BREAK_MINUTES: u32 = 5;

/// Default tick interval in milliseconds.
pub const DEFAULT_INTERVAL_MS: u64 = 1000;

// ============================================================================
// TimerStatus
// ============================================================================

/// Represents the current status of the countdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerStatus {
    /// Never started
    #[default]
    Idle,
    /// Actively counting down
    Running,
    /// Countdown halted, remaining time frozen
    Paused,
    /// Remaining time reached zero
    Expired,
}

impl TimerStatus {
    /// Returns the string representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerStatus::Idle => "idle",
            TimerStatus::Running => "running",
            TimerStatus::Paused => "paused",
            TimerStatus::Expired => "expired",
        }
    }

    /// Returns true if ticks should be decrementing the countdown.
    pub fn is_running(&self) -> bool {
        matches!(self, TimerStatus::Running)
    }
}

// ============================================================================
// TimerConfig
// ============================================================================

/// Configuration for the timer, fixed at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerConfig {
    /// Length of a work interval
    pub work_duration: Duration,
    /// Length of a break interval (reserved, not consumed by any transition)
    pub break_duration: Duration,
    /// Tick cadence
    pub interval: Duration,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            work_duration: Duration::from_secs(u64::from(DEFAULT_WORK_MINUTES) * 60),
            break_duration: Duration::from_secs(u64::from(DEFAULT_BREAK_MINUTES) * 60),
            interval: Duration::from_millis(DEFAULT_INTERVAL_MS),
        }
    }
}

impl TimerConfig {
    /// Sets the work duration in minutes.
    pub fn with_work_minutes(mut self, minutes: u32) -> Self {
        self.work_duration = Duration::from_secs(u64::from(minutes) * 60);
        self
    }

    /// Sets the break duration in minutes.
    pub fn with_break_minutes(mut self, minutes: u32) -> Self {
        self.break_duration = Duration::from_secs(u64::from(minutes) * 60);
        self
    }

    /// Sets the work duration directly.
    pub fn with_work_duration(mut self, duration: Duration) -> Self {
        self.work_duration = duration;
        self
    }

    /// Sets the tick interval.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] describing the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.work_duration.is_zero() {
            return Err(ConfigError::ZeroWorkDuration);
        }
        if self.break_duration.is_zero() {
            return Err(ConfigError::ZeroBreakDuration);
        }
        if self.interval.is_zero() {
            return Err(ConfigError::ZeroInterval);
        }
        if self.interval > self.work_duration {
            return Err(ConfigError::IntervalTooLong {
                interval: self.interval,
                work: self.work_duration,
            });
        }
        Ok(())
    }
}

// ============================================================================
// Snapshot
// ============================================================================

/// A renderable view of the application state after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Engine status
    pub status: TimerStatus,
    /// Remaining countdown time
    #[serde(rename = "remainingMs", with = "millis")]
    pub remaining: Duration,
    /// Whether the timeout signal has been observed
    pub done: bool,
}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        let millis = u64::try_from(value.as_millis()).unwrap_or(u64::MAX);
        serializer.serialize_u64(millis)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

// ============================================================================
// Tests
// ============================================================================
