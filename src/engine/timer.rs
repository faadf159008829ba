//! Timer engine for the Pomodoro timer.
//!
//! This module provides the countdown state machine:
//! - State transitions (Idle → Running ⇄ Paused, Running → Expired)
//! - Countdown driven by externally delivered ticks
//! - Directives telling the host when to begin or cancel ticking

use std::time::Duration;

use tracing::{debug, trace};

use crate::types::{Snapshot, TimerConfig, TimerStatus};

// ============================================================================
// Directive
// ============================================================================

/// Follow-up actions the host must carry out after an engine operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    /// Begin emitting tick events at the given period
    StartTicking(Duration),
    /// Stop emitting tick events
    CancelTicking,
    /// The countdown reached zero; no further ticks are needed
    TimeoutReached,
}

// ============================================================================
// TimerEngine
// ============================================================================

/// Countdown state machine.
///
/// The engine is mutated only through [`start`](Self::start),
/// [`stop`](Self::stop), [`reset`](Self::reset) and [`tick`](Self::tick).
/// None of them can fail.
#[derive(Debug, Clone)]
pub struct TimerEngine {
    config: TimerConfig,
    status: TimerStatus,
    remaining: Duration,
}

impl TimerEngine {
    /// Creates an idle engine showing the full work duration.
    pub fn new(config: TimerConfig) -> Self {
        Self {
            remaining: config.work_duration,
            status: TimerStatus::Idle,
            config,
        }
    }

    /// Starts a fresh countdown from the full work duration.
    ///
    /// Valid from any status. Starting while running restarts the interval
    /// rather than resuming it.
    pub fn start(&mut self) -> Option<Directive> {
        let previous = self.status;
        self.remaining = self.config.work_duration;
        self.status = TimerStatus::Running;

        debug!(
            from = previous.as_str(),
            remaining = ?self.remaining,
            "countdown started"
        );

        Some(Directive::StartTicking(self.config.interval))
    }

    /// Pauses a running countdown, freezing the remaining time.
    ///
    /// Returns no directive unless the engine was running.
    pub fn stop(&mut self) -> Option<Directive> {
        if !self.status.is_running() {
            trace!(status = self.status.as_str(), "stop ignored");
            return None;
        }

        self.status = TimerStatus::Paused;
        debug!(remaining = ?self.remaining, "countdown paused");

        Some(Directive::CancelTicking)
    }

    /// Halts a running countdown.
    ///
    /// The remaining time is kept as is, so this behaves exactly like
    /// [`stop`](Self::stop).
    pub fn reset(&mut self) -> Option<Directive> {
        if !self.status.is_running() {
            trace!(status = self.status.as_str(), "reset ignored");
            return None;
        }

        self.stop()
    }

    /// Consumes one interval of countdown time.
    ///
    /// Returns [`Directive::TimeoutReached`] on the tick that brings the
    /// remaining time to zero. Ticks while not running are ignored.
    pub fn tick(&mut self) -> Option<Directive> {
        if !self.status.is_running() {
            trace!(status = self.status.as_str(), "tick ignored");
            return None;
        }

        self.remaining = self.remaining.saturating_sub(self.config.interval);

        if self.remaining.is_zero() {
            self.status = TimerStatus::Expired;
            debug!("countdown expired");
            return Some(Directive::TimeoutReached);
        }

        None
    }

    /// Returns the current status.
    pub fn status(&self) -> TimerStatus {
        self.status
    }

    /// Returns the remaining countdown time.
    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    /// Builds a snapshot of the engine with the given done flag.
    pub fn snapshot(&self, done: bool) -> Snapshot {
        Snapshot {
            status: self.status,
            remaining: self.remaining,
            done,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
