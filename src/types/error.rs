//! Configuration error types.

use std::time::Duration;

use thiserror::Error;

/// Errors raised when a [`TimerConfig`](super::TimerConfig) is rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Work duration must be positive.
    #[error("work duration must be greater than zero")]
    ZeroWorkDuration,

    /// Break duration must be positive.
    #[error("break duration must be greater than zero")]
    ZeroBreakDuration,

    /// Tick interval must be positive.
    #[error("tick interval must be greater than zero")]
    ZeroInterval,

    /// The tick interval cannot exceed the work duration.
    #[error("tick interval {interval:?} is longer than the work duration {work:?}")]
    IntervalTooLong {
        /// Configured tick interval
        interval: Duration,
        /// Configured work duration
        work: Duration,
    },
}
