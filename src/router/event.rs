//! Events delivered to the application loop.
//!
//! Every event source (keyboard reader, tick scheduler, scripted replay)
//! funnels into a single queue of [`AppEvent`]s.

use std::fmt;

/// All events processed by the application, one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// A key press, identified by its symbolic name (e.g. `"s"`, `"ctrl+c"`)
    Key(String),
    /// One tick interval elapsed
    Tick {
        /// Generation of the schedule that produced the tick
        generation: u64,
    },
    /// The countdown reached zero
    Timeout {
        /// Generation of the schedule whose countdown expired
        generation: u64,
    },
    /// The terminal was resized
    Resize(u16, u16),
    /// The input source failed and will deliver no more events
    InputFailed(String),
}

impl AppEvent {
    /// Convenience constructor for key events.
    pub fn key(name: impl Into<String>) -> Self {
        AppEvent::Key(name.into())
    }
}

impl fmt::Display for AppEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppEvent::Key(name) => write!(f, "key:{}", name),
            AppEvent::Tick { generation } => write!(f, "tick#{}", generation),
            AppEvent::Timeout { generation } => write!(f, "timeout#{}", generation),
            AppEvent::Resize(width, height) => write!(f, "resize:{}x{}", width, height),
            AppEvent::InputFailed(_) => write!(f, "input-failed"),
        }
    }
}
