//! Scripted, headless event source.
//!
//! A replay script is a list of tokens:
//! - `tick` or `tick*N`: one or `N` ticks of the current schedule
//! - `timeout`: the timeout signal
//! - anything else: a key press with that name (`s`, `p`, `r`, `q`, `ctrl+c`)
//!
//! Each scripted event is followed by draining the follow-up events the app
//! posted to its own queue, so a timeout lands right after the tick that
//! caused it.

use thiserror::Error;
use tokio::sync::mpsc;
use tracing::debug;

use super::{App, Flow};
use crate::engine::ManualTicker;
use crate::engine::ticker::TickScheduler;
use crate::router::AppEvent;
use crate::types::TimerConfig;

/// Errors raised while parsing a replay script.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReplayError {
    /// A `tick*N` token with a missing or invalid count.
    #[error("invalid tick count in '{0}' (expected tick*N with N >= 1)")]
    InvalidTickCount(String),

    /// An empty token.
    #[error("empty event in replay script")]
    EmptyToken,
}

/// One parsed script token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptStep {
    /// A key press by name
    Key(String),
    /// A number of ticks of the current schedule
    Ticks(u32),
    /// The timeout signal
    Timeout,
}

/// Parses replay tokens into steps.
///
/// # Errors
///
/// Returns a [`ReplayError`] for empty tokens or malformed tick counts.
pub fn parse_script<T: AsRef<str>>(tokens: &[T]) -> Result<Vec<ScriptStep>, ReplayError> {
    tokens.iter().map(|token| parse_step(token.as_ref())).collect()
}

fn parse_step(token: &str) -> Result<ScriptStep, ReplayError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(ReplayError::EmptyToken);
    }

    match token {
        "tick" => Ok(ScriptStep::Ticks(1)),
        "timeout" => Ok(ScriptStep::Timeout),
        _ => match token.strip_prefix("tick*") {
            Some(count) => count
                .parse::<u32>()
                .ok()
                .filter(|n| *n >= 1)
                .map(ScriptStep::Ticks)
                .ok_or_else(|| ReplayError::InvalidTickCount(token.to_string())),
            None => Ok(ScriptStep::Key(token.to_string())),
        },
    }
}

/// Drives an [`App`] from a script instead of a terminal.
pub struct Replay {
    app: App<ManualTicker>,
    queue: mpsc::UnboundedReceiver<AppEvent>,
}

impl Replay {
    /// Creates a replay over a fresh, idle app.
    pub fn new(config: TimerConfig) -> Self {
        let (event_tx, queue) = mpsc::unbounded_channel();
        Self {
            app: App::new(config, ManualTicker::new(), event_tx),
            queue,
        }
    }

    /// Runs all steps, stopping early on quit.
    pub fn run(&mut self, steps: &[ScriptStep]) -> Flow {
        for step in steps {
            debug!(?step, "replaying step");

            let flow = match step {
                ScriptStep::Key(name) => self.feed(AppEvent::key(name.clone())),
                ScriptStep::Timeout => {
                    let timeout = self.app.current_timeout();
                    self.feed(timeout)
                }
                ScriptStep::Ticks(count) => {
                    let mut flow = Flow::Continue;
                    for _ in 0..*count {
                        // Ticks outside an active schedule are all dropped.
                        if !self.app.scheduler().is_active() {
                            break;
                        }
                        let tick = self.app.current_tick();
                        flow = self.feed(tick);
                        if flow == Flow::Quit {
                            break;
                        }
                    }
                    flow
                }
            };

            if flow == Flow::Quit {
                return Flow::Quit;
            }
        }

        Flow::Continue
    }

    /// Handles one event and everything it posted to the queue.
    fn feed(&mut self, event: AppEvent) -> Flow {
        let mut flow = self.app.handle_event(event);
        while flow == Flow::Continue {
            match self.queue.try_recv() {
                Ok(follow_up) => flow = self.app.handle_event(follow_up),
                Err(_) => break,
            }
        }
        flow
    }

    /// Returns the app being driven.
    pub fn app(&self) -> &App<ManualTicker> {
        &self.app
    }
}
