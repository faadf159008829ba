//! Tick scheduling for the timer engine.
//!
//! The engine never sleeps. Instead it hands out directives, and the host
//! drives a [`TickScheduler`] which pushes `Tick` events into the app queue.
//! Every call to [`TickScheduler::start`] opens a new generation so that ticks
//! from a cancelled schedule can be recognized and dropped.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::debug;

use crate::router::AppEvent;

// ============================================================================
// TickScheduler
// ============================================================================

/// Something that can deliver periodic ticks on behalf of the engine.
pub trait TickScheduler {
    /// Starts a new schedule, cancelling any previous one.
    ///
    /// Returns the generation tag carried by ticks of the new schedule.
    fn start(&mut self, period: Duration) -> u64;

    /// Cancels the current schedule, if any.
    fn cancel(&mut self);

    /// Returns the generation of the most recent schedule.
    fn generation(&self) -> u64;

    /// Returns true while a schedule is active.
    fn is_active(&self) -> bool;

    /// Returns true if a tick with this generation should be processed.
    fn is_current(&self, generation: u64) -> bool {
        self.is_active() && generation == self.generation()
    }
}

// ============================================================================
// TokioTicker
// ============================================================================

/// Scheduler backed by a `tokio::time::interval` task.
///
/// Must be used from within a tokio runtime.
pub struct TokioTicker {
    event_tx: mpsc::UnboundedSender<AppEvent>,
    handle: Option<JoinHandle<()>>,
    generation: u64,
}

impl TokioTicker {
    /// Creates a ticker that sends ticks into the given queue.
    pub fn new(event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self {
            event_tx,
            handle: None,
            generation: 0,
        }
    }
}

impl TickScheduler for TokioTicker {
    fn start(&mut self, period: Duration) -> u64 {
        self.cancel();
        self.generation += 1;

        let generation = self.generation;
        let event_tx = self.event_tx.clone();

        self.handle = Some(tokio::spawn(async move {
            // First tick fires one period after start, not immediately.
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                ticker.tick().await;

                if event_tx.send(AppEvent::Tick { generation }).is_err() {
                    debug!(generation, "event queue closed, ticker exiting");
                    break;
                }
            }
        }));

        debug!(generation, ?period, "tick schedule started");
        generation
    }

    fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            debug!(generation = self.generation, "tick schedule cancelled");
        }
    }

    fn generation(&self) -> u64 {
        self.generation
    }

    fn is_active(&self) -> bool {
        self.handle.is_some()
    }
}

impl Drop for TokioTicker {
    fn drop(&mut self) {
        self.cancel();
    }
}

// ============================================================================
// ManualTicker
// ============================================================================

/// Scheduler that only records its state.
///
/// Ticks are injected by the caller, which makes this suitable for scripted
/// replays and tests.
#[derive(Debug, Default, Clone)]
pub struct ManualTicker {
    generation: u64,
    active: bool,
    period: Option<Duration>,
    starts: u32,
    cancels: u32,
}

impl ManualTicker {
    /// Creates an inactive manual ticker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the period of the active schedule.
    pub fn period(&self) -> Option<Duration> {
        self.period
    }

    /// Returns how many schedules were started.
    pub fn start_count(&self) -> u32 {
        self.starts
    }

    /// Returns how many active schedules were cancelled.
    pub fn cancel_count(&self) -> u32 {
        self.cancels
    }
}

impl TickScheduler for ManualTicker {
    fn start(&mut self, period: Duration) -> u64 {
        self.cancel();
        self.generation += 1;
        self.active = true;
        self.period = Some(period);
        self.starts += 1;
        self.generation
    }

    fn cancel(&mut self) {
        if self.active {
            self.active = false;
            self.period = None;
            self.cancels += 1;
        }
    }

    fn generation(&self) -> u64 {
        self.generation
    }

    fn is_active(&self) -> bool {
        self.active
    }
}

// ============================================================================
// Tests
// ============================================================================
