//! Application state for the Pomodoro timer.
//!
//! [`App`] owns the engine, the router, the done flag and a tick scheduler.
//! Hosts feed it one [`AppEvent`] at a time and render [`App::view`] after
//! each event.

pub mod replay;

use tokio::sync::mpsc;
use tracing::{debug, info, trace, warn};

use crate::engine::{Directive, TickScheduler, TimerEngine};
use crate::router::{AppEvent, CommandRouter, Keymap, Outcome};
use crate::tui::view;
use crate::types::{Snapshot, TimerConfig};

pub use replay::{parse_script, Replay, ReplayError, ScriptStep};

/// Whether the host loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep processing events
    Continue,
    /// Terminate the loop
    Quit,
}

/// The process-level application state.
pub struct App<S: TickScheduler> {
    engine: TimerEngine,
    router: CommandRouter,
    scheduler: S,
    event_tx: mpsc::UnboundedSender<AppEvent>,
    done: bool,
}

impl<S: TickScheduler> App<S> {
    /// Creates an idle application.
    ///
    /// `event_tx` is the sending half of the queue the host consumes; the app
    /// uses it to post the timeout signal back to itself.
    pub fn new(config: TimerConfig, scheduler: S, event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self {
            engine: TimerEngine::new(config),
            router: CommandRouter::default(),
            scheduler,
            event_tx,
            done: false,
        }
    }

    /// Replaces the default keymap.
    pub fn with_keymap(mut self, keymap: Keymap) -> Self {
        self.router = CommandRouter::new(keymap);
        self
    }

    /// Processes one event to completion.
    pub fn handle_event(&mut self, event: AppEvent) -> Flow {
        match event {
            AppEvent::Tick { generation } if !self.scheduler.is_current(generation) => {
                trace!(generation, "discarding stale tick");
                return Flow::Continue;
            }
            AppEvent::Timeout { generation } if generation != self.scheduler.generation() => {
                trace!(generation, "discarding stale timeout");
                return Flow::Continue;
            }
            _ => {}
        }

        match self.router.dispatch(&event, &mut self.engine) {
            Outcome::Quit => {
                info!(status = self.engine.status().as_str(), "quit requested");
                return Flow::Quit;
            }
            Outcome::Engine(Some(directive)) => self.apply(directive),
            Outcome::Engine(None) | Outcome::Ignored => {}
            Outcome::Done => {
                debug!("timeout observed");
                self.done = true;
            }
        }

        Flow::Continue
    }

    /// Carries out an engine directive.
    fn apply(&mut self, directive: Directive) {
        match directive {
            Directive::StartTicking(period) => {
                self.done = false;
                self.scheduler.start(period);
            }
            Directive::CancelTicking => self.scheduler.cancel(),
            Directive::TimeoutReached => {
                self.scheduler.cancel();
                let timeout = self.current_timeout();
                if self.event_tx.send(timeout).is_err() {
                    warn!("event queue closed, timeout signal dropped");
                }
            }
        }
    }

    /// Returns a tick event for the current schedule.
    pub fn current_tick(&self) -> AppEvent {
        AppEvent::Tick {
            generation: self.scheduler.generation(),
        }
    }

    /// Returns a timeout event for the current schedule.
    pub fn current_timeout(&self) -> AppEvent {
        AppEvent::Timeout {
            generation: self.scheduler.generation(),
        }
    }

    /// Returns the renderable state.
    pub fn snapshot(&self) -> Snapshot {
        self.engine.snapshot(self.done)
    }

    /// Renders the current state as text.
    pub fn view(&self) -> String {
        view::render(&self.snapshot(), self.router.keymap())
    }

    /// Returns the engine.
    pub fn engine(&self) -> &TimerEngine {
        &self.engine
    }

    /// Returns the tick scheduler.
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Returns true once the timeout signal has been observed.
    pub fn is_done(&self) -> bool {
        self.done
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::engine::ManualTicker;
    use crate::types::TimerStatus;

    fn create_app(
        config: TimerConfig,
    ) -> (App<ManualTicker>, mpsc::UnboundedReceiver<AppEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (App::new(config, ManualTicker::new(), tx), rx)
    }

    fn fast_config() -> TimerConfig {
        TimerConfig::default()
            .with_work_duration(Duration::from_secs(2))
            .with_interval(Duration::from_secs(1))
    }

    #[test]
    fn test_start_schedules_ticks() {
        let (mut app, _rx) = create_app(TimerConfig::default());

        assert_eq!(app.handle_event(AppEvent::key("s")), Flow::Continue);

        assert_eq!(app.engine().status(), TimerStatus::Running);
        assert!(app.scheduler().is_active());
        assert_eq!(app.scheduler().period(), Some(Duration::from_secs(1)));
    }

    #[test]
    fn test_stop_cancels_ticks() {
        let (mut app, _rx) = create_app(TimerConfig::default());
        app.handle_event(AppEvent::key("s"));

        app.handle_event(AppEvent::key("p"));

        assert_eq!(app.engine().status(), TimerStatus::Paused);
        assert!(!app.scheduler().is_active());
    }

    #[test]
    fn test_stale_tick_is_discarded() {
        let (mut app, _rx) = create_app(TimerConfig::default());
        app.handle_event(AppEvent::key("s"));
        let stale = app.current_tick();
        app.handle_event(AppEvent::key("p"));
        app.handle_event(AppEvent::key("s"));

        app.handle_event(stale);

        assert_eq!(app.engine().remaining(), Duration::from_secs(25 * 60));
    }

    #[test]
    fn test_current_tick_is_applied() {
        let (mut app, _rx) = create_app(TimerConfig::default());
        app.handle_event(AppEvent::key("s"));

        app.handle_event(app.current_tick());

        assert_eq!(app.engine().remaining(), Duration::from_secs(25 * 60 - 1));
    }

    #[test]
    fn test_expiry_posts_timeout() {
        let (mut app, mut rx) = create_app(fast_config());
        app.handle_event(AppEvent::key("s"));
        app.handle_event(app.current_tick());
        app.handle_event(app.current_tick());

        assert_eq!(app.engine().status(), TimerStatus::Expired);
        assert!(!app.scheduler().is_active());
        assert!(!app.is_done());

        let event = rx.try_recv().expect("timeout should be queued");
        assert_eq!(event, AppEvent::Timeout { generation: 1 });
        app.handle_event(event);

        assert!(app.is_done());
        assert_eq!(app.view(), view::DONE_MESSAGE);
    }

    #[test]
    fn test_restart_after_done_clears_flag() {
        let (mut app, mut rx) = create_app(fast_config());
        app.handle_event(AppEvent::key("s"));
        app.handle_event(app.current_tick());
        app.handle_event(app.current_tick());
        app.handle_event(rx.try_recv().unwrap());
        assert!(app.is_done());

        app.handle_event(AppEvent::key("s"));

        assert!(!app.is_done());
        assert_eq!(app.engine().status(), TimerStatus::Running);
        assert_eq!(app.engine().remaining(), Duration::from_secs(2));
    }

    #[test]
    fn test_timeout_from_previous_countdown_is_discarded() {
        let config = TimerConfig::default()
            .with_work_duration(Duration::from_secs(1))
            .with_interval(Duration::from_secs(1));
        let (mut app, mut rx) = create_app(config);
        app.handle_event(AppEvent::key("s"));
        app.handle_event(app.current_tick());
        assert_eq!(app.engine().status(), TimerStatus::Expired);

        // Restart before the queued timeout is read.
        app.handle_event(AppEvent::key("s"));
        let queued = rx.try_recv().expect("timeout should be queued");
        app.handle_event(queued);

        assert!(!app.is_done());
        assert_eq!(app.engine().status(), TimerStatus::Running);
        assert!(app.view().starts_with("Remaining: 1s"));
        assert!(app.view().contains("q quit"));
    }

    #[test]
    fn test_quit_returns_quit_flow() {
        let (mut app, _rx) = create_app(TimerConfig::default());
        app.handle_event(AppEvent::key("s"));
        let before = app.snapshot();

        assert_eq!(app.handle_event(AppEvent::key("ctrl+c")), Flow::Quit);
        assert_eq!(app.snapshot(), before);
    }

    #[test]
    fn test_resize_is_ignored() {
        let (mut app, _rx) = create_app(TimerConfig::default());
        let before = app.snapshot();

        assert_eq!(app.handle_event(AppEvent::Resize(100, 40)), Flow::Continue);
        assert_eq!(app.snapshot(), before);
    }

    #[test]
    fn test_view_shows_legend_while_not_done() {
        let (app, _rx) = create_app(TimerConfig::default());
        assert!(app.view().starts_with("Ready: 25m0s"));
        assert!(app.view().contains("q quit"));
    }

    #[test]
    fn test_custom_keymap() {
        use crate::router::Binding;

        let keymap = Keymap {
            start: Binding::new(&["enter"], "enter", "start"),
            ..Keymap::default()
        };
        let (app, _rx) = create_app(TimerConfig::default());
        let mut app = app.with_keymap(keymap);

        app.handle_event(AppEvent::key("s"));
        assert_eq!(app.engine().status(), TimerStatus::Idle);

        app.handle_event(AppEvent::key("enter"));
        assert_eq!(app.engine().status(), TimerStatus::Running);
    }
}
