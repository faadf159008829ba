//! Command routing for the Pomodoro timer.
//!
//! This module classifies incoming [`AppEvent`]s and calls into the
//! [`TimerEngine`]. It holds no state besides the static [`Keymap`].

pub mod event;
pub mod keymap;

pub use event::AppEvent;
pub use keymap::{Binding, Intent, Keymap};

use tracing::{debug, trace};

use crate::engine::{Directive, TimerEngine};

// ============================================================================
// Command / Outcome
// ============================================================================

/// Classification of an event before it touches the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// A bound key
    Intent(Intent),
    /// A tick to forward to the engine
    Tick,
    /// The timeout signal
    Timeout,
    /// Anything else
    Ignore,
}

/// Result of dispatching one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The host must terminate its event loop
    Quit,
    /// The engine was called and may have returned a directive
    Engine(Option<Directive>),
    /// The countdown is done; set the done flag
    Done,
    /// Nothing happened
    Ignored,
}

// ============================================================================
// CommandRouter
// ============================================================================

/// Maps raw events to intents and forwards them to the engine.
#[derive(Debug, Clone, Default)]
pub struct CommandRouter {
    keymap: Keymap,
}

impl CommandRouter {
    /// Creates a router over the given keymap.
    pub fn new(keymap: Keymap) -> Self {
        Self { keymap }
    }

    /// Returns the keymap.
    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    /// Classifies an event without side effects.
    pub fn classify(&self, event: &AppEvent) -> Command {
        match event {
            AppEvent::Key(name) => self
                .keymap
                .intent_for(name)
                .map_or(Command::Ignore, Command::Intent),
            AppEvent::Tick { .. } => Command::Tick,
            AppEvent::Timeout { .. } => Command::Timeout,
            AppEvent::Resize(..) | AppEvent::InputFailed(_) => Command::Ignore,
        }
    }

    /// Dispatches an event to the engine.
    pub fn dispatch(&self, event: &AppEvent, engine: &mut TimerEngine) -> Outcome {
        let command = self.classify(event);
        trace!(%event, ?command, "routing event");

        if let Command::Intent(intent) = command {
            debug!(%intent, status = engine.status().as_str(), "intent received");
        }

        match command {
            Command::Intent(Intent::Quit) => Outcome::Quit,
            Command::Intent(Intent::Reset) => Outcome::Engine(engine.reset()),
            Command::Intent(Intent::Stop) => Outcome::Engine(engine.stop()),
            Command::Intent(Intent::Start) => Outcome::Engine(engine.start()),
            Command::Tick => Outcome::Engine(engine.tick()),
            Command::Timeout => Outcome::Done,
            Command::Ignore => Outcome::Ignored,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
