//! Static key bindings and the intents they map to.

use std::fmt;

// ============================================================================
// Intent
// ============================================================================

/// Normalized commands produced by classifying key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Start (or restart) the countdown
    Start,
    /// Pause the countdown
    Stop,
    /// Halt the countdown
    Reset,
    /// Leave the application
    Quit,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intent::Start => write!(f, "start"),
            Intent::Stop => write!(f, "stop"),
            Intent::Reset => write!(f, "reset"),
            Intent::Quit => write!(f, "quit"),
        }
    }
}

// ============================================================================
// Binding
// ============================================================================

/// A set of key names bound to one intent, plus its legend entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    keys: &'static [&'static str],
    help_key: &'static str,
    help_desc: &'static str,
}

impl Binding {
    /// Creates a binding.
    pub const fn new(
        keys: &'static [&'static str],
        help_key: &'static str,
        help_desc: &'static str,
    ) -> Self {
        Self {
            keys,
            help_key,
            help_desc,
        }
    }

    /// Returns true if the key name triggers this binding.
    pub fn matches(&self, key: &str) -> bool {
        self.keys.iter().any(|bound| *bound == key)
    }

    /// Returns the key label shown in the legend.
    pub fn help_key(&self) -> &'static str {
        self.help_key
    }

    /// Returns the description shown in the legend.
    pub fn help_desc(&self) -> &'static str {
        self.help_desc
    }
}

// ============================================================================
// Keymap
// ============================================================================

/// The fixed key → intent table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keymap {
    pub start: Binding,
    pub stop: Binding,
    pub reset: Binding,
    pub quit: Binding,
}

impl Default for Keymap {
    fn default() -> Self {
        Self {
            start: Binding::new(&["s"], "s", "start"),
            stop: Binding::new(&["p"], "p", "stop"),
            reset: Binding::new(&["r"], "r", "reset"),
            quit: Binding::new(&["q", "ctrl+c"], "q", "quit"),
        }
    }
}

impl Keymap {
    /// Resolves a key name to an intent.
    ///
    /// Bindings are checked in priority order: quit, reset, stop, start.
    pub fn intent_for(&self, key: &str) -> Option<Intent> {
        [
            (&self.quit, Intent::Quit),
            (&self.reset, Intent::Reset),
            (&self.stop, Intent::Stop),
            (&self.start, Intent::Start),
        ]
        .into_iter()
        .find(|(binding, _)| binding.matches(key))
        .map(|(_, intent)| intent)
    }

    /// Returns the bindings listed in the short legend, in display order.
    pub fn short_help(&self) -> [&Binding; 4] {
        [&self.start, &self.stop, &self.reset, &self.quit]
    }
}
