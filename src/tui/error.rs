//! Terminal host error types.

use std::io;

use thiserror::Error;

/// Errors raised by the terminal host around the core loop.
#[derive(Debug, Error)]
pub enum TuiError {
    /// Raw mode or alternate screen could not be entered.
    #[error("failed to set up terminal: {0}")]
    Setup(#[source] io::Error),

    /// The terminal could not be returned to its original state.
    #[error("failed to restore terminal: {0}")]
    Restore(#[source] io::Error),

    /// Drawing a frame failed.
    #[error("failed to draw frame: {0}")]
    Draw(#[source] io::Error),

    /// The keyboard reader stopped with an error.
    #[error("failed to read terminal input: {0}")]
    Input(String),

    /// All event senders were dropped.
    #[error("event source closed unexpectedly")]
    EventSourceClosed,
}
