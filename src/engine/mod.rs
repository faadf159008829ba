//! Engine module for the Pomodoro timer.
//!
//! - `timer`: countdown state machine with directives
//! - `ticker`: tick schedulers that carry out those directives

pub mod ticker;
pub mod timer;

pub use ticker::{ManualTicker, TickScheduler, TokioTicker};
pub use timer::{Directive, TimerEngine};
