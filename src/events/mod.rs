//! Event log consumed by presentation code.
//!
//! `Game` appends a `GameEvent` for each placement, draw, recycle,
//! elimination and turn change. Callers drain the log after every step
//! instead of polling individual fields.

pub mod event;

pub use event::GameEvent;
