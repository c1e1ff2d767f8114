//! Messages exchanged between a game host and its presenters.
//!
//! Inbound, each game accepts a small set of logical events that can be read from JSON
//! or from terse text tokens. Outbound, every accepted operation produces one [`Frame`]
//! carrying the engine snapshot and the transient [`Feedback`] to show with it.

pub use event::*;
pub use frame::*;

mod event;
mod frame;
