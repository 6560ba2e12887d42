//! The state machine engine.
//!
//! [`Fsm`] owns the transition table, the current state and the history
//! log. All operations are synchronous and validate before mutating, so a
//! failed call leaves the engine exactly as it was.

mod machine;

pub use machine::Fsm;
