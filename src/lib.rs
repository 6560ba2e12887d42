//! Rewind: a table-driven finite-state machine with undo/redo
//!
//! An [`Fsm`] is built from a declarative transition table, tracks a single
//! current state and keeps a linear, replayable history of the states it
//! visited. Callers advance it by firing named events or by jumping
//! directly to a catalog state, and walk back and forth through history
//! with `undo` and `redo`.
//!
//! # Core Concepts
//!
//! - **Configuration**: the initial state plus state → event → next-state
//!   mappings, see [`config`]
//! - **Catalog**: the fixed set of states a direct jump may target,
//!   see [`KnownState`]
//! - **History**: an append-only log with a replay cursor, see [`History`]
//!
//! # Example
//!
//! ```rust
//! use rewind_fsm::{transition_table, Fsm, FsmError};
//!
//! let config = transition_table! {
//!     initial: normal,
//!     normal { eat => hungry },
//!     hungry { eat => busy },
//! };
//!
//! let mut fsm = Fsm::new(Some(config))?;
//! fsm.trigger("eat")?;
//! fsm.trigger("eat")?;
//! assert_eq!(fsm.state(), "busy");
//!
//! assert!(fsm.undo());
//! assert!(fsm.undo());
//! assert!(!fsm.undo());
//! assert_eq!(fsm.state(), "normal");
//!
//! assert!(matches!(fsm.trigger("sing"), Err(FsmError::NoTransition { .. })));
//! # Ok::<(), FsmError>(())
//! ```
//!
//! Logging goes through [`tracing`]; install a subscriber to see it.

mod macros;

pub mod config;
pub mod core;
pub mod engine;
pub mod error;

// Re-export commonly used types
pub use crate::config::{EngineOptions, FsmConfig, HistoryPolicy, HistorySeed, StateConfig};
pub use crate::core::{Cause, History, HistoryEntry, KnownState};
pub use crate::engine::Fsm;
pub use crate::error::{FsmError, Result};
