//! Core data types of the engine.
//!
//! This module holds the pieces the engine is built from:
//! - the fixed catalog of directly reachable states
//! - the replayable history log and its cursor

mod catalog;
mod history;

pub use catalog::KnownState;
pub use history::{Cause, History, HistoryEntry};
