//! The fixed catalog of states a direct jump may target.
//!
//! The catalog is intrinsic to the engine and independent of any
//! configuration. Only `change_state` consults it; event-driven transitions
//! trust the transition table instead.

use crate::macros::state_catalog;

state_catalog! {
    /// States recognized by [`Fsm::change_state`](crate::engine::Fsm::change_state).
    ///
    /// # Example
    ///
    /// ```rust
    /// use rewind_fsm::core::KnownState;
    ///
    /// assert!(KnownState::is_recognized("hungry"));
    /// assert!(!KnownState::is_recognized("Hungry"));
    /// assert_eq!("busy".parse::<KnownState>().unwrap(), KnownState::Busy);
    /// ```
    pub enum KnownState {
        Normal => "normal",
        Busy => "busy",
        Hungry => "hungry",
        Sleeping => "sleeping",
    }
}

impl KnownState {
    /// Check whether `name` belongs to the catalog (case-sensitive).
    pub fn is_recognized(name: &str) -> bool {
        name.parse::<Self>().is_ok()
    }
}
