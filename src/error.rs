//! Errors raised by the engine and its configuration builders.

use thiserror::Error;

/// Convenient result alias for rewind-fsm.
pub type Result<T> = std::result::Result<T, FsmError>;

/// Errors that can occur while constructing or driving a state machine.
///
/// Running out of history is not an error: `undo` and `redo` report it
/// through their boolean return value instead.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FsmError {
    /// No usable configuration was supplied. No engine is produced.
    #[error("Configuration error: {reason}")]
    Configuration { reason: String },

    /// A direct jump named a state outside the recognized catalog.
    #[error("State '{state}' is not a recognized state")]
    InvalidState { state: String },

    /// The transition table has no entry for this event from the current state.
    #[error("No transition for event '{event}' from state '{state}'")]
    NoTransition { state: String, event: String },
}

impl FsmError {
    pub(crate) fn configuration(reason: impl Into<String>) -> Self {
        Self::Configuration {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_state(state: impl Into<String>) -> Self {
        Self::InvalidState {
            state: state.into(),
        }
    }

    pub(crate) fn no_transition(state: impl Into<String>, event: impl Into<String>) -> Self {
        Self::NoTransition {
            state: state.into(),
            event: event.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_values() {
        let err = FsmError::no_transition("normal", "fly");
        assert_eq!(
            err.to_string(),
            "No transition for event 'fly' from state 'normal'"
        );

        let err = FsmError::invalid_state("flying");
        assert_eq!(err.to_string(), "State 'flying' is not a recognized state");
    }

    #[test]
    fn configuration_error_carries_reason() {
        let err = FsmError::configuration("no configuration supplied");
        assert!(matches!(err, FsmError::Configuration { ref reason } if reason == "no configuration supplied"));
    }
}
