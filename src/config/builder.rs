//! Builder for constructing transition tables.

use crate::config::FsmConfig;
use crate::error::{FsmError, Result};

/// Builder for constructing an [`FsmConfig`] with a fluent API.
///
/// Only the initial state is required. States and targets are not
/// cross-checked; that stays the engine's job at the point of use.
#[derive(Debug, Default)]
pub struct FsmConfigBuilder {
    initial: Option<String>,
    config: FsmConfig,
}

impl FsmConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<String>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state without adding transitions.
    pub fn state(mut self, state: &str) -> Self {
        self.config.add_state(state);
        self
    }

    /// Add a transition from `from` to `to` under `event`.
    pub fn transition(mut self, from: &str, event: &str, to: &str) -> Self {
        self.config.add_transition(from, event, to);
        self
    }

    /// Build the configuration.
    /// Returns an error if no initial state was set.
    pub fn build(self) -> Result<FsmConfig> {
        let initial = self.initial.ok_or_else(|| {
            FsmError::configuration("initial state not specified, call .initial(state) before .build()")
        })?;

        Ok(FsmConfig {
            initial,
            states: self.config.states,
        })
    }
}
