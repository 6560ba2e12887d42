//! Transition-table configuration and engine options.
//!
//! A configuration is plain data: the initial state plus, for every
//! configured state, a map from event name to next state. It derives serde
//! so callers can source it from whatever format they already use. Nothing
//! here checks that referenced states exist; bad references surface only
//! when an operation runs into them.

mod builder;
mod options;
mod ordered;

pub use builder::FsmConfigBuilder;
pub use options::{EngineOptions, HistoryPolicy, HistorySeed};
pub use ordered::OrderedMap;

use serde::{Deserialize, Serialize};

/// Outgoing transitions of one configured state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateConfig {
    /// Event name to next-state name
    #[serde(default)]
    pub transitions: OrderedMap<String>,
}

impl StateConfig {
    /// Next state for `event`, if one is mapped.
    ///
    /// An empty target name counts as unmapped.
    pub fn target(&self, event: &str) -> Option<&str> {
        self.transitions
            .get(event)
            .map(String::as_str)
            .filter(|target| !target.is_empty())
    }
}

/// Complete transition table handed to the engine at construction.
///
/// # Example
///
/// ```rust
/// use rewind_fsm::config::FsmConfig;
///
/// let config: FsmConfig = serde_json::from_str(r#"{
///     "initial": "normal",
///     "states": {
///         "normal": { "transitions": { "eat": "hungry" } },
///         "hungry": { "transitions": { "eat": "busy" } }
///     }
/// }"#).unwrap();
///
/// assert_eq!(config.target("normal", "eat"), Some("hungry"));
/// assert_eq!(config.target("busy", "eat"), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FsmConfig {
    /// State the engine starts in and returns to on reset
    pub initial: String,
    /// Configured states in declaration order
    #[serde(default)]
    pub states: OrderedMap<StateConfig>,
}

impl FsmConfig {
    /// Create a configuration with no states.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            initial: initial.into(),
            states: OrderedMap::new(),
        }
    }

    /// Start a fluent builder.
    pub fn builder() -> FsmConfigBuilder {
        FsmConfigBuilder::new()
    }

    /// Look up the next state for `event` fired from `state`.
    pub fn target(&self, state: &str, event: &str) -> Option<&str> {
        self.states.get(state)?.target(event)
    }

    /// Configured state names in declaration order.
    pub fn state_names(&self) -> impl Iterator<Item = &str> {
        self.states.keys()
    }

    /// Declare a state, keeping any transitions it already has.
    pub fn add_state(&mut self, state: &str) -> &mut StateConfig {
        self.states.get_or_insert_default(state)
    }

    /// Map `event` from `from` onto `to`, declaring `from` if needed.
    pub fn add_transition(&mut self, from: &str, event: &str, to: &str) {
        self.add_state(from).transitions.insert(event, to.to_string());
    }
}
