//! Engine options controlling how history is seeded and extended.

use serde::{Deserialize, Serialize};

/// How a trigger that diverges from the recorded future extends history.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistoryPolicy {
    /// History is an append-only log. A divergent trigger appends its target
    /// after the stale future entries and still advances the cursor by one,
    /// so later redos can land on entries no transition produced.
    #[default]
    AppendOnly,

    /// A divergent trigger discards every entry after the cursor before
    /// appending, and the cursor lands on the new entry.
    TruncateOnDivergence,
}

/// Which state name seeds history when the engine is created.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistorySeed {
    /// Seed with the literal `"normal"` catalog state, whatever the
    /// configured initial state is.
    #[default]
    Normal,

    /// Seed with the configured initial state.
    Initial,
}

/// Tunables for an [`Fsm`](crate::engine::Fsm).
///
/// The defaults reproduce the engine's long-standing behavior.
///
/// # Example
///
/// ```rust
/// use rewind_fsm::config::{EngineOptions, HistoryPolicy, HistorySeed};
///
/// let options = EngineOptions::new()
///     .history_policy(HistoryPolicy::TruncateOnDivergence)
///     .history_seed(HistorySeed::Initial);
///
/// assert_eq!(options.policy, HistoryPolicy::TruncateOnDivergence);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineOptions {
    #[serde(default)]
    pub policy: HistoryPolicy,
    #[serde(default)]
    pub seed: HistorySeed,
}

impl EngineOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how divergent triggers extend history
    pub fn history_policy(mut self, policy: HistoryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set what seeds history at construction
    pub fn history_seed(mut self, seed: HistorySeed) -> Self {
        self.seed = seed;
        self
    }
}
