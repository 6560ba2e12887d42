//! Table-driven state machine with undo/redo.

use crate::config::{EngineOptions, FsmConfig, HistoryPolicy, HistorySeed};
use crate::core::{Cause, History, HistoryEntry, KnownState};
use crate::error::{FsmError, Result};
use tracing::{debug, trace};

/// Finite-state machine driven by a transition table.
///
/// The engine tracks one current state and a replayable [`History`]. It
/// is a plain owned value with no internal synchronization; share it
/// across threads behind a lock of your own.
///
/// Two validation policies coexist on purpose:
/// - [`change_state`](Self::change_state) only accepts members of the
///   fixed [`KnownState`] catalog and ignores the transition table
/// - [`trigger`](Self::trigger) trusts whatever the transition table names,
///   catalog member or not
///
/// # Example
///
/// ```rust
/// use rewind_fsm::{transition_table, Fsm};
///
/// let config = transition_table! {
///     initial: normal,
///     normal { eat => hungry },
///     hungry { eat => busy },
/// };
///
/// let mut fsm = Fsm::new(Some(config)).unwrap();
/// fsm.trigger("eat").unwrap();
/// assert_eq!(fsm.state(), "hungry");
///
/// assert!(fsm.undo());
/// assert_eq!(fsm.state(), "normal");
/// assert!(fsm.redo());
/// assert_eq!(fsm.state(), "hungry");
/// ```
#[derive(Clone, Debug)]
pub struct Fsm {
    config: FsmConfig,
    options: EngineOptions,
    current: String,
    history: History,
}

impl Fsm {
    /// Create an engine in the configured initial state with default options.
    ///
    /// Fails with [`FsmError::Configuration`] when `config` is `None`.
    pub fn new(config: Option<FsmConfig>) -> Result<Self> {
        Self::with_options(config, EngineOptions::default())
    }

    /// Create an engine with explicit [`EngineOptions`].
    pub fn with_options(config: Option<FsmConfig>, options: EngineOptions) -> Result<Self> {
        let config = config.ok_or_else(|| FsmError::configuration("no configuration supplied"))?;

        // The default seed is the literal catalog state, not `config.initial`.
        let seed = match options.seed {
            HistorySeed::Normal => KnownState::Normal.name().to_string(),
            HistorySeed::Initial => config.initial.clone(),
        };

        debug!(
            initial = %config.initial,
            seed = %seed,
            states = config.states.len(),
            policy = ?options.policy,
            "state machine created"
        );

        Ok(Self {
            current: config.initial.clone(),
            history: History::seeded(HistoryEntry::new(seed, Cause::Seed)),
            config,
            options,
        })
    }

    /// Get the current state name (pure)
    pub fn state(&self) -> &str {
        &self.current
    }

    /// Get the configuration the engine was built with (pure)
    pub fn config(&self) -> &FsmConfig {
        &self.config
    }

    /// Get the engine options (pure)
    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Get the history log and cursor (pure)
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Jump straight to `state`, ignoring the transition table.
    ///
    /// The jump always grows history and moves the cursor onto the new entry.
    /// Fails with [`FsmError::InvalidState`] for names outside the catalog,
    /// leaving the engine untouched.
    pub fn change_state(&mut self, state: &str) -> Result<()> {
        if let Err(err) = state.parse::<KnownState>() {
            debug!(state, "rejected jump to unrecognized state");
            return Err(err);
        }

        self.history.move_past_end();
        self.history.append(HistoryEntry::new(state, Cause::Jump));
        debug!(from = %self.current, to = state, "jumped to state");
        self.current = state.to_string();
        Ok(())
    }

    /// Fire `event` from the current state.
    ///
    /// When the entry a redo would reach already names the target, that
    /// entry is reused instead of appending a duplicate. Otherwise the target
    /// is recorded according to the configured [`HistoryPolicy`].
    ///
    /// Fails with [`FsmError::NoTransition`] when the current state is not
    /// in the table or has no mapping for `event`, leaving the engine untouched.
    pub fn trigger(&mut self, event: &str) -> Result<()> {
        let Some(target) = self.config.target(&self.current, event) else {
            debug!(state = %self.current, event, "no transition for event");
            return Err(FsmError::no_transition(self.current.as_str(), event));
        };
        let target = target.to_string();

        let replays_future = self
            .history
            .next_entry()
            .is_some_and(|entry| entry.state == target);

        if replays_future {
            self.history.advance();
        } else {
            let entry = HistoryEntry::new(target.as_str(), Cause::Event(event.to_string()));
            match self.options.policy {
                HistoryPolicy::AppendOnly => {
                    // Stale future entries stay in the log.
                    self.history.append(entry);
                    self.history.advance();
                }
                HistoryPolicy::TruncateOnDivergence => {
                    self.history.truncate_after_cursor();
                    self.history.append(entry);
                    self.history.move_to_last();
                }
            }
        }

        debug!(
            from = %self.current,
            event,
            to = %target,
            reused = replays_future,
            "transition applied"
        );
        self.current = target;
        Ok(())
    }

    /// List configured states in declaration order.
    ///
    /// With an event, only states that map that event are listed. An empty
    /// event name lists every state, same as `None`.
    pub fn states(&self, event: Option<&str>) -> Vec<&str> {
        match event.filter(|event| !event.is_empty()) {
            None => self.config.state_names().collect(),
            Some(event) => self
                .config
                .states
                .iter()
                .filter(|(_, state)| state.target(event).is_some())
                .map(|(name, _)| name)
                .collect(),
        }
    }

    /// Check whether [`undo`](Self::undo) would succeed (pure)
    pub fn can_undo(&self) -> bool {
        self.history
            .cursor()
            .checked_sub(1)
            .is_some_and(|index| index < self.history.len())
    }

    /// Check whether [`redo`](Self::redo) would succeed (pure)
    pub fn can_redo(&self) -> bool {
        self.history.next_entry().is_some()
    }

    /// Step back one position in history.
    ///
    /// Returns `false` and changes nothing when there is no earlier position.
    pub fn undo(&mut self) -> bool {
        let Some(entry) = self.history.step_back() else {
            trace!(cursor = self.history.cursor(), "nothing to undo");
            return false;
        };
        self.current = entry.state.clone();
        trace!(state = %self.current, cursor = self.history.cursor(), "undo");
        true
    }

    /// Step forward one position in history.
    ///
    /// Returns `false` and changes nothing when there is no later position.
    pub fn redo(&mut self) -> bool {
        let Some(entry) = self.history.step_forward() else {
            trace!(cursor = self.history.cursor(), "nothing to redo");
            return false;
        };
        self.current = entry.state.clone();
        trace!(state = %self.current, cursor = self.history.cursor(), "redo");
        true
    }

    /// Return to the initial state and drop all history.
    ///
    /// History is left empty rather than re-seeded, so until the next
    /// transition or jump the current state has no history entry.
    pub fn reset(&mut self) {
        self.current = self.config.initial.clone();
        self.history.clear();
        debug!(state = %self.current, "state machine reset");
    }

    /// Collapse history to its most recently appended entry.
    ///
    /// The current state is not changed.
    pub fn clear_history(&mut self) {
        self.history.collapse_to_last();
        debug!(kept = ?self.history.current().map(|e| e.state.as_str()), "history cleared");
    }
}
