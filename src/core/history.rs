//! Replayable state history.
//!
//! History is a log of visited state names plus a cursor marking the
//! current position in time. Undo and redo only move the cursor; the
//! engine decides when entries are appended, reused or discarded.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Why an entry was recorded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cause {
    /// Placed at construction
    Seed,
    /// Reached by firing this event
    Event(String),
    /// Reached by a direct jump
    Jump,
}

/// One recorded position in history.
///
/// Equality ignores `recorded_at`, so histories built by the same
/// operations compare equal.
#[derive(Clone, Debug, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The state name recorded at this position
    pub state: String,
    /// What produced the entry
    pub cause: Cause,
    /// When the entry was appended
    pub recorded_at: DateTime<Utc>,
}

impl PartialEq for HistoryEntry {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state && self.cause == other.cause
    }
}

impl HistoryEntry {
    pub fn new(state: impl Into<String>, cause: Cause) -> Self {
        Self {
            state: state.into(),
            cause,
            recorded_at: Utc::now(),
        }
    }
}

/// Ordered log of visited states with a replay cursor.
///
/// The cursor is allowed to run past the end of the log; the engine's
/// append-only policy produces that after a reset. Moving the cursor never
/// indexes out of bounds: a step whose destination does not exist is refused.
///
/// # Example
///
/// ```rust
/// use rewind_fsm::core::{Cause, History, HistoryEntry};
///
/// let mut history = History::seeded(HistoryEntry::new("normal", Cause::Seed));
/// history.append(HistoryEntry::new("hungry", Cause::Event("eat".into())));
/// history.advance();
///
/// assert_eq!(history.path(), vec!["normal", "hungry"]);
/// assert_eq!(history.step_back().map(|e| e.state.as_str()), Some("normal"));
/// assert!(history.step_back().is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
    cursor: usize,
}

impl History {
    /// Create an empty history with the cursor at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a history holding a single entry, cursor on it.
    pub fn seeded(entry: HistoryEntry) -> Self {
        Self {
            entries: vec![entry],
            cursor: 0,
        }
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry under the cursor, if the cursor is in range.
    pub fn current(&self) -> Option<&HistoryEntry> {
        self.entries.get(self.cursor)
    }

    /// Entry a redo would move onto.
    pub fn next_entry(&self) -> Option<&HistoryEntry> {
        self.entries.get(self.cursor + 1)
    }

    /// Recorded state names in log order.
    pub fn path(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.state.as_str()).collect()
    }

    /// Time between the first and last recorded entries.
    ///
    /// Returns `None` for an empty history.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.entries.first()?, self.entries.last()?);
        last.recorded_at
            .signed_duration_since(first.recorded_at)
            .to_std()
            .ok()
    }

    /// Append an entry at the end of the log without moving the cursor.
    pub fn append(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// Move the cursor forward by one, unchecked.
    pub fn advance(&mut self) {
        self.cursor += 1;
    }

    /// Place the cursor on the last entry (zero when empty).
    pub fn move_to_last(&mut self) {
        self.cursor = self.entries.len().saturating_sub(1);
    }

    /// Place the cursor one past the last entry.
    pub fn move_past_end(&mut self) {
        self.cursor = self.entries.len();
    }

    /// Discard every entry after the cursor.
    pub fn truncate_after_cursor(&mut self) {
        self.entries.truncate(self.cursor + 1);
    }

    /// Move the cursor back one entry and return it.
    ///
    /// Returns `None` without moving when the cursor is at zero or the
    /// previous index holds no entry.
    pub fn step_back(&mut self) -> Option<&HistoryEntry> {
        let index = self.cursor.checked_sub(1)?;
        if index >= self.entries.len() {
            return None;
        }
        self.cursor = index;
        self.entries.get(index)
    }

    /// Move the cursor forward one entry and return it.
    ///
    /// Returns `None` without moving when no entry follows the cursor.
    pub fn step_forward(&mut self) -> Option<&HistoryEntry> {
        let index = self.cursor + 1;
        if index >= self.entries.len() {
            return None;
        }
        self.cursor = index;
        self.entries.get(index)
    }

    /// Drop every entry and reset the cursor.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = 0;
    }

    /// Keep only the most recently appended entry and reset the cursor.
    ///
    /// The kept entry is the end of the log, not the entry under the cursor.
    pub fn collapse_to_last(&mut self) {
        if let Some(last) = self.entries.pop() {
            self.entries = vec![last];
        }
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history_of(states: &[&str]) -> History {
        let mut history = History::new();
        for state in states {
            history.append(HistoryEntry::new(*state, Cause::Jump));
        }
        history
    }

    #[test]
    fn new_history_is_empty() {
        let history = History::new();
        assert!(history.is_empty());
        assert_eq!(history.cursor(), 0);
        assert!(history.current().is_none());
        assert!(history.duration().is_none());
    }

    #[test]
    fn seeded_history_points_at_seed() {
        let history = History::seeded(HistoryEntry::new("normal", Cause::Seed));

        assert_eq!(history.len(), 1);
        assert_eq!(history.current().unwrap().state, "normal");
        assert_eq!(history.current().unwrap().cause, Cause::Seed);
        assert!(history.next_entry().is_none());
    }

    #[test]
    fn step_back_stops_at_zero() {
        let mut history = history_of(&["a", "b"]);
        history.advance();

        assert_eq!(history.step_back().unwrap().state, "a");
        assert!(history.step_back().is_none());
        assert_eq!(history.cursor(), 0);
    }

    #[test]
    fn step_forward_stops_at_last_entry() {
        let mut history = history_of(&["a", "b"]);

        assert_eq!(history.step_forward().unwrap().state, "b");
        assert!(history.step_forward().is_none());
        assert_eq!(history.cursor(), 1);
    }

    #[test]
    fn cursor_past_end_refuses_forward_and_steps_back_in_range() {
        let mut history = history_of(&["a"]);
        history.advance();

        assert!(history.current().is_none());
        assert!(history.step_forward().is_none());
        assert_eq!(history.cursor(), 1);
        assert_eq!(history.step_back().unwrap().state, "a");
    }

    #[test]
    fn step_back_refuses_missing_entry() {
        let mut history = History::new();
        history.advance();
        history.advance();

        assert!(history.step_back().is_none());
        assert_eq!(history.cursor(), 2);
    }

    #[test]
    fn truncate_after_cursor_drops_future() {
        let mut history = history_of(&["a", "b", "c"]);
        history.advance();
        history.truncate_after_cursor();

        assert_eq!(history.path(), vec!["a", "b"]);
        assert!(history.next_entry().is_none());
    }

    #[test]
    fn collapse_keeps_end_of_log_not_cursor_entry() {
        let mut history = history_of(&["a", "b", "c"]);
        history.collapse_to_last();

        assert_eq!(history.path(), vec!["c"]);
        assert_eq!(history.cursor(), 0);
    }

    #[test]
    fn collapse_on_empty_history_stays_empty() {
        let mut history = History::new();
        history.collapse_to_last();

        assert!(history.is_empty());
        assert_eq!(history.cursor(), 0);
    }

    #[test]
    fn clear_empties_and_resets_cursor() {
        let mut history = history_of(&["a", "b"]);
        history.move_to_last();
        history.clear();

        assert!(history.is_empty());
        assert_eq!(history.cursor(), 0);
    }

    #[test]
    fn duration_spans_first_to_last() {
        let mut history = history_of(&["a"]);
        assert_eq!(history.duration(), Some(Duration::from_secs(0)));

        std::thread::sleep(Duration::from_millis(10));
        history.append(HistoryEntry::new("b", Cause::Jump));

        assert!(history.duration().unwrap() >= Duration::from_millis(10));
    }

    #[test]
    fn entries_compare_by_state_and_cause() {
        let first = HistoryEntry::new("busy", Cause::Event("study".into()));
        std::thread::sleep(Duration::from_millis(2));
        let second = HistoryEntry::new("busy", Cause::Event("study".into()));

        assert_ne!(first.recorded_at, second.recorded_at);
        assert_eq!(first, second);
        assert_ne!(first, HistoryEntry::new("busy", Cause::Jump));
        assert_ne!(first, HistoryEntry::new("hungry", Cause::Event("study".into())));
    }

    #[test]
    fn history_serializes_correctly() {
        let mut history = history_of(&["a", "b"]);
        history.advance();

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: History = serde_json::from_str(&json).unwrap();

        assert_eq!(history, deserialized);
    }
}
