//! Per-session chart selections.
//!
//! Each session owns one [`SelectionState`]: the line chart's category and
//! the scatter chart's value range. Selections live in memory only and are
//! dropped when the session ends.

use std::collections::HashMap;
use std::fmt;

use uuid::Uuid;

/// Category chosen for the line chart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySlot {
    selected: Option<String>,
}

impl CategorySlot {
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Resolve the selection against the categories currently in the data.
    ///
    /// Falls back to the first candidate when nothing was chosen yet or the
    /// prior choice is no longer present. `None` only when there are no
    /// candidates, in which case the slot is left as it was.
    pub fn get_or_init(&mut self, candidates: &[String]) -> Option<String> {
        if let Some(prior) = &self.selected
            && candidates.contains(prior)
        {
            return Some(prior.clone());
        }

        let first = candidates.first().cloned()?;
        self.selected = Some(first.clone());
        Some(first)
    }

    pub fn select(&mut self, category: impl Into<String>) {
        self.selected = Some(category.into());
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }
}

/// Inclusive `(low, high)` range chosen for the scatter chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RangeSlot {
    selected: Option<(i64, i64)>,
}

impl RangeSlot {
    pub fn selected(&self) -> Option<(i64, i64)> {
        self.selected
    }

    /// The stored range, or the full observed range on first use.
    ///
    /// A stored range is returned verbatim even when the data has since
    /// shrunk past it; filtering then simply finds nothing.
    pub fn get_or_init(&mut self, observed_min: i64, observed_max: i64) -> (i64, i64) {
        *self.selected.get_or_insert((observed_min, observed_max))
    }

    pub fn select(&mut self, low: i64, high: i64) {
        self.selected = Some((low, high));
    }

    /// Move the lower handle, pushing the upper one along when crossed.
    pub fn move_low(&mut self, low: i64) {
        let (_, high) = self.selected.unwrap_or((low, low));
        self.selected = Some((low, high.max(low)));
    }

    /// Move the upper handle, pushing the lower one along when crossed.
    pub fn move_high(&mut self, high: i64) {
        let (low, _) = self.selected.unwrap_or((high, high));
        self.selected = Some((low.min(high), high));
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub category: CategorySlot,
    pub range: RangeSlot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Selection states keyed by session. Sessions never see each other's state.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: HashMap<SessionId, SelectionState>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self) -> SessionId {
        let id = SessionId::new();
        self.sessions.insert(id, SelectionState::default());
        tracing::info!(session = %id, "session opened");
        id
    }

    /// State for `id`, created with defaults on first encounter.
    pub fn session(&mut self, id: SessionId) -> &mut SelectionState {
        self.sessions.entry(id).or_default()
    }

    pub fn get(&self, id: SessionId) -> Option<&SelectionState> {
        self.sessions.get(&id)
    }

    /// Discard the session's selections.
    pub fn end(&mut self, id: SessionId) -> Option<SelectionState> {
        let state = self.sessions.remove(&id);
        if state.is_some() {
            tracing::info!(session = %id, "session ended");
        }
        state
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
