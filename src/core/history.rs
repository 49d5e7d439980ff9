//! Transition history tracking.
//!
//! Every successful guarded transition is appended to the machine's
//! history. Administrative overrides through
//! [`StateMachine::initial`](crate::StateMachine::initial) are not
//! transitions and never show up here.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single successful transition.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateTransition<S> {
    /// The state that was left
    pub from: S,
    /// The state that was entered
    pub to: S,
    /// When the transition completed
    pub timestamp: DateTime<Utc>,
    /// Zero-based position among every transition ever recorded,
    /// including ones since evicted
    pub sequence: u64,
}

/// Ordered log of transitions, optionally capped.
///
/// With a limit, recording past the cap evicts the oldest entry. Sequence
/// numbers keep counting across evictions, so the first retained entry
/// tells how many were dropped.
///
/// # Example
///
/// ```rust
/// use waymark::core::StateHistory;
///
/// let mut history = StateHistory::with_limit(Some(2));
/// history.record("draft", "review");
/// history.record("review", "published");
/// history.record("published", "archived");
///
/// assert_eq!(history.len(), 2);
/// assert_eq!(history.path(), vec![&"review", &"published", &"archived"]);
/// assert_eq!(history.transitions().front().unwrap().sequence, 1);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StateHistory<S> {
    transitions: VecDeque<StateTransition<S>>,
    limit: Option<usize>,
    recorded: u64,
}

impl<S> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> StateHistory<S> {
    /// Create an empty, uncapped history.
    pub fn new() -> Self {
        Self::with_limit(None)
    }

    /// Create an empty history keeping at most `limit` entries.
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            transitions: VecDeque::new(),
            limit,
            recorded: 0,
        }
    }

    /// Get retained transitions, oldest first.
    pub fn transitions(&self) -> &VecDeque<StateTransition<S>> {
        &self.transitions
    }

    /// Number of retained transitions.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Check if no transitions are retained.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Get the configured cap, if any.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Total transitions ever recorded, evicted ones included.
    pub fn total_recorded(&self) -> u64 {
        self.recorded
    }

    /// Calculate duration from the oldest to the newest retained transition.
    ///
    /// Returns `None` if nothing is retained.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.front()?, self.transitions.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }
}

impl<S: State> StateHistory<S> {
    /// Append a transition stamped with the current time.
    ///
    /// A zero limit keeps nothing but still advances the sequence.
    pub fn record(&mut self, from: S, to: S) {
        let sequence = self.recorded;
        self.recorded += 1;
        if self.limit == Some(0) {
            return;
        }
        if let Some(limit) = self.limit {
            while self.transitions.len() >= limit {
                self.transitions.pop_front();
            }
        }
        self.transitions.push_back(StateTransition {
            from,
            to,
            timestamp: Utc::now(),
            sequence,
        });
    }

    /// Get the path of states traversed by the retained transitions.
    ///
    /// The first element is the `from` of the oldest retained transition,
    /// followed by the `to` of every retained transition. Empty when
    /// nothing is retained.
    pub fn path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.front() {
            path.push(&first.from);
        }
        path.extend(self.transitions.iter().map(|t| &t.to));
        path
    }
}
