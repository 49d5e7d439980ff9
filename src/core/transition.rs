//! Directed, optionally guarded edges between states.

use super::guard::GuardCondition;
use super::state::State;

/// A transition from one state to another.
///
/// Endpoints are stored verbatim; whether they are registered states is
/// checked by [`StateMachine::add_transition`](crate::StateMachine::add_transition).
///
/// # Example
///
/// ```rust
/// use waymark::core::Transition;
///
/// let submit = Transition::new("draft", "review");
/// assert!(submit.check());
///
/// let approve = Transition::new("review", "published").guard(|| false);
/// assert!(!approve.check());
/// ```
#[derive(Clone, Debug)]
pub struct Transition<S: State> {
    source: S,
    target: S,
    guard: Option<GuardCondition>,
}

impl<S: State> Transition<S> {
    /// Create an unguarded transition.
    pub fn new(source: S, target: S) -> Self {
        Self {
            source,
            target,
            guard: None,
        }
    }

    /// Attach a guard built from a predicate, replacing any previous guard.
    pub fn guard<F>(self, predicate: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        self.with_guard(GuardCondition::new(predicate))
    }

    /// Attach a pre-built guard, replacing any previous guard.
    pub fn with_guard(mut self, guard: GuardCondition) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Get the state this transition leaves.
    pub fn source_state(&self) -> &S {
        &self.source
    }

    /// Get the state this transition enters.
    pub fn target_state(&self) -> &S {
        &self.target
    }

    /// Whether a guard is attached.
    pub fn is_guarded(&self) -> bool {
        self.guard.is_some()
    }

    /// Check whether this edge ends at `target`.
    pub fn leads_to(&self, target: &S) -> bool {
        self.target == *target
    }

    /// True if unguarded, otherwise the guard's verdict.
    ///
    /// The guard is evaluated with no runtime context.
    pub fn check(&self) -> bool {
        self.guard.as_ref().is_none_or(GuardCondition::evaluate)
    }
}
