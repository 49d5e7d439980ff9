//! Guard conditions for controlling state transitions.
//!
//! A guard decouples whether a transition may fire from how it is wired.
//! The engine never passes runtime context to a guard: predicates take no
//! arguments and whatever they consult must be captured by the closure.

use std::fmt;
use std::sync::Arc;

/// Predicate that determines whether a transition can fire.
///
/// The wrapped predicate is mandatory; there is no way to build an empty
/// guard. A panic inside the predicate unwinds through [`evaluate`] and
/// out of [`StateMachine::set_state`](crate::StateMachine::set_state)
/// unchanged.
///
/// [`evaluate`]: GuardCondition::evaluate
///
/// # Example
///
/// ```rust
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::sync::Arc;
/// use waymark::core::GuardCondition;
///
/// let paid = Arc::new(AtomicBool::new(false));
/// let flag = Arc::clone(&paid);
/// let is_paid = GuardCondition::new(move || flag.load(Ordering::SeqCst));
///
/// assert!(!is_paid.evaluate());
/// paid.store(true, Ordering::SeqCst);
/// assert!(is_paid.evaluate());
/// ```
#[derive(Clone)]
pub struct GuardCondition {
    predicate: Arc<dyn Fn() -> bool + Send + Sync>,
}

impl GuardCondition {
    /// Wrap a predicate.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
        }
    }

    /// Invoke the predicate and return its result verbatim.
    pub fn evaluate(&self) -> bool {
        (self.predicate)()
    }
}

impl fmt::Debug for GuardCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GuardCondition").finish_non_exhaustive()
    }
}
