//! The synchronous, callback-driven state machine.

use crate::core::{State, StateHistory, Transition};
use crate::machine::callbacks::{Callback, CallbackRegistry, Hook};
use crate::machine::config::{DuplicatePolicy, MachineConfig};
use crate::machine::error::{MachineError, MachineResult};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

/// What a transition request did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransitionOutcome<S> {
    /// The machine moved and callbacks fired
    Transitioned { from: S, to: S },

    /// No transition is configured from the current state to the target
    NoTransition { from: S, to: S },

    /// The first matching transition's guard said no
    GuardRejected { from: S, to: S },
}

impl<S> TransitionOutcome<S> {
    /// True if the machine moved.
    pub fn is_transitioned(&self) -> bool {
        matches!(self, Self::Transitioned { .. })
    }
}

/// A finite state machine over caller-chosen labels.
///
/// States and transitions are registered up front and never removed.
/// The current state only changes through [`set_state`] (guarded, fires
/// callbacks) or [`initial`] (administrative override, fires nothing).
///
/// Everything runs on the caller's thread. Guards and callbacks are
/// `Send + Sync`, so a machine can be shared behind a `Mutex`, but the
/// engine itself does no locking. A callback cannot call back into the
/// machine that is running it unless the embedder hands it shared access
/// (for example through `Arc<Mutex<StateMachine<_>>>`, which would
/// deadlock); the resulting ordering is then the embedder's problem.
///
/// [`set_state`]: StateMachine::set_state
/// [`initial`]: StateMachine::initial
///
/// # Example
///
/// ```rust
/// use waymark::{MachineError, StateMachine, Transition};
///
/// # fn main() -> Result<(), MachineError> {
/// let mut order = StateMachine::new();
/// order
///     .add_state("pending")?
///     .add_state("paid")?
///     .add_state("shipped")?
///     .add_transition(Transition::new("pending", "paid"))?
///     .add_transition(Transition::new("paid", "shipped"))?;
///
/// order.set_state("shipped")?; // not configured from "pending", ignored
/// assert!(order.is_current_state("pending"));
///
/// order.set_state("paid")?.set_state("shipped")?;
/// assert_eq!(order.current_state()?, &"shipped");
/// # Ok(())
/// # }
/// ```
pub struct StateMachine<S: State> {
    config: MachineConfig,
    states: Vec<S>,
    initial: Option<S>,
    current: Option<S>,
    transitions: HashMap<S, Vec<Transition<S>>>,
    callbacks: CallbackRegistry<S>,
    history: StateHistory<S>,
}

impl<S: State> StateMachine<S> {
    /// Create an uninitialized machine with the default configuration.
    pub fn new() -> Self {
        Self::with_config(MachineConfig::default())
    }

    /// Create an uninitialized machine with the given configuration.
    pub fn with_config(config: MachineConfig) -> Self {
        Self {
            history: StateHistory::with_limit(config.history_limit),
            config,
            states: Vec::new(),
            initial: None,
            current: None,
            transitions: HashMap::new(),
            callbacks: CallbackRegistry::new(),
        }
    }

    /// Get the configuration this machine was built with.
    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// Register a state.
    ///
    /// The first state ever registered becomes both the initial and the
    /// current state. Re-registering a label fails with
    /// [`MachineError::DuplicateState`] unless the machine was configured
    /// with [`DuplicatePolicy::Allow`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use waymark::{MachineError, StateMachine};
    ///
    /// let mut machine = StateMachine::new();
    /// machine.add_state("idle").unwrap().add_state("busy").unwrap();
    /// assert_eq!(machine.initial_state(), Some(&"idle"));
    ///
    /// let err = machine.add_state("idle").unwrap_err();
    /// assert!(matches!(err, MachineError::DuplicateState { .. }));
    /// ```
    pub fn add_state(&mut self, state: S) -> MachineResult<&mut Self> {
        if self.config.duplicate_states == DuplicatePolicy::Reject && self.has_state(&state) {
            return Err(MachineError::DuplicateState {
                state: state.name().to_string(),
            });
        }

        tracing::debug!(state = state.name(), "Registered state");
        if self.current.is_none() {
            self.initial = Some(state.clone());
            self.current = Some(state.clone());
        }
        self.states.push(state);
        Ok(self)
    }

    /// Re-point both the initial and the current state.
    ///
    /// This is an override, not a transition: no guard is consulted, no
    /// callback fires and nothing is recorded in the history.
    pub fn initial(&mut self, state: S) -> MachineResult<&mut Self> {
        if !self.is_initialized() {
            return Err(MachineError::Uninitialized);
        }
        if !self.has_state(&state) {
            return Err(MachineError::UnknownState {
                state: state.name().to_string(),
            });
        }

        tracing::debug!(state = state.name(), "Initial state overridden");
        self.initial = Some(state.clone());
        self.current = Some(state);
        Ok(self)
    }

    /// Whether at least one state has been registered.
    pub fn is_initialized(&self) -> bool {
        self.current.is_some()
    }

    /// Get the current state.
    ///
    /// Fails with [`MachineError::Uninitialized`] before any state is registered.
    pub fn current_state(&self) -> MachineResult<&S> {
        self.current.as_ref().ok_or(MachineError::Uninitialized)
    }

    /// Get the initial state, if any state has been registered.
    pub fn initial_state(&self) -> Option<&S> {
        self.initial.as_ref()
    }

    /// Registered states in registration order.
    pub fn states(&self) -> &[S] {
        &self.states
    }

    /// Get the history of successful transitions.
    pub fn history(&self) -> &StateHistory<S> {
        &self.history
    }

    /// Check whether `state` is the current state.
    pub fn is_current_state<Q>(&self, state: &Q) -> bool
    where
        S: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.current
            .as_ref()
            .is_some_and(|c| <S as Borrow<Q>>::borrow(c) == state)
    }

    /// Check whether `state` is the initial state.
    pub fn is_initial_state<Q>(&self, state: &Q) -> bool
    where
        S: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.initial
            .as_ref()
            .is_some_and(|i| <S as Borrow<Q>>::borrow(i) == state)
    }

    /// Check whether `state` is registered.
    pub fn has_state<Q>(&self, state: &Q) -> bool
    where
        S: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.states
            .iter()
            .any(|s| <S as Borrow<Q>>::borrow(s) == state)
    }

    /// Register a transition between two already registered states.
    ///
    /// Transitions sharing a source are kept in registration order, which
    /// is the order [`set_state`](Self::set_state) searches them in.
    pub fn add_transition(&mut self, transition: Transition<S>) -> MachineResult<&mut Self> {
        let (from, to) = (transition.source_state(), transition.target_state());
        if let Some(missing) = [from, to].into_iter().find(|s| !self.has_state(*s)) {
            return Err(MachineError::UnknownTransitionEndpoint {
                from: from.name().to_string(),
                to: to.name().to_string(),
                missing: missing.name().to_string(),
            });
        }

        tracing::debug!(
            from = from.name(),
            to = to.name(),
            guarded = transition.is_guarded(),
            "Registered transition"
        );
        self.transitions
            .entry(from.clone())
            .or_default()
            .push(transition);
        Ok(self)
    }

    /// Transitions leaving `state`, in registration order.
    pub fn transitions_from<Q>(&self, state: &Q) -> &[Transition<S>]
    where
        S: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.transitions
            .get(state)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Check whether any transition leaves `state`.
    pub fn has_transitions_from<Q>(&self, state: &Q) -> bool
    where
        S: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        !self.transitions_from(state).is_empty()
    }

    /// Check whether some transition leads from `source` to `target`.
    ///
    /// Guards are not evaluated.
    pub fn has_transition<Q>(&self, source: &Q, target: &Q) -> bool
    where
        S: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find_transition(source, target).is_some()
    }

    /// Check whether `set_state(target)` would move the machine right now.
    ///
    /// Evaluates the guard of the first matching transition, so any side
    /// effect of the guard happens here too. Nothing else runs.
    pub fn can_transition_to<Q>(&self, target: &Q) -> bool
    where
        S: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(current) = self.current.as_ref() else {
            return false;
        };
        self.find_transition(<S as Borrow<Q>>::borrow(current), target)
            .is_some_and(Transition::check)
    }

    /// Distinct targets reachable in one step from the current state.
    ///
    /// Ordered by first registration; guards are not evaluated.
    pub fn available_targets(&self) -> Vec<&S> {
        let Some(current) = self.current.as_ref() else {
            return Vec::new();
        };
        let mut targets: Vec<&S> = Vec::new();
        for transition in self.transitions_from(current) {
            let target = transition.target_state();
            if !targets.contains(&target) {
                targets.push(target);
            }
        }
        targets
    }

    /// Run `callback` every time a transition enters `state`.
    ///
    /// Callbacks for one state run in registration order. Registering for
    /// a label that is not (yet) a state is allowed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::sync::atomic::{AtomicUsize, Ordering};
    /// use std::sync::Arc;
    /// use waymark::{StateMachine, Transition};
    ///
    /// let entered = Arc::new(AtomicUsize::new(0));
    /// let counter = Arc::clone(&entered);
    ///
    /// let mut machine = StateMachine::new();
    /// machine
    ///     .add_state("off").unwrap()
    ///     .add_state("on").unwrap()
    ///     .add_transition(Transition::new("off", "on")).unwrap()
    ///     .on_enter_state("on", move || {
    ///         counter.fetch_add(1, Ordering::SeqCst);
    ///     });
    ///
    /// machine.set_state("on").unwrap();
    /// assert_eq!(entered.load(Ordering::SeqCst), 1);
    /// ```
    pub fn on_enter_state<F>(&mut self, state: S, callback: F) -> &mut Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.register_callback(Hook::Enter, state, Arc::new(callback))
    }

    /// Run `callback` every time a transition leaves `state`.
    pub fn on_leave_state<F>(&mut self, state: S, callback: F) -> &mut Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.register_callback(Hook::Leave, state, Arc::new(callback))
    }

    pub(crate) fn register_callback(
        &mut self,
        hook: Hook,
        state: S,
        callback: Callback,
    ) -> &mut Self {
        tracing::debug!(state = state.name(), hook = ?hook, "Registered callback");
        self.callbacks.register(hook, state, callback);
        self
    }

    /// Request a move to `target` and report what happened.
    ///
    /// 1. Unregistered `target` fails with [`MachineError::UnknownState`].
    /// 2. Without a transition from the current state to `target`, nothing
    ///    happens.
    /// 3. Otherwise the first such transition (registration order) is
    ///    checked; a rejecting guard leaves everything untouched.
    /// 4. On success the current state's leave callbacks run, the current
    ///    state becomes `target`, then `target`'s enter callbacks run. A
    ///    self-transition runs both lists.
    ///
    /// Panics raised by guards or callbacks are not caught.
    ///
    /// # Example
    ///
    /// ```rust
    /// use waymark::{StateMachine, Transition, TransitionOutcome};
    ///
    /// let mut machine = StateMachine::new();
    /// machine
    ///     .add_state("locked").unwrap()
    ///     .add_state("open").unwrap()
    ///     .add_transition(Transition::new("locked", "open").guard(|| false))
    ///     .unwrap();
    ///
    /// assert_eq!(
    ///     machine.try_transition("open").unwrap(),
    ///     TransitionOutcome::GuardRejected { from: "locked", to: "open" }
    /// );
    /// assert_eq!(
    ///     machine.try_transition("locked").unwrap(),
    ///     TransitionOutcome::NoTransition { from: "locked", to: "locked" }
    /// );
    /// ```
    pub fn try_transition(&mut self, target: S) -> MachineResult<TransitionOutcome<S>> {
        if !self.has_state(&target) {
            return Err(MachineError::UnknownState {
                state: target.name().to_string(),
            });
        }
        let from = self.current_state()?.clone();

        let allowed = match self.find_transition(&from, &target) {
            None => {
                tracing::trace!(
                    from = from.name(),
                    to = target.name(),
                    "No transition configured, ignoring"
                );
                return Ok(TransitionOutcome::NoTransition { from, to: target });
            }
            Some(transition) => transition.check(),
        };

        if !allowed {
            tracing::trace!(
                from = from.name(),
                to = target.name(),
                "Guard rejected transition"
            );
            return Ok(TransitionOutcome::GuardRejected { from, to: target });
        }

        let left = self.callbacks.fire(Hook::Leave, &from);
        self.current = Some(target.clone());
        if self.config.record_history {
            self.history.record(from.clone(), target.clone());
        }
        let entered = self.callbacks.fire(Hook::Enter, &target);

        tracing::debug!(
            from = from.name(),
            to = target.name(),
            leave_callbacks = left,
            enter_callbacks = entered,
            "State transition complete"
        );
        Ok(TransitionOutcome::Transitioned { from, to: target })
    }

    /// Fluent form of [`try_transition`](Self::try_transition).
    ///
    /// Unconfigured moves and guard rejections are silently ignored; only
    /// an unregistered `target` is an error.
    pub fn set_state(&mut self, target: S) -> MachineResult<&mut Self> {
        self.try_transition(target)?;
        Ok(self)
    }

    fn find_transition<Q>(&self, source: &Q, target: &Q) -> Option<&Transition<S>>
    where
        S: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if !self.has_state(source) || !self.has_state(target) {
            return None;
        }
        self.transitions_from(source)
            .iter()
            .find(|t| <S as Borrow<Q>>::borrow(t.target_state()) == target)
    }
}

impl<S: State> Default for StateMachine<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> fmt::Debug for StateMachine<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachine")
            .field("states", &self.states)
            .field("initial", &self.initial)
            .field("current", &self.current)
            .field(
                "transitions",
                &self.transitions.values().map(Vec::len).sum::<usize>(),
            )
            .field("history", &self.history.len())
            .finish()
    }
}
