//! Builder for constructing state machines.

use crate::core::{State, Transition};
use crate::machine::{Callback, Hook, MachineConfig, MachineResult, StateMachine};
use std::sync::Arc;

/// Builder for constructing state machines with a by-value fluent API.
///
/// Nothing is validated until [`build`](Self::build), which applies the
/// collected pieces in order: states, initial override, transitions,
/// callbacks. The first failing step's error is returned.
///
/// # Example
///
/// ```rust
/// use waymark::builder::StateMachineBuilder;
/// use waymark::Transition;
///
/// let machine = StateMachineBuilder::new()
///     .states(["idle", "running", "stopped"])
///     .transition(Transition::new("idle", "running"))
///     .transition(Transition::new("running", "stopped"))
///     .on_enter("stopped", || println!("stopped"))
///     .build()
///     .unwrap();
///
/// assert!(machine.is_current_state("idle"));
/// ```
pub struct StateMachineBuilder<S: State> {
    config: MachineConfig,
    states: Vec<S>,
    initial: Option<S>,
    transitions: Vec<Transition<S>>,
    callbacks: Vec<(Hook, S, Callback)>,
}

impl<S: State> StateMachineBuilder<S> {
    /// Create an empty builder with the default configuration.
    pub fn new() -> Self {
        Self {
            config: MachineConfig::default(),
            states: Vec::new(),
            initial: None,
            transitions: Vec::new(),
            callbacks: Vec::new(),
        }
    }

    /// Use `config` for the built machine.
    pub fn config(mut self, config: MachineConfig) -> Self {
        self.config = config;
        self
    }

    /// Add a state. The first one added is the default initial state.
    pub fn state(mut self, state: S) -> Self {
        self.states.push(state);
        self
    }

    /// Add several states in order.
    pub fn states<I>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        self.states.extend(states);
        self
    }

    /// Override the initial state (optional).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Add a transition. Endpoints are checked at build time.
    pub fn transition(mut self, transition: Transition<S>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Run `callback` whenever the built machine enters `state`.
    pub fn on_enter<F>(mut self, state: S, callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.callbacks.push((Hook::Enter, state, Arc::new(callback) as Callback));
        self
    }

    /// Run `callback` whenever the built machine leaves `state`.
    pub fn on_leave<F>(mut self, state: S, callback: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.callbacks.push((Hook::Leave, state, Arc::new(callback) as Callback));
        self
    }

    /// Build the state machine.
    pub fn build(self) -> MachineResult<StateMachine<S>> {
        let mut machine = StateMachine::with_config(self.config);
        for state in self.states {
            machine.add_state(state)?;
        }
        if let Some(initial) = self.initial {
            machine.initial(initial)?;
        }
        for transition in self.transitions {
            machine.add_transition(transition)?;
        }
        for (hook, state, callback) in self.callbacks {
            machine.register_callback(hook, state, callback);
        }
        Ok(machine)
    }
}

impl<S: State> Default for StateMachineBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
