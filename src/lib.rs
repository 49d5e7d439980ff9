//! Waymark: a synchronous, callback-driven finite state machine
//!
//! A machine holds a fixed set of caller-chosen state labels, a set of
//! directed transitions between them (optionally gated by guard
//! conditions) and ordered callbacks fired when a state is left or
//! entered. Moves are requested explicitly by target state; there is no
//! event alphabet.
//!
//! # Core Concepts
//!
//! - **State**: any `Clone + Eq + Hash` label via the `State` trait
//! - **Transition**: a directed edge with an optional `GuardCondition`
//! - **StateMachine**: evaluates requests, fires leave-then-enter callbacks
//! - **History**: ordered record of successful transitions
//!
//! Requests that no transition covers, and requests a guard rejects, are
//! ignored rather than treated as errors. Only unregistered labels (and an
//! uninitialized machine) produce a [`MachineError`].
//!
//! # Example
//!
//! ```rust
//! use std::sync::atomic::{AtomicBool, Ordering};
//! use std::sync::Arc;
//! use waymark::{StateMachine, Transition};
//!
//! let approved = Arc::new(AtomicBool::new(false));
//! let flag = Arc::clone(&approved);
//!
//! let mut document = StateMachine::new();
//! document
//!     .add_state("draft").unwrap()
//!     .add_state("published").unwrap()
//!     .add_transition(
//!         Transition::new("draft", "published").guard(move || flag.load(Ordering::SeqCst)),
//!     )
//!     .unwrap()
//!     .on_enter_state("published", || println!("document is live"));
//!
//! document.set_state("published").unwrap();
//! assert!(document.is_current_state("draft"));
//!
//! approved.store(true, Ordering::SeqCst);
//! document.set_state("published").unwrap();
//! assert!(document.is_current_state("published"));
//! ```

pub mod builder;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use builder::StateMachineBuilder;
pub use crate::core::{GuardCondition, State, StateHistory, StateTransition, Transition};
pub use machine::{
    DuplicatePolicy, MachineConfig, MachineError, MachineResult, StateMachine, TransitionOutcome,
};
