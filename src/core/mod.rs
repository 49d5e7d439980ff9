//! Core state machine types.
//!
//! This module contains the building blocks the machine is wired from:
//! - State labels via the `State` trait
//! - Guard conditions gating transitions
//! - Directed transitions between states
//! - Capped, ordered transition history

mod guard;
mod history;
mod state;
mod transition;

pub use guard::GuardCondition;
pub use history::{StateHistory, StateTransition};
pub use state::State;
pub use transition::Transition;
