//! The state machine and its supporting pieces.
//!
//! # Key Concepts
//!
//! - **StateMachine**: owns states, transitions and callbacks; evaluates
//!   transition requests
//! - **Callbacks**: ordered enter/leave side effects per state
//! - **Config**: duplicate-label policy, history recording and its cap
//!
//! Everything here is synchronous. Guards and callbacks run to completion
//! on the caller's thread before the requesting call returns.

mod callbacks;
mod config;
mod error;
mod state_machine;

pub(crate) use callbacks::{Callback, Hook};
pub use config::{DuplicatePolicy, MachineConfig, DEFAULT_HISTORY_LIMIT};
pub use error::{MachineError, MachineResult};
pub use state_machine::{StateMachine, TransitionOutcome};
