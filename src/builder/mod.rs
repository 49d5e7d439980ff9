//! Builder API for ergonomic state machine construction.
//!
//! This module provides a by-value fluent builder and the `state_enum!`
//! macro for declaring enum state labels with minimal boilerplate.

pub mod machine;
pub mod macros;

pub use machine::StateMachineBuilder;
