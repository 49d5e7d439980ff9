//! State labels.
//!
//! A state is an opaque, caller-chosen label. The machine only ever
//! compares labels for equality and uses them as lookup keys, so any
//! value type with by-value equality can serve as one.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine labels.
///
/// Implemented for `String` and `&'static str`, and generated for plain
/// enums by [`state_enum!`](crate::state_enum).
///
/// # Required Traits
///
/// - `Clone`: labels are copied into transitions and history records
/// - `Eq` + `Hash`: labels key the transition and callback tables
/// - `Debug`: labels are debuggable for diagnostics
///
/// # Example
///
/// ```rust
/// use waymark::core::State;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// impl State for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
/// }
///
/// assert_eq!(Door::Open.name(), "Open");
/// assert_eq!("draft".name(), "draft");
/// ```
pub trait State: Clone + Eq + Hash + Debug + Send + Sync {
    /// Display label used in errors and log events.
    fn name(&self) -> &str;
}

impl State for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}

impl State for &'static str {
    fn name(&self) -> &str {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Eq, Hash, Debug)]
    enum TestState {
        Draft,
        Published,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Draft => "Draft",
                Self::Published => "Published",
            }
        }
    }

    #[test]
    fn string_labels_name_themselves() {
        assert_eq!(String::from("pending").name(), "pending");
        assert_eq!("shipped".name(), "shipped");
    }

    #[test]
    fn enum_labels_use_their_name() {
        assert_eq!(TestState::Draft.name(), "Draft");
        assert_eq!(TestState::Published.name(), "Published");
    }

    #[test]
    fn labels_compare_by_value() {
        let a = String::from("A");
        let also_a = "A".to_string();
        assert_eq!(a, also_a);
        assert_ne!(TestState::Draft, TestState::Published);
    }
}
