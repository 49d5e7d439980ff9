//! Macros for ergonomic state declaration.

/// Declare a plain enum usable as a state label.
///
/// Derives `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`, `Debug` and the serde
/// traits, and implements [`State`](crate::core::State) with each variant's
/// identifier as its name. The calling crate needs `serde` with the
/// `derive` feature.
///
/// # Example
///
/// ```
/// use waymark::core::State;
/// use waymark::state_enum;
///
/// state_enum! {
///     pub enum Connection {
///         Disconnected,
///         Connecting,
///         Connected,
///     }
/// }
///
/// assert_eq!(Connection::Connecting.name(), "Connecting");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            Debug,
            serde::Serialize,
            serde::Deserialize
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{State, Transition};
    use crate::StateMachine;

    state_enum! {
        enum TestState {
            Initial,
            Processing,
            Complete,
        }
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(TestState::Initial.name(), "Initial");
        assert_eq!(TestState::Processing.name(), "Processing");
        assert_eq!(TestState::Complete.name(), "Complete");
    }

    #[test]
    fn state_enum_supports_visibility() {
        state_enum! {
            /// Doc comments pass through.
            pub enum PublicState {
                A,
                B,
            }
        }

        assert_ne!(PublicState::A, PublicState::B);
    }

    #[test]
    fn state_enum_serializes_as_variant_name() {
        let json = serde_json::to_string(&TestState::Processing).unwrap();
        assert_eq!(json, "\"Processing\"");
    }

    #[test]
    fn generated_enum_drives_a_machine() {
        let mut machine = StateMachine::new();
        machine
            .add_state(TestState::Initial)
            .unwrap()
            .add_state(TestState::Processing)
            .unwrap()
            .add_transition(Transition::new(TestState::Initial, TestState::Processing))
            .unwrap();

        machine.set_state(TestState::Processing).unwrap();
        assert!(machine.is_current_state(&TestState::Processing));
    }
}
