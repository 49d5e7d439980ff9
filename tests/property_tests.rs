//! Property-based tests for the state machine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated machines and request sequences.

use proptest::prelude::*;
use std::sync::{Arc, Mutex};
use waymark::{MachineError, StateMachine, Transition};

const LABELS: [&str; 5] = ["A", "B", "C", "D", "E"];

prop_compose! {
    fn arbitrary_label()(index in 0..LABELS.len()) -> &'static str {
        LABELS[index]
    }
}

prop_compose! {
    fn arbitrary_edge()(
        from in arbitrary_label(),
        to in arbitrary_label(),
        open in any::<bool>(),
    ) -> (&'static str, &'static str, bool) {
        (from, to, open)
    }
}

fn build(edges: &[(&'static str, &'static str, bool)]) -> StateMachine<&'static str> {
    let mut machine = StateMachine::new();
    for label in LABELS {
        machine.add_state(label).unwrap();
    }
    for &(from, to, open) in edges {
        machine
            .add_transition(Transition::new(from, to).guard(move || open))
            .unwrap();
    }
    machine
}

proptest! {
    #[test]
    fn first_registered_state_stays_initial(extra in prop::collection::vec(arbitrary_label(), 0..10)) {
        let mut machine = StateMachine::new();
        machine.add_state("root").unwrap();
        for label in extra {
            let _ = machine.add_state(label);
        }

        prop_assert!(machine.is_initial_state("root"));
        prop_assert_eq!(machine.current_state(), Ok(&"root"));
    }

    #[test]
    fn current_state_is_always_registered(
        edges in prop::collection::vec(arbitrary_edge(), 0..15),
        requests in prop::collection::vec(arbitrary_label(), 0..20),
    ) {
        let mut machine = build(&edges);

        for target in requests {
            machine.set_state(target).unwrap();
            let current = *machine.current_state().unwrap();
            prop_assert!(machine.has_state(current));
        }
    }

    #[test]
    fn first_matching_edge_decides(
        edges in prop::collection::vec(arbitrary_edge(), 0..15),
        target in arbitrary_label(),
    ) {
        let mut machine = build(&edges);
        let first = edges
            .iter()
            .find(|(from, to, _)| *from == "A" && *to == target)
            .map(|&(_, _, open)| open);

        machine.set_state(target).unwrap();

        let expected = if first == Some(true) { target } else { "A" };
        prop_assert_eq!(machine.current_state(), Ok(&expected));
    }

    #[test]
    fn has_transition_matches_registered_edges(
        edges in prop::collection::vec(arbitrary_edge(), 0..15),
        from in arbitrary_label(),
        to in arbitrary_label(),
    ) {
        let machine = build(&edges);
        let registered = edges.iter().any(|(f, t, _)| *f == from && *t == to);

        prop_assert_eq!(machine.has_transition(from, to), registered);
        prop_assert_eq!(
            machine.has_transitions_from(from),
            edges.iter().any(|(f, _, _)| *f == from)
        );
    }

    #[test]
    fn history_mirrors_callback_log(
        edges in prop::collection::vec(arbitrary_edge(), 0..15),
        requests in prop::collection::vec(arbitrary_label(), 0..20),
    ) {
        let log: Arc<Mutex<Vec<String>>> = Arc::default();
        let mut machine = build(&edges);
        for label in LABELS {
            let (leave, enter) = (Arc::clone(&log), Arc::clone(&log));
            machine
                .on_leave_state(label, move || leave.lock().unwrap().push(format!("leave {label}")))
                .on_enter_state(label, move || enter.lock().unwrap().push(format!("enter {label}")));
        }

        for target in requests {
            machine.set_state(target).unwrap();
        }

        let expected: Vec<String> = machine
            .history()
            .transitions()
            .iter()
            .flat_map(|t| [format!("leave {}", t.from), format!("enter {}", t.to)])
            .collect();
        prop_assert_eq!(&*log.lock().unwrap(), &expected);
    }

    #[test]
    fn unknown_targets_never_mutate(
        edges in prop::collection::vec(arbitrary_edge(), 0..15),
        requests in prop::collection::vec(arbitrary_label(), 0..10),
    ) {
        let mut machine = build(&edges);
        for target in requests {
            machine.set_state(target).unwrap();
        }
        let before = *machine.current_state().unwrap();
        let recorded = machine.history().len();

        let result = machine.set_state("Z").map(|_| ());

        prop_assert_eq!(result, Err(MachineError::UnknownState { state: "Z".to_string() }));
        prop_assert_eq!(machine.current_state(), Ok(&before));
        prop_assert_eq!(machine.history().len(), recorded);
    }
}
