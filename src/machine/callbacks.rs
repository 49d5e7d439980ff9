//! Per-state enter/leave callback lists.

use crate::core::State;
use std::collections::HashMap;
use std::sync::Arc;

/// Zero-argument side effect fired on state entry or exit.
pub(crate) type Callback = Arc<dyn Fn() + Send + Sync>;

/// Which side of a state a callback is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Hook {
    Enter,
    Leave,
}

/// Ordered callback lists keyed by state label.
///
/// Lists only grow. Nothing registered here runs until a transition
/// fires it.
pub(crate) struct CallbackRegistry<S: State> {
    enter: HashMap<S, Vec<Callback>>,
    leave: HashMap<S, Vec<Callback>>,
}

impl<S: State> CallbackRegistry<S> {
    pub(crate) fn new() -> Self {
        Self {
            enter: HashMap::new(),
            leave: HashMap::new(),
        }
    }

    fn table(&self, hook: Hook) -> &HashMap<S, Vec<Callback>> {
        match hook {
            Hook::Enter => &self.enter,
            Hook::Leave => &self.leave,
        }
    }

    pub(crate) fn register(&mut self, hook: Hook, state: S, callback: Callback) {
        let table = match hook {
            Hook::Enter => &mut self.enter,
            Hook::Leave => &mut self.leave,
        };
        table.entry(state).or_default().push(callback);
    }

    /// Run every callback for `state` in registration order, returning how
    /// many ran.
    pub(crate) fn fire(&self, hook: Hook, state: &S) -> usize {
        let callbacks = self
            .table(hook)
            .get(state)
            .map(Vec::as_slice)
            .unwrap_or_default();
        for callback in callbacks {
            callback();
        }
        callbacks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn logger(log: &Arc<Mutex<Vec<&'static str>>>, entry: &'static str) -> Callback {
        let log = Arc::clone(log);
        Arc::new(move || log.lock().unwrap().push(entry))
    }

    #[test]
    fn fires_in_registration_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut registry = CallbackRegistry::new();
        registry.register(Hook::Enter, "B", logger(&log, "first"));
        registry.register(Hook::Enter, "B", logger(&log, "second"));

        assert_eq!(registry.fire(Hook::Enter, &"B"), 2);
        assert_eq!(*log.lock().unwrap(), vec!["first", "second"]);
    }

    #[test]
    fn hooks_are_kept_apart() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut registry = CallbackRegistry::new();
        registry.register(Hook::Enter, "A", logger(&log, "enter"));
        registry.register(Hook::Leave, "A", logger(&log, "leave"));

        assert_eq!(registry.fire(Hook::Leave, &"A"), 1);
        assert_eq!(*log.lock().unwrap(), vec!["leave"]);

        assert_eq!(registry.fire(Hook::Enter, &"A"), 1);
        assert_eq!(*log.lock().unwrap(), vec!["leave", "enter"]);
    }

    #[test]
    fn unknown_state_fires_nothing() {
        let registry: CallbackRegistry<&'static str> = CallbackRegistry::new();
        assert_eq!(registry.fire(Hook::Enter, &"Z"), 0);
    }
}
