//! Machine configuration.

use serde::{Deserialize, Serialize};

/// Transitions a machine's history retains unless configured otherwise.
pub const DEFAULT_HISTORY_LIMIT: usize = 1024;

/// What `add_state` does with a label that is already registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Fail with [`MachineError::DuplicateState`](crate::MachineError::DuplicateState)
    #[default]
    Reject,

    /// Append the label again. Lookups cannot tell the copies apart.
    Allow,
}

/// Behaviour switches for a [`StateMachine`](crate::StateMachine).
///
/// Every field has a default, so partial documents deserialize:
///
/// ```rust
/// use waymark::machine::DEFAULT_HISTORY_LIMIT;
/// use waymark::{DuplicatePolicy, MachineConfig};
///
/// let config: MachineConfig = serde_json::from_str(r#"{"duplicate_states":"allow"}"#).unwrap();
/// assert_eq!(config.duplicate_states, DuplicatePolicy::Allow);
/// assert!(config.record_history);
/// assert_eq!(config.history_limit, Some(DEFAULT_HISTORY_LIMIT));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    pub duplicate_states: DuplicatePolicy,

    /// Keep a [`StateHistory`](crate::core::StateHistory) of successful transitions
    pub record_history: bool,

    /// Most transitions the history retains; `None` keeps all of them
    pub history_limit: Option<usize>,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            duplicate_states: DuplicatePolicy::Reject,
            record_history: true,
            history_limit: Some(DEFAULT_HISTORY_LIMIT),
        }
    }
}

impl MachineConfig {
    /// Set the duplicate-label policy.
    pub fn duplicate_states(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_states = policy;
        self
    }

    /// Turn history recording on or off.
    pub fn record_history(mut self, enabled: bool) -> Self {
        self.record_history = enabled;
        self
    }

    /// Cap the history at `limit` entries; `None` removes the cap.
    pub fn history_limit(mut self, limit: Option<usize>) -> Self {
        self.history_limit = limit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_reject_duplicates_and_record_history() {
        let config = MachineConfig::default();
        assert_eq!(config.duplicate_states, DuplicatePolicy::Reject);
        assert!(config.record_history);
        assert_eq!(config.history_limit, Some(DEFAULT_HISTORY_LIMIT));
    }

    #[test]
    fn null_limit_means_unbounded() {
        let config: MachineConfig = serde_json::from_str(r#"{"history_limit":null}"#).unwrap();
        assert_eq!(config.history_limit, None);
    }

    #[test]
    fn empty_document_yields_defaults() {
        let config: MachineConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, MachineConfig::default());
    }

    #[test]
    fn setters_chain() {
        let config = MachineConfig::default()
            .duplicate_states(DuplicatePolicy::Allow)
            .record_history(false)
            .history_limit(Some(16));

        assert_eq!(config.duplicate_states, DuplicatePolicy::Allow);
        assert!(!config.record_history);
        assert_eq!(config.history_limit, Some(16));
    }

    #[test]
    fn config_roundtrips_through_json() {
        let config = MachineConfig::default().record_history(false);
        let json = serde_json::to_string(&config).unwrap();

        assert_eq!(
            json,
            r#"{"duplicate_states":"reject","record_history":false,"history_limit":1024}"#
        );
        let back: MachineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
