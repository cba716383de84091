//! Console state
//!
//! `ConsoleState` is owned exclusively by the orchestrator and mutated only
//! inside a run. The presentation layer reads it through snapshots.

use serde::{Deserialize, Serialize};

/// Severity of a log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Routine status line
    Info,
    /// Completed result
    Success,
    /// Attention-drawing status line
    Warning,
}

/// A single console log entry
///
/// Immutable once appended; the log's only meaningful order is append order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Display name of the agent the entry is attributed to
    pub agent: String,
    /// Message text
    pub message: String,
    /// Severity used by the frontend for styling
    pub severity: Severity,
}

/// Mutable orchestration state
///
/// Invariants:
/// - `busy` is true from the start of a run until its final entry is
///   appended; a new run must not start while it is true.
/// - `active_agent_id` names the agent of the most recently started step or
///   network wait; `None` before start and after completion.
#[derive(Debug, Default)]
pub struct ConsoleState {
    /// Prompt of the current (or most recent) run
    pub current_prompt: String,
    /// Whether a run is in progress
    pub busy: bool,
    /// Id of the currently highlighted agent, if any
    pub active_agent_id: Option<String>,
    /// Ordered log, append-only within a run
    pub log: Vec<LogEntry>,
}

impl ConsoleState {
    /// Take a read-only snapshot for the presentation layer
    pub fn snapshot(&self) -> ConsoleSnapshot {
        ConsoleSnapshot {
            current_prompt: self.current_prompt.clone(),
            busy: self.busy,
            active_agent_id: self.active_agent_id.clone(),
            log: self.log.clone(),
        }
    }
}

/// Read-only view of the console state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleSnapshot {
    /// Prompt of the current (or most recent) run
    pub current_prompt: String,
    /// Whether a run is in progress
    pub busy: bool,
    /// Id of the currently highlighted agent, if any
    pub active_agent_id: Option<String>,
    /// Ordered log
    pub log: Vec<LogEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_idle() {
        let state = ConsoleState::default();
        assert!(!state.busy);
        assert!(state.active_agent_id.is_none());
        assert!(state.log.is_empty());
        assert_eq!(state.current_prompt, "");
    }

    #[test]
    fn test_snapshot_preserves_log_order() {
        let mut state = ConsoleState::default();
        for i in 0..3 {
            state.log.push(LogEntry {
                agent: "Architect".to_string(),
                message: format!("step {}", i),
                severity: Severity::Info,
            });
        }
        let snapshot = state.snapshot();
        assert_eq!(snapshot.log.len(), 3);
        assert_eq!(snapshot.log[0].message, "step 0");
        assert_eq!(snapshot.log[2].message, "step 2");
    }

    #[test]
    fn test_severity_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Severity::Warning).unwrap(),
            "\"warning\""
        );
        assert_eq!(
            serde_json::from_str::<Severity>("\"success\"").unwrap(),
            Severity::Success
        );
    }
}
