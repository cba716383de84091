//! Console event notifications
//!
//! The orchestrator broadcasts an event after every state change so the
//! presentation layer can react (scroll the terminal to the newest entry,
//! highlight the active agent) without ever touching the state directly.

use crate::console::state::LogEntry;
use serde::Serialize;

/// Event emitted by the console during an orchestration run
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum ConsoleEvent {
    /// A run started
    #[serde(rename = "run_started")]
    RunStarted {
        /// Prompt the run was started with
        prompt: String,
    },
    /// The highlighted agent changed (`None` clears the highlight)
    #[serde(rename = "agent_activated")]
    AgentActivated {
        /// Id of the now-active agent, if any
        agent_id: Option<String>,
    },
    /// A log entry was appended; consumers should scroll to it
    #[serde(rename = "log_appended")]
    LogAppended {
        /// Zero-based position of the entry in the log
        index: usize,
        /// The appended entry
        entry: LogEntry,
    },
    /// The run finished and the console is idle again
    #[serde(rename = "run_completed")]
    RunCompleted,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::state::Severity;

    #[test]
    fn test_event_serializes_with_type_tag() {
        let event = ConsoleEvent::LogAppended {
            index: 2,
            entry: LogEntry {
                agent: "Security".to_string(),
                message: "done".to_string(),
                severity: Severity::Success,
            },
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "log_appended");
        assert_eq!(json["index"], 2);
        assert_eq!(json["entry"]["severity"], "success");
    }

    #[test]
    fn test_agent_activated_none_serializes_as_null() {
        let event = ConsoleEvent::AgentActivated { agent_id: None };
        let json = serde_json::to_value(&event).unwrap();
        assert!(json["agent_id"].is_null());
    }
}
