//! Animation script
//!
//! The scripted "agent reasoning" played while the real response is being
//! fetched. The script is configuration data, not control flow: an ordered
//! list of steps plus the designated final and result agents. Alternate
//! personas swap the script without touching the orchestrator.

use crate::console::state::Severity;

/// One pre-authored animation step
#[derive(Debug, Clone, Copy)]
pub struct ScriptStep {
    /// Agent highlighted while the step plays
    pub agent_id: &'static str,
    /// Message template; `{focus}` is replaced with the classified focus label
    pub template: &'static str,
    /// Severity of the resulting log entry
    pub severity: Severity,
}

impl ScriptStep {
    /// Render the step's message with the focus label substituted
    pub fn render(&self, focus: &str) -> String {
        self.template.replace("{focus}", focus)
    }
}

/// A complete console persona script
#[derive(Debug, Clone)]
pub struct ConsoleScript {
    /// Scripted steps, played in order
    pub steps: &'static [ScriptStep],
    /// Agent highlighted while awaiting the fetched response
    pub final_agent_id: &'static str,
    /// Fixed message appended once the response is available
    pub finalizing_message: &'static str,
    /// Agent the response entry is attributed to
    pub result_agent_id: &'static str,
}

/// The engineering-audit persona (default)
pub const AUDIT_SCRIPT: ConsoleScript = ConsoleScript {
    steps: &[
        ScriptStep {
            agent_id: "architect",
            template: "Architect: Analyzing requirements for [{focus}]",
            severity: Severity::Info,
        },
        ScriptStep {
            agent_id: "debugger",
            template: "Debugger: Validating core logic and dependency tree...",
            severity: Severity::Info,
        },
        ScriptStep {
            agent_id: "frontend",
            template: "Frontend: Optimizing interface hooks and user flow...",
            severity: Severity::Warning,
        },
        ScriptStep {
            agent_id: "security",
            template: "Security: Auditing guardrails and performance bounds...",
            severity: Severity::Warning,
        },
    ],
    final_agent_id: "security",
    finalizing_message: "Security: Finalizing implementation brief...",
    result_agent_id: "architect",
};

impl Default for ConsoleScript {
    fn default() -> Self {
        AUDIT_SCRIPT
    }
}
