//! Static agent roster
//!
//! The console attributes log entries to a fixed set of cosmetic "agents".
//! Agents carry no behavior of their own; they are labels with presentation
//! hints (icon id, color tokens) that the rendering layer resolves.

use serde::Serialize;

/// Unique identifier for an agent
pub type AgentId = &'static str;

/// A cosmetic agent descriptor
///
/// Defined once at startup, never mutated. The `icon`, `color`, and
/// `ring_color` fields are presentation tokens consumed by the frontend.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct AgentDescriptor {
    /// Unique key used by the script and the active-agent marker
    pub id: AgentId,
    /// Display name shown next to log entries
    pub name: &'static str,
    /// Role label shown in the agent roster
    pub role: &'static str,
    /// Icon identifier for the frontend
    pub icon: &'static str,
    /// Text color token
    pub color: &'static str,
    /// Highlight ring color token (applied while the agent is active)
    pub ring_color: &'static str,
}

/// The fixed agent roster
pub const AGENTS: &[AgentDescriptor] = &[
    AgentDescriptor {
        id: "architect",
        name: "Architect",
        role: "System Design",
        icon: "server",
        color: "text-amber-400",
        ring_color: "border-amber-500",
    },
    AgentDescriptor {
        id: "debugger",
        name: "Debugger",
        role: "Logic Optimization",
        icon: "code",
        color: "text-cyan-400",
        ring_color: "border-cyan-500",
    },
    AgentDescriptor {
        id: "frontend",
        name: "Frontend",
        role: "UI/UX Interface",
        icon: "layout",
        color: "text-emerald-400",
        ring_color: "border-emerald-500",
    },
    AgentDescriptor {
        id: "security",
        name: "Security",
        role: "Audit & Guardrails",
        icon: "shield",
        color: "text-purple-400",
        ring_color: "border-purple-500",
    },
];

/// Look up an agent descriptor by id
pub fn find_agent(id: &str) -> Option<&'static AgentDescriptor> {
    AGENTS.iter().find(|a| a.id == id)
}

/// Resolve an agent id to its display name
///
/// Unknown ids fall back to the raw id so a misconfigured script still
/// produces a readable log entry.
pub fn display_name(id: &str) -> &str {
    find_agent(id).map(|a| a.name).unwrap_or(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_ids_are_unique() {
        for (i, a) in AGENTS.iter().enumerate() {
            for b in &AGENTS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_find_agent_known_id() {
        let agent = find_agent("architect").expect("architect should exist");
        assert_eq!(agent.name, "Architect");
        assert_eq!(agent.role, "System Design");
    }

    #[test]
    fn test_find_agent_unknown_id() {
        assert!(find_agent("quantum").is_none());
    }

    #[test]
    fn test_display_name_falls_back_to_id() {
        assert_eq!(display_name("security"), "Security");
        assert_eq!(display_name("quantum"), "quantum");
    }
}
