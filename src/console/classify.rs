//! Prompt classification
//!
//! Scans the lowercased prompt for keyword groups to pick a contextual
//! "focus label". The label is purely cosmetic: it is interpolated into the
//! first scripted log message so the animation appears to react to the
//! prompt. First matching group wins, in a fixed priority order.

/// Focus label used when no keyword group matches
pub const DEFAULT_FOCUS: &str = "Codebase Audit";

/// Keyword groups in priority order: (keywords, focus label)
const KEYWORD_GROUPS: &[(&[&str], &str)] = &[
    (&["ui", "frontend", "interface"], "Frontend Logic"),
    (&["api", "backend", "server"], "Backend Architecture"),
    (&["security", "audit"], "Security Guardrails"),
    (&["sql", "database"], "Data Schema"),
];

/// Classify a prompt into a focus label
///
/// Matching is case-insensitive substring search; the first group with any
/// matching keyword wins.
pub fn classify_focus(prompt: &str) -> &'static str {
    let lower = prompt.to_lowercase();
    for (keywords, focus) in KEYWORD_GROUPS {
        if keywords.iter().any(|k| lower.contains(k)) {
            return focus;
        }
    }
    DEFAULT_FOCUS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontend_keywords() {
        assert_eq!(classify_focus("Improve the UI of my app"), "Frontend Logic");
        assert_eq!(classify_focus("refactor the interface"), "Frontend Logic");
    }

    #[test]
    fn test_backend_keywords() {
        assert_eq!(
            classify_focus("design a REST API for orders"),
            "Backend Architecture"
        );
        assert_eq!(classify_focus("tune the server"), "Backend Architecture");
    }

    #[test]
    fn test_security_keywords() {
        assert_eq!(
            classify_focus("Audit the architecture of a chat app"),
            "Security Guardrails"
        );
    }

    #[test]
    fn test_data_keywords() {
        assert_eq!(classify_focus("optimize this SQL query"), "Data Schema");
    }

    #[test]
    fn test_priority_order_first_group_wins() {
        // Contains both a frontend keyword and a security keyword; the
        // frontend group has higher priority.
        assert_eq!(
            classify_focus("security review of the UI"),
            "Frontend Logic"
        );
    }

    #[test]
    fn test_default_when_no_match() {
        assert_eq!(classify_focus("write a haiku"), DEFAULT_FOCUS);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify_focus("BACKEND scaling"), "Backend Architecture");
    }
}
