//! Console module
//!
//! The prompt-to-response orchestration core behind the résumé site's
//! "engineering audit" terminal. The orchestrator plays a scripted agent
//! animation while a real generation request runs in the background, then
//! appends the response (remote or local fallback) as the final log entry.

pub mod agents;
pub mod classify;
pub mod events;
pub mod fallback;
pub mod generation;
pub mod orchestrator;
pub mod script;
pub mod state;

pub use agents::{find_agent, AgentDescriptor, AGENTS};
pub use events::ConsoleEvent;
pub use orchestrator::{ConsoleTiming, PromptConsole};
pub use state::{ConsoleSnapshot, LogEntry, Severity};
