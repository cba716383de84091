//! Prompt orchestrator
//!
//! `PromptConsole` owns the console state and runs the prompt-to-response
//! sequence: kick off the response fetch in the background, play the scripted
//! animation steps with fixed delays, then append the fetched (or fallback)
//! response as the final entry. One run at a time; the busy flag is the only
//! concurrency control and the orchestrator itself enforces it.

use crate::console::agents::display_name;
use crate::console::classify::classify_focus;
use crate::console::events::ConsoleEvent;
use crate::console::generation::ResponseFetcher;
use crate::console::script::ConsoleScript;
use crate::console::state::{ConsoleSnapshot, ConsoleState, LogEntry, Severity};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, RwLock};
use tracing::{debug, error, info};

/// Capacity of the event broadcast channel
const EVENT_CHANNEL_CAPACITY: usize = 256;

/// Delays between animation beats
#[derive(Debug, Clone, Copy)]
pub struct ConsoleTiming {
    /// Pause before each scripted log entry
    pub step_delay: Duration,
    /// Pause between the finalizing entry and the response entry
    pub finalize_delay: Duration,
}

impl Default for ConsoleTiming {
    fn default() -> Self {
        Self {
            step_delay: Duration::from_millis(800),
            finalize_delay: Duration::from_millis(600),
        }
    }
}

/// The prompt orchestrator
///
/// Cheap to clone: clones share the same state and event channel, so the
/// HTTP handlers, the WebSocket feed, and the spawned run all observe one
/// console. State is read through [`PromptConsole::snapshot`]; changes are
/// announced on the channel returned by [`PromptConsole::subscribe`].
#[derive(Clone)]
pub struct PromptConsole {
    state: Arc<RwLock<ConsoleState>>,
    events: broadcast::Sender<ConsoleEvent>,
    fetcher: ResponseFetcher,
    script: ConsoleScript,
    timing: ConsoleTiming,
}

impl PromptConsole {
    /// Create a console with the default audit persona and timing
    pub fn new(fetcher: ResponseFetcher) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            state: Arc::new(RwLock::new(ConsoleState::default())),
            events,
            fetcher,
            script: ConsoleScript::default(),
            timing: ConsoleTiming::default(),
        }
    }

    /// Override the animation timing (tests use near-zero delays)
    pub fn with_timing(mut self, timing: ConsoleTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Override the persona script
    pub fn with_script(mut self, script: ConsoleScript) -> Self {
        self.script = script;
        self
    }

    /// Subscribe to console events
    pub fn subscribe(&self) -> broadcast::Receiver<ConsoleEvent> {
        self.events.subscribe()
    }

    /// Take a read-only snapshot of the current state
    pub async fn snapshot(&self) -> ConsoleSnapshot {
        self.state.read().await.snapshot()
    }

    /// Start an orchestration run (fire-and-forget)
    ///
    /// Returns `true` if a run was started. Returns `false` without touching
    /// any state when a run is already in progress or the prompt is blank;
    /// that is the guard contract, not an error.
    pub async fn run(&self, prompt: &str) -> bool {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            debug!("Ignoring run request with blank prompt");
            return false;
        }

        // Guard and initial mutation happen under one write lock so two
        // concurrent run calls cannot both pass the busy check.
        {
            let mut state = self.state.write().await;
            if state.busy {
                debug!("Ignoring run request while a run is in progress");
                return false;
            }
            state.busy = true;
            state.current_prompt = prompt.to_string();
            state.active_agent_id = None;
            state.log.clear();
        }

        info!(prompt_len = prompt.len(), "Starting orchestration run");
        let _ = self.events.send(ConsoleEvent::RunStarted {
            prompt: prompt.to_string(),
        });

        let console = self.clone();
        let prompt = prompt.to_string();
        tokio::spawn(async move {
            console.drive(prompt).await;
        });

        true
    }

    /// Execute one run to completion
    ///
    /// Only ever entered through `run`, which has already claimed the busy
    /// flag and recorded the prompt.
    async fn drive(&self, prompt: String) {
        // The fetch races the animation; whichever finishes last gates the
        // finalizing phase.
        let fetcher = self.fetcher.clone();
        let fetch_prompt = prompt.clone();
        let fetch = tokio::spawn(async move { fetcher.fetch(&fetch_prompt).await });

        let focus = classify_focus(&prompt);
        debug!(focus = focus, "Classified prompt focus");

        for step in self.script.steps {
            self.set_active(Some(step.agent_id)).await;
            tokio::time::sleep(self.timing.step_delay).await;
            self.append(LogEntry {
                agent: display_name(step.agent_id).to_string(),
                message: step.render(focus),
                severity: step.severity,
            })
            .await;
        }

        self.set_active(Some(self.script.final_agent_id)).await;
        let response = match fetch.await {
            Ok(text) => text,
            // The fetch task only panics on a bug; the run still completes.
            Err(e) => {
                error!(error = %e, "Response fetch task failed");
                self.fetcher.fallback_response(&prompt)
            }
        };

        self.append(LogEntry {
            agent: display_name(self.script.final_agent_id).to_string(),
            message: self.script.finalizing_message.to_string(),
            severity: Severity::Info,
        })
        .await;
        tokio::time::sleep(self.timing.finalize_delay).await;

        self.append(LogEntry {
            agent: display_name(self.script.result_agent_id).to_string(),
            message: response,
            severity: Severity::Success,
        })
        .await;

        {
            let mut state = self.state.write().await;
            state.active_agent_id = None;
            state.busy = false;
        }
        let _ = self.events.send(ConsoleEvent::AgentActivated { agent_id: None });
        let _ = self.events.send(ConsoleEvent::RunCompleted);
        info!("Orchestration run completed");
    }

    /// Highlight an agent (or clear the highlight) and announce it
    async fn set_active(&self, agent_id: Option<&str>) {
        let agent_id = agent_id.map(str::to_string);
        {
            let mut state = self.state.write().await;
            state.active_agent_id = agent_id.clone();
        }
        let _ = self.events.send(ConsoleEvent::AgentActivated { agent_id });
    }

    /// Append a log entry and announce it (the scroll notification)
    async fn append(&self, entry: LogEntry) {
        let index = {
            let mut state = self.state.write().await;
            state.log.push(entry.clone());
            state.log.len() - 1
        };
        let _ = self.events.send(ConsoleEvent::LogAppended { index, entry });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::fallback::FallbackGenerator;
    use crate::console::script::AUDIT_SCRIPT;

    fn test_console(step_ms: u64) -> PromptConsole {
        // No endpoint configured: every fetch takes the fallback path.
        let fetcher = ResponseFetcher::new(reqwest::Client::new(), None, None)
            .with_fallback(FallbackGenerator::with_seed(9));
        PromptConsole::new(fetcher).with_timing(ConsoleTiming {
            step_delay: Duration::from_millis(step_ms),
            finalize_delay: Duration::from_millis(step_ms),
        })
    }

    async fn wait_for_completion(console: &PromptConsole) {
        let mut events = console.subscribe();
        tokio::time::timeout(Duration::from_secs(5), async {
            while let Ok(event) = events.recv().await {
                if matches!(event, ConsoleEvent::RunCompleted) {
                    break;
                }
            }
        })
        .await
        .expect("run should complete");
    }

    #[tokio::test]
    async fn test_blank_prompt_is_noop() {
        let console = test_console(1);
        assert!(!console.run("").await);
        assert!(!console.run("   \t\n").await);
        let snapshot = console.snapshot().await;
        assert!(!snapshot.busy);
        assert!(snapshot.log.is_empty());
        assert_eq!(snapshot.current_prompt, "");
    }

    #[tokio::test]
    async fn test_second_run_while_busy_is_noop() {
        let console = test_console(30);
        let mut events = console.subscribe();

        assert!(console.run("first prompt").await);
        assert!(!console.run("second prompt").await);

        let snapshot = console.snapshot().await;
        assert!(snapshot.busy);
        assert_eq!(snapshot.current_prompt, "first prompt");

        wait_for_completion(&console).await;
        // Only one RunStarted was ever announced.
        let mut started = 0;
        while let Ok(event) = events.try_recv() {
            if matches!(event, ConsoleEvent::RunStarted { .. }) {
                started += 1;
            }
        }
        assert_eq!(started, 1);
    }

    #[tokio::test]
    async fn test_completed_run_has_script_plus_two_entries() {
        let console = test_console(1);
        assert!(console.run("Audit the architecture of a chat app").await);
        wait_for_completion(&console).await;

        let snapshot = console.snapshot().await;
        assert_eq!(snapshot.log.len(), AUDIT_SCRIPT.steps.len() + 2);
        assert!(!snapshot.busy);
        assert!(snapshot.active_agent_id.is_none());

        // Scripted entries in script order, then finalizing, then result.
        assert!(snapshot.log[0].message.contains("Architect:"));
        assert!(snapshot.log[0].message.contains("Security Guardrails"));
        let finalizing = &snapshot.log[AUDIT_SCRIPT.steps.len()];
        assert_eq!(finalizing.message, AUDIT_SCRIPT.finalizing_message);
        assert_eq!(finalizing.severity, Severity::Info);
        let result = snapshot.log.last().unwrap();
        assert_eq!(result.severity, Severity::Success);
        assert!(result
            .message
            .contains("Audit the architecture of a chat app"));
    }

    #[tokio::test]
    async fn test_run_allowed_again_after_completion() {
        let console = test_console(1);
        assert!(console.run("first").await);
        wait_for_completion(&console).await;
        assert!(console.run("second").await);
        wait_for_completion(&console).await;

        let snapshot = console.snapshot().await;
        assert_eq!(snapshot.current_prompt, "second");
        assert_eq!(snapshot.log.len(), AUDIT_SCRIPT.steps.len() + 2);
    }

    #[tokio::test]
    async fn test_run_trims_prompt_before_recording() {
        let console = test_console(1);
        assert!(console.run("  padded prompt  ").await);
        let snapshot = console.snapshot().await;
        assert_eq!(snapshot.current_prompt, "padded prompt");
        wait_for_completion(&console).await;
    }

    #[tokio::test]
    async fn test_log_append_events_carry_indices_in_order() {
        let console = test_console(1);
        let mut events = console.subscribe();
        assert!(console.run("index check").await);
        wait_for_completion(&console).await;

        let mut indices = Vec::new();
        while let Ok(event) = events.try_recv() {
            if let ConsoleEvent::LogAppended { index, .. } = event {
                indices.push(index);
            }
        }
        let expected: Vec<usize> = (0..AUDIT_SCRIPT.steps.len() + 2).collect();
        assert_eq!(indices, expected);
    }
}
