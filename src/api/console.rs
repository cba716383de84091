//! Console API handlers
//!
//! HTTP surface over the prompt orchestrator: start a run, read the state
//! snapshot, list the agent roster. Completion of a run is observed through
//! state reads or the WebSocket event feed, not through the run response.

use crate::error::AppError;
use crate::state::AppState;
use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};

use crate::console::{AgentDescriptor, ConsoleSnapshot, AGENTS};

/// Run request
#[derive(Deserialize, Debug)]
pub struct RunRequest {
    /// Free-text prompt for the orchestration run
    pub prompt: String,
}

/// Run response
#[derive(Serialize, Debug)]
pub struct RunResponse {
    /// Whether a run was started (`false` = guarded no-op: busy or blank)
    pub started: bool,
    /// Human-readable status
    pub message: String,
}

/// Agents list response
#[derive(Serialize)]
pub struct AgentsListResponse {
    /// The static agent roster
    pub agents: &'static [AgentDescriptor],
    /// Number of agents
    pub count: usize,
}

/// POST /api/console/run - Start an orchestration run (fire-and-forget)
///
/// Over-limit prompts are rejected with 400; a busy console or a blank
/// prompt is reported as `started: false` with status 200, mirroring the
/// orchestrator's silent-guard contract.
pub async fn run_console(
    State(state): State<AppState>,
    Json(request): Json<RunRequest>,
) -> Result<Json<RunResponse>, AppError> {
    if request.prompt.len() > state.max_prompt_length {
        return Err(AppError::PromptTooLong {
            actual: request.prompt.len(),
            max: state.max_prompt_length,
        });
    }

    let started = state.console.run(&request.prompt).await;
    let message = if started {
        "Run started".to_string()
    } else {
        "Run not started: console busy or prompt blank".to_string()
    };

    Ok(Json(RunResponse { started, message }))
}

/// GET /api/console/state - Read-only snapshot of the console state
pub async fn get_console_state(State(state): State<AppState>) -> Json<ConsoleSnapshot> {
    Json(state.console.snapshot().await)
}

/// GET /api/console/agents - The static agent roster
pub async fn list_agents(State(_state): State<AppState>) -> Json<AgentsListResponse> {
    Json(AgentsListResponse {
        agents: AGENTS,
        count: AGENTS.len(),
    })
}
