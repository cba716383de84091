//! WebSocket handler for real-time console updates
//!
//! Streams console events (log appends, agent highlights, run lifecycle) to
//! connected clients so the terminal view can scroll and re-render as the
//! orchestration plays out. Sends an initial state snapshot on connect and
//! supports ping/pong for connection keepalive.

use crate::console::{ConsoleEvent, AGENTS};
use crate::state::AppState;
use axum::{
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    response::Response,
};
use futures_util::{stream::SplitSink, SinkExt, StreamExt};
use serde::Deserialize;
use tokio::sync::broadcast;
use tracing::{debug, error, info, warn};

/// Messages a client may send over the socket
#[derive(Deserialize, Debug)]
#[serde(tag = "type")]
enum ClientMessage {
    /// Keepalive ping
    #[serde(rename = "ping")]
    Ping,
}

/// WebSocket upgrade handler
pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> Response {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

// Handle one WebSocket connection until it closes
async fn handle_socket(socket: WebSocket, state: AppState) {
    let (mut sender, mut receiver) = socket.split();

    info!("WebSocket client connected");

    // Subscribe before snapshotting so no event between the two is lost.
    let mut events = state.console.subscribe();

    let initial = serde_json::json!({
        "type": "initial_state",
        "state": state.console.snapshot().await,
        "agents": AGENTS,
    });
    if sender.send(Message::Text(initial.to_string())).await.is_err() {
        info!("WebSocket client disconnected before initial state");
        return;
    }

    loop {
        tokio::select! {
            event = events.recv() => match event {
                Ok(event) => {
                    if forward_event(&mut sender, &event).await.is_err() {
                        break;
                    }
                }
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!(skipped = skipped, "WebSocket client lagged behind console events");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            },
            incoming = receiver.next() => match incoming {
                Some(Ok(Message::Text(text))) => {
                    match serde_json::from_str::<ClientMessage>(&text) {
                        Ok(ClientMessage::Ping) => {
                            let pong = r#"{"type":"pong"}"#.to_string();
                            if sender.send(Message::Text(pong)).await.is_err() {
                                break;
                            }
                        }
                        Err(_) => debug!(text = %text, "Ignoring unrecognized WebSocket message"),
                    }
                }
                Some(Ok(Message::Ping(data))) => {
                    if sender.send(Message::Pong(data)).await.is_err() {
                        break;
                    }
                }
                Some(Ok(Message::Close(_))) | None => break,
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    warn!(error = %e, "WebSocket receive error");
                    break;
                }
            },
        }
    }

    info!("WebSocket client disconnected");
}

// Serialize and send one console event; Err means the client is gone
async fn forward_event(
    sender: &mut SplitSink<WebSocket, Message>,
    event: &ConsoleEvent,
) -> Result<(), ()> {
    let payload = match serde_json::to_string(event) {
        Ok(payload) => payload,
        Err(e) => {
            error!(error = %e, "Failed to serialize console event");
            return Ok(());
        }
    };
    sender.send(Message::Text(payload)).await.map_err(|_| ())
}
