//! Audit Console Backend Library
//!
//! This library exposes modules for testing and external use.
//! The main binary is in `src/main.rs`.

pub mod api;
pub mod config;
pub mod console;
pub mod error;
/// Shared application state for the HTTP layer
pub mod state;
pub mod websocket;
