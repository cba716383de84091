//! API module
//!
//! Contains HTTP request handlers for the console's presentation boundary.

pub mod console;

pub use console::*;
