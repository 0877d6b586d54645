//! Ticketwise Daemon Library
//!
//! Core daemon functionality exposed as a library for testing.

pub mod config;
pub mod server;
pub mod webhook;

pub use config::Config;
pub use server::{build_router, run_server};
pub use webhook::WebhookState;
