//! Ticketwise AI analysis
//!
//! Chat-completion client for Groq's OpenAI-compatible API.

pub mod client;
pub mod error;
pub mod types;

pub use client::AiClient;
pub use error::{Error, Result};
pub use types::*;
