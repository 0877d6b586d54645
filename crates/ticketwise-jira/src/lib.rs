//! Ticketwise JIRA integration
//!
//! Client library for parsing webhook payloads and posting analysis
//! comments back to JIRA Cloud.

pub mod auth;
pub mod client;
pub mod error;
pub mod types;

pub use auth::JiraAuth;
pub use client::JiraClient;
pub use error::{Error, Result};
pub use types::*;
