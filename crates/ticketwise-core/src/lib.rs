//! Ticketwise core domain types
//!
//! Issue events and the knowledge-base catalog shared by the daemon and
//! client crates.

pub mod kb;
pub mod models;

pub use kb::KnowledgeBase;
pub use models::{IssueEvent, KnowledgeArticle};
