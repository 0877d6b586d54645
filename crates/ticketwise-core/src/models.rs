//! Request-scoped domain models

use serde::{Deserialize, Serialize};

/// Issue fields extracted from a single webhook delivery.
///
/// Instances only exist for deliveries that carried a non-empty issue key;
/// payloads without one are acknowledged before an `IssueEvent` is built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IssueEvent {
    pub issue_key: String,
    pub summary: String,
    pub description: String,
}

impl IssueEvent {
    /// Create an event from webhook fields, defaulting absent text to empty
    pub fn new(
        issue_key: impl Into<String>,
        summary: Option<String>,
        description: Option<String>,
    ) -> Self {
        Self {
            issue_key: issue_key.into(),
            summary: summary.unwrap_or_default(),
            description: description.unwrap_or_default(),
        }
    }
}

/// A reference to a troubleshooting article in the knowledge base.
///
/// The catalog is fixed for the lifetime of the process; see [`crate::kb`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KnowledgeArticle {
    pub title: &'static str,
    pub url: &'static str,
}
