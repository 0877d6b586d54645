//! JIRA API types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ticketwise_core::IssueEvent;

/// Inbound webhook payload. Every level is optional because JIRA sends
/// many event shapes to the same endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookEvent {
    #[serde(default)]
    pub issue: Option<WebhookIssue>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebhookIssue {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub fields: Option<WebhookFields>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebhookFields {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl WebhookEvent {
    /// Extract the issue event, or `None` when the payload carries no
    /// usable issue key
    pub fn into_issue_event(self) -> Option<IssueEvent> {
        let issue = self.issue?;
        let key = issue.key.filter(|key| !key.is_empty())?;
        let fields = issue.fields.unwrap_or_default();
        Some(IssueEvent::new(key, fields.summary, fields.description))
    }
}

/// Atlassian Document Format comment body (the v3 comment API rejects
/// plain strings)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdfDocument {
    #[serde(rename = "type")]
    pub node_type: String,
    pub version: u32,
    pub content: Vec<AdfNode>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdfNode {
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Vec<AdfNode>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl AdfDocument {
    /// Wrap plain text in a single-paragraph document
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            node_type: "doc".to_string(),
            version: 1,
            content: vec![AdfNode {
                node_type: "paragraph".to_string(),
                content: Some(vec![AdfNode {
                    node_type: "text".to_string(),
                    content: None,
                    text: Some(text.into()),
                }]),
                text: None,
            }],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CommentRequest {
    pub body: AdfDocument,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    pub jql: String,
    #[serde(rename = "maxResults")]
    pub max_results: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub issues: Vec<JiraIssue>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JiraIssue {
    pub key: String,
    pub fields: JiraFields,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JiraFields {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
}
