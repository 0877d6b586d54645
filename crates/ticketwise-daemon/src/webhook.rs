//! Webhook orchestration
//!
//! The single inbound flow: parse the JIRA event, run the AI analysis,
//! match a knowledge article, post the combined comment back to the
//! issue. Each request is handled once, with no retry and no state
//! shared between requests beyond the injected clients.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;

use ticketwise_ai::AiClient;
use ticketwise_core::{IssueEvent, KnowledgeArticle, KnowledgeBase};
use ticketwise_jira::{AdfDocument, JiraClient, WebhookEvent};

pub const SYSTEM_INSTRUCTION: &str = "You are an IT support assistant. Analyze login/password issues and provide troubleshooting steps, severity suggestion, and next action.";

/// Services shared by all webhook requests, injected at construction
pub struct WebhookState {
    pub ai: AiClient,
    pub jira: JiraClient,
    pub kb: KnowledgeBase,
}

/// `POST /jira-webhook` entry point.
///
/// Events without an issue key are acknowledged with 200 so the sender
/// does not retry them; any processing failure collapses to a generic
/// 500 with the detail kept in the logs.
pub async fn handle_webhook(
    State(state): State<Arc<WebhookState>>,
    body: Bytes,
) -> (StatusCode, &'static str) {
    tracing::info!("webhook received");

    let event: WebhookEvent = match serde_json::from_slice(&body) {
        Ok(event) => event,
        Err(e) => {
            tracing::error!("unreadable webhook payload: {}", e);
            return (StatusCode::INTERNAL_SERVER_ERROR, "Error occurred");
        }
    };

    let Some(issue) = event.into_issue_event() else {
        tracing::info!("no issue key found");
        return (StatusCode::OK, "No issue data");
    };

    match process_issue(&state, &issue).await {
        Ok(()) => (StatusCode::OK, "Success"),
        Err(e) => {
            tracing::error!("webhook processing failed: {:#}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error occurred")
        }
    }
}

async fn process_issue(state: &WebhookState, issue: &IssueEvent) -> anyhow::Result<()> {
    tracing::info!("issue key: {}", issue.issue_key);
    tracing::info!("summary: {}", issue.summary);

    let user_content = format!(
        "Issue Summary: {}\nDescription: {}",
        issue.summary, issue.description
    );
    let analysis = state.ai.analyze(SYSTEM_INSTRUCTION, &user_content).await?;
    tracing::info!("AI analysis generated");

    let article = state.kb.lookup(&issue.summary, &issue.description);
    match article {
        Some(article) => tracing::info!("knowledge article matched: {}", article.title),
        None => tracing::info!("no knowledge article matched"),
    }

    let comment = compose_comment(&analysis, article);
    state
        .jira
        .post_comment(&issue.issue_key, AdfDocument::from_text(comment))
        .await?;
    tracing::info!("comment added to {}", issue.issue_key);

    Ok(())
}

/// The analysis text, followed by the matched article reference when
/// there is one
fn compose_comment(analysis: &str, article: Option<KnowledgeArticle>) -> String {
    let mut comment = format!("AI Analysis:\n\n{}", analysis);
    if let Some(article) = article {
        comment.push_str(&format!(
            "\n\nRecommended Knowledge Article:\n{}\n{}",
            article.title, article.url
        ));
    }
    comment
}
