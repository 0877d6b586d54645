//! Ticketwise Daemon
//!
//! The daemon process that receives JIRA webhooks, runs AI triage, and
//! posts the result back to the issue.

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;

use ticketwise_ai::AiClient;
use ticketwise_core::KnowledgeBase;
use ticketwise_daemon::{run_server, Config, WebhookState};
use ticketwise_jira::{JiraAuth, JiraClient};

#[derive(Parser, Debug)]
#[command(name = "ticketwised")]
#[command(about = "Ticketwise daemon - JIRA webhook triage backend", long_about = None)]
struct Args {
    /// Listen port (overrides the PORT environment variable)
    #[arg(short, long)]
    port: Option<u16>,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(args.log_level.as_str())
        .init();

    tracing::info!("Ticketwise daemon starting...");

    let config = Config::from_env()?;
    let port = args.port.unwrap_or(config.port);

    let auth = JiraAuth::new(config.jira_email.clone(), config.jira_api_token.clone());
    let state = Arc::new(WebhookState {
        ai: AiClient::new(config.groq_api_key.clone()),
        jira: JiraClient::new(config.jira_base_url.clone(), auth),
        kb: KnowledgeBase::new(),
    });

    tracing::info!("AI client initialized");
    tracing::info!("JIRA client initialized for {}", config.jira_base_url);
    tracing::info!("Knowledge base initialized");

    run_server(state, port).await
}
