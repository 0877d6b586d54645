//! Daemon configuration
//!
//! All settings come from the environment. Credentials are required and
//! checked at startup so a misconfigured process fails fast instead of
//! erroring on its first webhook.

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 1000;

#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: String,
    pub jira_base_url: String,
    pub jira_email: String,
    pub jira_api_token: String,
    pub port: u16,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            groq_api_key: require("GROQ_API_KEY")?,
            jira_base_url: require("JIRA_BASE_URL")?,
            jira_email: require("JIRA_EMAIL")?,
            jira_api_token: require("JIRA_API_TOKEN")?,
            port: port_from_env()?,
        })
    }
}

/// Read a variable that must be present and non-empty
fn require(name: &'static str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(name)),
    }
}

/// `PORT`, falling back to the default when unset or empty
fn port_from_env() -> Result<u16, ConfigError> {
    match std::env::var("PORT") {
        Ok(value) if !value.is_empty() => value.parse().map_err(|_| ConfigError::InvalidValue {
            name: "PORT",
            value,
        }),
        _ => Ok(DEFAULT_PORT),
    }
}
