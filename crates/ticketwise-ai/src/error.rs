//! Error types for the AI provider

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("AI API error: status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("completion response carried no choices")]
    EmptyCompletion,
}

pub type Result<T> = std::result::Result<T, Error>;
