use thiserror::Error;

use crate::contact::FieldErrors;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid payload")]
    InvalidPayload,

    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    #[error("Relay rejected message ({status}): {message}")]
    Relay { status: u16, message: String },

    #[error("Submission failed: {0}")]
    Submission(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;
