//! Error types shared by the library and the binary

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("word list not found: {name} (available: {available})")]
    LanguageNotFound { name: String, available: String },

    #[error("word list {name} is not valid UTF-8")]
    InvalidEncoding { name: String },

    #[error("not enough words: requested {requested}, word list has {available}")]
    InsufficientWords { requested: usize, available: usize },

    #[error("invalid configuration: {message}")]
    ConfigInvalid { message: String },

    #[error("failed to initialize logging: {message}")]
    Logging { message: String },
}
