use thiserror::Error;

/// All error types for tabgrep
#[derive(Error, Debug)]
pub enum Error {
    #[error("configuration error: {message}")]
    Config { message: String },

    #[error("invalid pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        source: regex::Error,
    },

    #[error("no fields matched")]
    NoFieldsMatched,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        Self::Pattern {
            pattern: pattern.into(),
            source,
        }
    }
}

/// Result type alias for tabgrep operations
pub type Result<T> = std::result::Result<T, Error>;
