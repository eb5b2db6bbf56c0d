//! Error types for hbase-rest-admin
//!
//! All operations return `Result<T, AdminError>`.
//! No panics, no unwraps in production code paths.

use std::time::Duration;

use thiserror::Error;

/// Unified error type for all schema-administration operations
#[derive(Error, Debug)]
pub enum AdminError {
    /// Transport-level failure talking to the REST gateway
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The gateway answered, but not with a success status
    #[error("gateway returned {status} for table '{table}': {body}")]
    UnexpectedStatus {
        table: String,
        status: u16,
        body: String,
    },

    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// The whole-group operation outlived its configured deadline
    #[error("{op} exceeded deadline of {deadline:?}")]
    DeadlineExceeded {
        op: &'static str,
        deadline: Duration,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

impl From<url::ParseError> for AdminError {
    fn from(err: url::ParseError) -> Self {
        AdminError::InvalidEndpoint(err.to_string())
    }
}

/// Result type alias for schema-administration operations
pub type Result<T> = std::result::Result<T, AdminError>;
