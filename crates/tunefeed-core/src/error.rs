//! Error types for Tunefeed

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TunefeedError>;

#[derive(Error, Debug)]
pub enum TunefeedError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Transport failures, timeouts and overloaded or unavailable replicas.
    /// The same request may succeed later.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// The database rejected the statement.
    #[error("Query error: {0}")]
    Query(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl TunefeedError {
    /// Whether retrying the same request could succeed
    pub fn is_transient(&self) -> bool {
        matches!(self, TunefeedError::StorageUnavailable(_))
    }
}
