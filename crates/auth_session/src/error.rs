//! Session error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("No active session")]
    NoSession,

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Malformed session record: {0}")]
    MalformedRecord(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid session data: {0}")]
    InvalidData(String),
}

pub type Result<T> = std::result::Result<T, SessionError>;
