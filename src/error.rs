//! Error types for respline
//!
//! Provides a unified error type for all reader and connection operations.

use thiserror::Error;

/// Result type alias using RespError
pub type Result<T> = std::result::Result<T, RespError>;

/// Unified error type for respline operations
#[derive(Debug, Error)]
pub enum RespError {
    // -------------------------------------------------------------------------
    // Misuse
    // -------------------------------------------------------------------------
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // -------------------------------------------------------------------------
    // Connection Errors
    // -------------------------------------------------------------------------
    #[error("Connection error: {0}")]
    Connection(#[from] ConnectionError),

    // -------------------------------------------------------------------------
    // Framing Errors
    // -------------------------------------------------------------------------
    #[error("Protocol error: {0}")]
    Protocol(String),
}

/// Reasons the byte source could not supply the requested bytes
///
/// All three surface as a connection failure; the variant tells them apart.
#[derive(Debug, Error)]
pub enum ConnectionError {
    /// The source reported end-of-stream during a refill
    #[error("Unexpected end of stream")]
    UnexpectedEof,

    /// A zero-length line was read, which means the peer went away
    #[error("It seems like server has closed the connection")]
    ServerClosed,

    /// The source failed with an I/O fault
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RespError {
    /// True for any `ConnectionError`, whatever the cause
    pub fn is_connection(&self) -> bool {
        matches!(self, RespError::Connection(_))
    }
}

impl From<std::io::Error> for RespError {
    fn from(err: std::io::Error) -> Self {
        RespError::Connection(ConnectionError::Io(err))
    }
}
