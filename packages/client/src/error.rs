//! Client error definitions.

use agora_server::domain::ValueObjectError;
use thiserror::Error;

/// Errors that end the client
#[derive(Debug, Error)]
pub enum ClientError {
    /// The chosen name is not a valid participant name
    #[error("invalid name: {0}")]
    InvalidName(#[from] ValueObjectError),

    /// WebSocket connect or I/O failure
    #[error("connection error: {0}")]
    Connect(#[from] tokio_tungstenite::tungstenite::Error),

    /// Line editor failure
    #[error("readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    /// Request could not be encoded
    #[error("failed to encode request: {0}")]
    Encode(#[from] serde_json::Error),

    /// The server refused to let us join
    #[error("join rejected: {0}")]
    Rejected(String),
}
