//! WebSocket message DTOs.
//!
//! The shapes mirror the legacy chat contract: three one-way requests
//! (`join`, `leave`, `message`) and three callbacks of the same shape.

use serde::{Deserialize, Serialize};

use crate::domain::SessionEvent;

/// Request sent by a client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ClientRequest {
    Join { user_name: String },
    Leave { user_name: String },
    Message { user_name: String, user_msg: String },
}

/// Notification sent to a client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ServerMessage {
    Join { user_name: String },
    Leave { user_name: String },
    Message { user_name: String, user_msg: String },
    Error { code: ErrorCode, message: String },
}

/// Reason a request was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorCode {
    /// Frame was not a valid request
    InvalidRequest,
    /// Name failed validation
    InvalidName,
    /// Name is already in the session
    DuplicateName,
    /// Name is not in the session (anymore)
    NotFound,
    /// This connection already joined
    AlreadyJoined,
    /// This connection has not joined
    NotJoined,
    /// Request names a participant other than the one bound to this connection
    NameMismatch,
}

impl ServerMessage {
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Error {
            code,
            message: message.into(),
        }
    }
}

impl From<SessionEvent> for ServerMessage {
    fn from(event: SessionEvent) -> Self {
        match event {
            SessionEvent::Joined { name } => Self::Join {
                user_name: name.into_string(),
            },
            SessionEvent::Left { name } => Self::Leave {
                user_name: name.into_string(),
            },
            SessionEvent::Said { name, text } => Self::Message {
                user_name: name.into_string(),
                user_msg: text,
            },
        }
    }
}
