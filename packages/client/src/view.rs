//! Chat log rendering and roster tracking.
//!
//! Wall-clock timestamps exist only here; the server does not send any.

use agora_server::infrastructure::dto::websocket::ServerMessage;
use agora_shared::time::format_jst_datetime;

/// State of the chat window: who we are and who is in the room, in join order.
#[derive(Debug, Clone)]
pub struct ChatView {
    name: String,
    roster: Vec<String>,
}

impl ChatView {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            roster: Vec::new(),
        }
    }

    /// Lines shown right after sending the join request
    pub fn welcome(&mut self) -> Vec<String> {
        let own = self.name.clone();
        self.add(&own);
        vec![
            "Welcome to this chat room".to_string(),
            format!("Online: {}", self.name),
        ]
    }

    /// Line shown when the connection is gone
    pub fn offline(&self) -> String {
        format!("Offline: {}", self.name)
    }

    /// Update the roster for one server message and render its log line.
    pub fn apply(&mut self, message: &ServerMessage, timestamp_ms: i64) -> String {
        match message {
            ServerMessage::Join { user_name } => {
                self.add(user_name);
                format!(
                    "{} joined at: [{}]",
                    user_name,
                    format_jst_datetime(timestamp_ms)
                )
            }
            ServerMessage::Message {
                user_name,
                user_msg,
            } => {
                self.add(user_name);
                format!("{user_name} says: {user_msg}")
            }
            ServerMessage::Leave { user_name } => {
                self.roster.retain(|name| name != user_name);
                format!("{} left at {}", user_name, format_jst_datetime(timestamp_ms))
            }
            ServerMessage::Error { message, .. } => format!("error: {message}"),
        }
    }

    pub fn roster(&self) -> &[String] {
        &self.roster
    }

    /// One-line roster summary for `/users`
    pub fn roster_line(&self) -> String {
        format!("Users ({}): {}", self.roster.len(), self.roster.join(", "))
    }

    fn add(&mut self, name: &str) {
        if !self.roster.iter().any(|n| n == name) {
            self.roster.push(name.to_string());
        }
    }
}
