//! WebSocket connection handlers.
//!
//! Each connection may bind to one participant. Requests are JSON
//! `ClientRequest` frames; session events and rejections go back as
//! `ServerMessage` frames through a per-connection outbox.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc::{self, UnboundedSender};

use crate::{
    domain::{ParticipantName, SubscriptionHandle},
    infrastructure::{
        dto::websocket::{ClientRequest, ErrorCode, ServerMessage},
        sink::ChannelEventSink,
    },
    ui::state::AppState,
    usecase::{
        DisconnectSubscriberUseCase, JoinSessionUseCase, LeaveSessionUseCase, SendMessageUseCase,
    },
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

/// Per-connection state: the outbox and the participant bound to it, if any.
struct Connection {
    state: Arc<AppState>,
    outbox: UnboundedSender<ServerMessage>,
    subscription: Option<SubscriptionHandle>,
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (mut sender, mut receiver) = socket.split();
    let (outbox, mut rx) = mpsc::unbounded_channel::<ServerMessage>();

    // Spawn a task to write queued messages to this client
    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            let json = match serde_json::to_string(&msg) {
                Ok(json) => json,
                Err(e) => {
                    tracing::error!("Failed to encode outgoing message: {}", e);
                    continue;
                }
            };
            if sender.send(Message::Text(json.into())).await.is_err() {
                break;
            }
        }
    });

    let mut connection = Connection {
        state,
        outbox,
        subscription: None,
    };

    loop {
        tokio::select! {
            _ = &mut send_task => break,
            incoming = receiver.next() => match incoming {
                Some(Ok(Message::Text(text))) => connection.handle_text(text.as_str()).await,
                Some(Ok(Message::Close(_))) | None => {
                    tracing::debug!("Client closed the connection");
                    break;
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    tracing::warn!("WebSocket error: {}", e);
                    break;
                }
            },
        }
    }

    send_task.abort();
    connection.close().await;
}

impl Connection {
    async fn handle_text(&mut self, text: &str) {
        tracing::debug!("Received text: {}", text);

        let request = match serde_json::from_str::<ClientRequest>(text) {
            Ok(request) => request,
            Err(e) => {
                tracing::warn!("Failed to parse request: {}", e);
                self.reply(ErrorCode::InvalidRequest, e.to_string());
                return;
            }
        };

        match request {
            ClientRequest::Join { user_name } => self.join(user_name).await,
            ClientRequest::Leave { user_name } => self.leave(&user_name).await,
            ClientRequest::Message {
                user_name,
                user_msg,
            } => self.say(&user_name, user_msg).await,
        }
    }

    async fn join(&mut self, user_name: String) {
        if let Some(current) = &self.subscription {
            let message = format!("already joined as '{}'", current.name);
            self.reply(ErrorCode::AlreadyJoined, message);
            return;
        }

        // Convert String -> ParticipantName (Domain Model)
        let name = match ParticipantName::try_from(user_name) {
            Ok(name) => name,
            Err(e) => {
                tracing::warn!("Invalid participant name: {}", e);
                self.reply(ErrorCode::InvalidName, e.to_string());
                return;
            }
        };

        let sink = Arc::new(ChannelEventSink::new(self.outbox.clone()));
        let usecase = JoinSessionUseCase::new(self.state.broadcaster.clone());
        match usecase.execute(name, sink).await {
            Ok(handle) => self.subscription = Some(handle),
            Err(e) => {
                tracing::warn!("Rejected join: {}", e);
                self.reply(ErrorCode::DuplicateName, e.to_string());
            }
        }
    }

    async fn leave(&mut self, user_name: &str) {
        let Some(handle) = self.bound(user_name) else {
            return;
        };

        let usecase = LeaveSessionUseCase::new(self.state.broadcaster.clone());
        let result = usecase.execute(&handle).await;
        // Either way the participant is no longer in the session.
        self.subscription = None;
        if let Err(e) = result {
            self.reply(ErrorCode::NotFound, e.to_string());
        }
    }

    async fn say(&mut self, user_name: &str, user_msg: String) {
        let Some(handle) = self.bound(user_name) else {
            return;
        };

        let usecase = SendMessageUseCase::new(self.state.broadcaster.clone());
        if let Err(e) = usecase.execute(&handle, user_msg).await {
            // Evicted after a failed delivery; the binding is stale.
            self.subscription = None;
            self.reply(ErrorCode::NotFound, e.to_string());
        }
    }

    /// The subscription bound to this connection, provided `user_name` refers to it.
    fn bound(&self, user_name: &str) -> Option<SubscriptionHandle> {
        let Some(current) = &self.subscription else {
            self.reply(ErrorCode::NotJoined, "join before sending requests");
            return None;
        };

        if current.name.as_str() != user_name.trim() {
            let message = format!(
                "connection is bound to '{}', not '{}'",
                current.name, user_name
            );
            self.reply(ErrorCode::NameMismatch, message);
            return None;
        }

        Some(current.clone())
    }

    fn reply(&self, code: ErrorCode, message: impl Into<String>) {
        if self.outbox.send(ServerMessage::error(code, message)).is_err() {
            tracing::debug!("Outbox closed; dropping error reply");
        }
    }

    /// Report the disconnect; a no-op if the participant already left.
    async fn close(self) {
        if let Some(handle) = self.subscription {
            let usecase = DisconnectSubscriberUseCase::new(self.state.broadcaster.clone());
            usecase.execute(handle.id).await;
        }
    }
}
