//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::{net::SocketAddr, time::Duration};

use agora_server::{
    domain::SessionConfig,
    infrastructure::dto::{
        http::ParticipantListDto,
        websocket::{ClientRequest, ServerMessage},
    },
};
use futures_util::{SinkExt, StreamExt};
use tokio::{net::TcpListener, sync::oneshot};
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async, tungstenite::Message};

pub type WsClient = WebSocketStream<MaybeTlsStream<tokio::net::TcpStream>>;

const RECV_TIMEOUT: Duration = Duration::from_secs(5);

/// A server running in the test's runtime on an ephemeral port
pub struct TestServer {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
}

impl TestServer {
    pub async fn start() -> Self {
        Self::start_with(SessionConfig::default()).await
    }

    pub async fn start_with(config: SessionConfig) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Failed to read local addr");
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            let shutdown = async {
                let _ = shutdown_rx.await;
            };
            if let Err(e) = agora_server::serve(listener, config, shutdown).await {
                eprintln!("test server stopped: {e}");
            }
        });

        Self {
            addr,
            shutdown: Some(shutdown_tx),
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn ws_url(&self) -> String {
        format!("ws://{}/ws", self.addr)
    }

    pub async fn participants(&self) -> Vec<String> {
        let body: ParticipantListDto = reqwest::get(format!("{}/api/participants", self.base_url()))
            .await
            .expect("Failed to send request")
            .json()
            .await
            .expect("Failed to parse JSON");
        body.participants
    }

    /// Poll the roster until it equals `expected`
    pub async fn wait_for_participants(&self, expected: &[&str]) {
        let deadline = tokio::time::Instant::now() + RECV_TIMEOUT;
        loop {
            let current = self.participants().await;
            if current == expected {
                return;
            }
            assert!(
                tokio::time::Instant::now() < deadline,
                "roster {current:?} never became {expected:?}"
            );
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
    }

    pub async fn connect(&self) -> WsClient {
        let (ws, _) = connect_async(self.ws_url())
            .await
            .expect("Failed to connect WebSocket");
        ws
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}

pub async fn send_request(ws: &mut WsClient, request: &ClientRequest) {
    let json = serde_json::to_string(request).expect("Failed to encode request");
    ws.send(Message::Text(json.into()))
        .await
        .expect("Failed to send frame");
}

pub async fn join(ws: &mut WsClient, name: &str) {
    send_request(
        ws,
        &ClientRequest::Join {
            user_name: name.to_string(),
        },
    )
    .await;
}

/// Next `ServerMessage`, skipping non-text frames
pub async fn recv_message(ws: &mut WsClient) -> ServerMessage {
    loop {
        let frame = tokio::time::timeout(RECV_TIMEOUT, ws.next())
            .await
            .expect("Timed out waiting for a message")
            .expect("Connection closed")
            .expect("WebSocket error");
        if let Message::Text(text) = frame {
            return serde_json::from_str(text.as_str()).expect("Failed to parse message");
        }
    }
}

/// Assert that nothing arrives within a short grace period
pub async fn assert_silent(ws: &mut WsClient) {
    let result = tokio::time::timeout(Duration::from_millis(200), ws.next()).await;
    assert!(result.is_err(), "unexpected frame: {result:?}");
}
