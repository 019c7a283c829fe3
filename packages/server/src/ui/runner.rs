//! Server startup.

use std::{future::Future, sync::Arc};

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::{
    config::ServerConfig,
    domain::SessionConfig,
    error::ServerError,
    infrastructure::broadcaster::InMemorySessionBroadcaster,
    ui::{
        handler::{get_participants, health_check, websocket_handler},
        signal::shutdown_signal,
        state::AppState,
    },
};

/// Bind the configured address and serve until Ctrl-C / SIGTERM.
///
/// # Errors
///
/// Returns `ServerError` if the address cannot be bound or serving fails.
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let addr = config.socket_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;

    tracing::info!("Listening on {}", addr);
    serve(listener, config.session_config(), shutdown_signal()).await
}

/// Serve one session on an already bound listener until `shutdown` resolves.
///
/// # Errors
///
/// Returns `ServerError::Serve` if the underlying server fails.
pub async fn serve<F>(
    listener: TcpListener,
    session_config: SessionConfig,
    shutdown: F,
) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let state = Arc::new(AppState {
        broadcaster: Arc::new(InMemorySessionBroadcaster::new(session_config)),
    });

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(ServerError::Serve)
}

fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/ws", get(websocket_handler))
        .route("/api/health", get(health_check))
        .route("/api/participants", get(get_participants))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
