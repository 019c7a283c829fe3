//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::{infrastructure::dto::http::ParticipantListDto, ui::state::AppState};

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Current participants, in join order
pub async fn get_participants(State(state): State<Arc<AppState>>) -> Json<ParticipantListDto> {
    let roster = state.broadcaster.get_roster().await;

    Json(ParticipantListDto {
        count: roster.len(),
        participants: roster.into_iter().map(String::from).collect(),
    })
}
