//! HTTP API response DTOs.

use serde::{Deserialize, Serialize};

/// Current roster for the participants endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantListDto {
    /// Participant names in join order
    pub participants: Vec<String>,
    pub count: usize,
}
