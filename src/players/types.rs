use serde::{Deserialize, Serialize};

use super::models::{AttendanceTendency, Position};

/// Request payload for creating or updating a player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerRequest {
    pub name: String,
    pub position: Position,
    pub rating: f32,
    pub attendance: AttendanceTendency,
    #[serde(default)]
    pub photo_url: Option<String>,
}
