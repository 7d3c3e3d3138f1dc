use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use uuid::Uuid;

use super::types::PlayerRequest;
use crate::shared::AppError;

/// Lowest skill rating a player may have
pub const RATING_MIN: f32 = 1.0;
/// Highest skill rating a player may have
pub const RATING_MAX: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Position {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

/// How often the player usually shows up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AttendanceTendency {
    Regular,
    Occasional,
    Rare,
}

/// Database model for players table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: String, // UUID v4 as string
    pub name: String,
    pub position: Position,
    pub rating: f32,
    pub attendance: AttendanceTendency,
    pub photo_url: Option<String>,
}

impl Player {
    /// Creates a new player with a generated ID from a validated request
    pub fn new(request: PlayerRequest) -> Result<Self, AppError> {
        Self::with_id(Uuid::new_v4().to_string(), request)
    }

    /// Builds a player keeping an existing ID, used for updates
    pub fn with_id(id: String, request: PlayerRequest) -> Result<Self, AppError> {
        let name = request.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::Validation("Player name cannot be empty".to_string()));
        }
        validate_rating(request.rating)?;

        Ok(Self {
            id,
            name,
            position: request.position,
            rating: request.rating,
            attendance: request.attendance,
            photo_url: request.photo_url.filter(|url| !url.trim().is_empty()),
        })
    }
}

pub fn validate_rating(rating: f32) -> Result<(), AppError> {
    if !(RATING_MIN..=RATING_MAX).contains(&rating) {
        return Err(AppError::Validation(format!(
            "Rating {} outside [{}, {}]",
            rating, RATING_MIN, RATING_MAX
        )));
    }
    Ok(())
}
