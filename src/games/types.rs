use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::models::{Game, GameType, GoalTally};

/// Request payload for scheduling a game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRequest {
    pub date: NaiveDate,
    pub game_type: GameType,
}

/// Request payload for adding goals to a player's tally in a game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalRequest {
    pub player_id: String,
    #[serde(default = "default_goal_count")]
    pub count: u32,
}

fn default_goal_count() -> u32 {
    1
}

/// Request payload replacing the confirmed attendance list of a game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRequest {
    pub player_ids: Vec<String>,
}

/// A game with its tallies and attendance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameDetails {
    #[serde(flatten)]
    pub game: Game,
    pub goals: Vec<GoalTally>,
    pub attendance: Vec<String>,
}
