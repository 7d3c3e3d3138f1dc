use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Request payload for registering a title.
/// `year` defaults to the game's year, or to `date`'s year without a game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChampionshipRequest {
    pub player_id: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub game_id: Option<String>,
}
