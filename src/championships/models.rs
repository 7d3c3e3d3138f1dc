use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A title won by a player. When tied to a game, `year` is that game's year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Championship {
    pub id: String,
    pub player_id: String,
    pub year: i32,
    pub date: NaiveDate,
    pub game_id: Option<String>,
}

impl Championship {
    pub fn new(player_id: String, year: i32, date: NaiveDate, game_id: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            player_id,
            year,
            date,
            game_id,
        }
    }
}
