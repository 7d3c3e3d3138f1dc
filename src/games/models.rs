use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use uuid::Uuid;

use crate::stats::Dated;

/// Casual weekly match or championship match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum GameType {
    Pelada,
    Campeonato,
}

/// Database model for games table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
    pub date: NaiveDate,
    pub game_type: GameType,
}

impl Game {
    pub fn new(date: NaiveDate, game_type: GameType) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date,
            game_type,
        }
    }
}

impl Dated for Game {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

/// Goals scored by one player in one game.
/// There is at most one tally per (game, player); new goals add to `count`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalTally {
    pub id: String,
    pub game_id: String,
    pub player_id: String,
    pub count: u32,
}

impl GoalTally {
    pub fn new(game_id: String, player_id: String, count: u32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            game_id,
            player_id,
            count,
        }
    }
}
