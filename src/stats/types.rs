use serde::{Deserialize, Serialize};

use super::ranking::RankedPlayer;
use crate::games::GameType;

/// Query string of GET /stats/top-scorers
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TopScorersQuery {
    /// Period id as produced by the period generator; absent means all time
    pub period: Option<String>,
    pub game_type: Option<GameType>,
}

/// Query string of GET /stats/championships
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChampionshipRankingQuery {
    pub year: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChampionshipRankingResponse {
    /// Year the ranking was computed for; absent when there are no titles
    pub year: Option<i32>,
    /// Years available for selection, most recent first
    pub years: Vec<i32>,
    pub ranking: Vec<RankedPlayer>,
}
