use std::collections::HashMap;

use super::{
    periods::DateRange,
    ranking::{rank, PlayerIndex, RankedPlayer},
};
use crate::games::{Game, GameType, GoalTally};
use crate::players::Player;

/// Which games count towards the scorer table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScorerFilter {
    pub period: Option<DateRange>,
    pub game_type: Option<GameType>,
}

impl ScorerFilter {
    pub fn admits(&self, game: &Game) -> bool {
        self.game_type.map_or(true, |t| t == game.game_type)
            && self.period.map_or(true, |p| p.contains(game.date))
    }
}

/// Goals per player for the games admitted by `filter`, best scorer first.
///
/// Tallies pointing at a missing game and players missing from `players`
/// are skipped.
pub fn top_scorers(
    goals: &[GoalTally],
    games: &[Game],
    players: &[Player],
    filter: &ScorerFilter,
) -> Vec<RankedPlayer> {
    let games_by_id: HashMap<&str, &Game> =
        games.iter().map(|game| (game.id.as_str(), game)).collect();

    let mut totals: HashMap<String, u32> = HashMap::new();
    for tally in goals {
        let Some(game) = games_by_id.get(tally.game_id.as_str()) else {
            continue;
        };
        if !filter.admits(game) {
            continue;
        }
        let total = totals.entry(tally.player_id.clone()).or_default();
        *total = total.saturating_add(tally.count);
    }

    rank(totals, &PlayerIndex::new(players))
}
