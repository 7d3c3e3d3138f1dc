use std::collections::{BTreeSet, HashMap};

use super::ranking::{rank, PlayerIndex, RankedPlayer};
use crate::championships::Championship;
use crate::players::Player;

/// How many title holders the ranking shows
pub const CHAMPIONSHIP_RANKING_LIMIT: usize = 10;

/// Titles per player in `year`, most titles first, cut to `limit` entries.
/// Each championship record counts as one title.
pub fn championship_ranking(
    championships: &[Championship],
    players: &[Player],
    year: i32,
    limit: usize,
) -> Vec<RankedPlayer> {
    let mut totals: HashMap<String, u32> = HashMap::new();
    for championship in championships.iter().filter(|c| c.year == year) {
        let total = totals.entry(championship.player_id.clone()).or_default();
        *total = total.saturating_add(1);
    }

    let mut ranked = rank(totals, &PlayerIndex::new(players));
    ranked.truncate(limit);
    ranked
}

/// Distinct years with at least one title, most recent first
pub fn championship_years(championships: &[Championship]) -> Vec<i32> {
    championships
        .iter()
        .map(|c| c.year)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .rev()
        .collect()
}
