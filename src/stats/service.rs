use tracing::{info, instrument};

use super::{
    balance::{balance, BalanceSummary},
    championship_ranking::{championship_ranking, championship_years, CHAMPIONSHIP_RANKING_LIMIT},
    periods::{generate_periods, QuarterPeriod},
    ranking::RankedPlayer,
    snapshot::{or_empty, LeagueSnapshot, SnapshotSources},
    top_scorers::{top_scorers, ScorerFilter},
    types::{ChampionshipRankingResponse, TopScorersQuery},
};
use crate::shared::{AppError, AppState};

/// Fetches fresh snapshots and runs the rankings over them.
/// Nothing is cached between calls.
pub struct StatsService {
    sources: SnapshotSources,
}

impl StatsService {
    pub fn new(sources: SnapshotSources) -> Self {
        Self { sources }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(SnapshotSources {
            players: state.player_repository.clone(),
            games: state.game_repository.clone(),
            transactions: state.transaction_repository.clone(),
            championships: state.championship_repository.clone(),
        })
    }

    pub async fn snapshot(&self) -> LeagueSnapshot {
        LeagueSnapshot::load(&self.sources).await
    }

    /// Periods that contain at least one game
    #[instrument(skip(self))]
    pub async fn periods(&self) -> Vec<QuarterPeriod> {
        let snapshot = self.snapshot().await;
        generate_periods(&snapshot.games)
    }

    /// Scorer table for an optional period id and game type.
    /// An unknown period id is a validation error.
    #[instrument(skip(self))]
    pub async fn top_scorers(&self, query: TopScorersQuery) -> Result<Vec<RankedPlayer>, AppError> {
        let period = match query.period.as_deref() {
            Some(id) => Some(
                QuarterPeriod::from_id(id)
                    .ok_or_else(|| AppError::Validation(format!("Unknown period {}", id)))?
                    .range(),
            ),
            None => None,
        };
        let filter = ScorerFilter {
            period,
            game_type: query.game_type,
        };

        let snapshot = self.snapshot().await;
        let ranked = top_scorers(&snapshot.goals, &snapshot.games, &snapshot.players, &filter);

        info!(entries = ranked.len(), "Top scorers computed");
        Ok(ranked)
    }

    #[instrument(skip(self))]
    pub async fn balance(&self) -> BalanceSummary {
        let transactions = or_empty(
            "transactions",
            self.sources.transactions.list_transactions().await,
        );
        balance(&transactions)
    }

    /// Title ranking for `year`, defaulting to the most recent year with titles
    #[instrument(skip(self))]
    pub async fn championship_ranking(&self, year: Option<i32>) -> ChampionshipRankingResponse {
        let snapshot = self.snapshot().await;
        let years = championship_years(&snapshot.championships);
        let year = year.or_else(|| years.first().copied());

        let ranking = year
            .map(|year| {
                championship_ranking(
                    &snapshot.championships,
                    &snapshot.players,
                    year,
                    CHAMPIONSHIP_RANKING_LIMIT,
                )
            })
            .unwrap_or_default();

        ChampionshipRankingResponse {
            year,
            years,
            ranking,
        }
    }
}
