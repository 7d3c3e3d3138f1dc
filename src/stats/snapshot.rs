use std::sync::Arc;
use tracing::{debug, instrument, warn};

use crate::championships::{repository::ChampionshipRepository, Championship};
use crate::games::{repository::GameRepository, Game, GoalTally};
use crate::players::{repository::PlayerRepository, Player};
use crate::shared::AppError;
use crate::treasury::repository::TransactionRepository;

/// Point-in-time copy of every dataset the rankings read.
/// The ledger is not part of it; only the balance reads transactions.
#[derive(Debug, Clone, Default)]
pub struct LeagueSnapshot {
    pub players: Vec<Player>,
    pub games: Vec<Game>,
    pub goals: Vec<GoalTally>,
    pub championships: Vec<Championship>,
}

/// Repositories the statistics read from
#[derive(Clone)]
pub struct SnapshotSources {
    pub players: Arc<dyn PlayerRepository + Send + Sync>,
    pub games: Arc<dyn GameRepository + Send + Sync>,
    pub transactions: Arc<dyn TransactionRepository + Send + Sync>,
    pub championships: Arc<dyn ChampionshipRepository + Send + Sync>,
}

impl LeagueSnapshot {
    /// Fetches all datasets concurrently. A failed fetch leaves that dataset
    /// empty; the others are still returned.
    #[instrument(skip(sources))]
    pub async fn load(sources: &SnapshotSources) -> Self {
        let (players, games, goals, championships) = futures::join!(
            sources.players.list_players(),
            sources.games.list_games(),
            sources.games.list_goals(),
            sources.championships.list_championships(),
        );

        let snapshot = Self {
            players: or_empty("players", players),
            games: or_empty("games", games),
            goals: or_empty("goals", goals),
            championships: or_empty("championships", championships),
        };

        debug!(
            players = snapshot.players.len(),
            games = snapshot.games.len(),
            goals = snapshot.goals.len(),
            championships = snapshot.championships.len(),
            "Snapshot loaded"
        );
        snapshot
    }
}

/// Degrades a failed fetch to an empty dataset
pub(crate) fn or_empty<T>(dataset: &'static str, result: Result<Vec<T>, AppError>) -> Vec<T> {
    match result {
        Ok(rows) => rows,
        Err(err) => {
            warn!(dataset, error = %err, "Fetch failed, continuing with an empty dataset");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::championships::repository::InMemoryChampionshipRepository;
    use crate::games::{repository::InMemoryGameRepository, GameType};
    use crate::players::{repository::InMemoryPlayerRepository, AttendanceTendency, Position};
    use crate::treasury::repository::InMemoryTransactionRepository;
    use async_trait::async_trait;
    use chrono::NaiveDate;

    /// Roster backend that is always down
    struct UnavailablePlayerRepository;

    #[async_trait]
    impl PlayerRepository for UnavailablePlayerRepository {
        async fn create_player(&self, _player: &Player) -> Result<(), AppError> {
            Err(AppError::DatabaseError("unavailable".to_string()))
        }
        async fn get_player(&self, _player_id: &str) -> Result<Option<Player>, AppError> {
            Err(AppError::DatabaseError("unavailable".to_string()))
        }
        async fn list_players(&self) -> Result<Vec<Player>, AppError> {
            Err(AppError::DatabaseError("unavailable".to_string()))
        }
        async fn update_player(&self, _player: &Player) -> Result<(), AppError> {
            Err(AppError::DatabaseError("unavailable".to_string()))
        }
        async fn delete_player(&self, _player_id: &str) -> Result<(), AppError> {
            Err(AppError::DatabaseError("unavailable".to_string()))
        }
    }

    async fn sources_with(players: Arc<dyn PlayerRepository + Send + Sync>) -> SnapshotSources {
        let games = Arc::new(InMemoryGameRepository::new());
        let game = Game::new(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(), GameType::Pelada);
        games.create_game(&game).await.unwrap();
        games.record_goals(&game.id, "someone", 2).await.unwrap();

        SnapshotSources {
            players,
            games,
            transactions: Arc::new(InMemoryTransactionRepository::new()),
            championships: Arc::new(InMemoryChampionshipRepository::new()),
        }
    }

    #[tokio::test]
    async fn test_failed_fetch_degrades_to_empty() {
        let sources = sources_with(Arc::new(UnavailablePlayerRepository)).await;

        let snapshot = LeagueSnapshot::load(&sources).await;

        assert!(snapshot.players.is_empty());
        assert_eq!(snapshot.games.len(), 1);
        assert_eq!(snapshot.goals.len(), 1);
    }

    #[tokio::test]
    async fn test_loads_every_dataset() {
        let player = Player {
            id: "someone".to_string(),
            name: "Someone".to_string(),
            position: Position::Goalkeeper,
            rating: 2.0,
            attendance: AttendanceTendency::Rare,
            photo_url: None,
        };
        let sources =
            sources_with(Arc::new(InMemoryPlayerRepository::with_players(vec![player]))).await;

        let snapshot = LeagueSnapshot::load(&sources).await;

        assert_eq!(snapshot.players.len(), 1);
        assert_eq!(snapshot.goals[0].count, 2);
        assert!(snapshot.championships.is_empty());
    }
}
