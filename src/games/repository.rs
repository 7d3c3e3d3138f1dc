use async_trait::async_trait;
use sqlx::{postgres::PgRow, PgPool, Row};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, instrument, warn};

use super::models::{Game, GoalTally};
use crate::shared::{parse_column, AppError};

/// Trait for game, goal tally and attendance storage
#[async_trait]
pub trait GameRepository {
    async fn create_game(&self, game: &Game) -> Result<(), AppError>;
    async fn get_game(&self, game_id: &str) -> Result<Option<Game>, AppError>;
    /// Most recent first
    async fn list_games(&self) -> Result<Vec<Game>, AppError>;
    /// Deletes the game together with its tallies and attendance
    async fn delete_game(&self, game_id: &str) -> Result<(), AppError>;

    async fn list_goals(&self) -> Result<Vec<GoalTally>, AppError>;
    async fn list_goals_for_game(&self, game_id: &str) -> Result<Vec<GoalTally>, AppError>;

    /// Atomically adds `count` goals to the (game, player) tally, creating it
    /// on first use. Returns the tally after the update.
    async fn record_goals(
        &self,
        game_id: &str,
        player_id: &str,
        count: u32,
    ) -> Result<GoalTally, AppError>;
    async fn delete_goal(&self, goal_id: &str) -> Result<(), AppError>;

    /// Replaces the attendance list of a game
    async fn set_attendance(&self, game_id: &str, player_ids: &[String]) -> Result<(), AppError>;
    async fn get_attendance(&self, game_id: &str) -> Result<Vec<String>, AppError>;
}

#[derive(Default)]
struct GameStore {
    games: HashMap<String, Game>,
    goals: Vec<GoalTally>, // insertion order
    attendance: HashMap<String, Vec<String>>,
}

/// In-memory implementation of GameRepository for development and testing
pub struct InMemoryGameRepository {
    store: RwLock<GameStore>,
}

impl Default for InMemoryGameRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryGameRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(GameStore::default()),
        }
    }
}

#[async_trait]
impl GameRepository for InMemoryGameRepository {
    #[instrument(skip(self, game))]
    async fn create_game(&self, game: &Game) -> Result<(), AppError> {
        debug!(game_id = %game.id, date = %game.date, "Creating game in memory");

        let mut store = self.store.write().await;
        if store.games.contains_key(&game.id) {
            warn!(game_id = %game.id, "Game already exists in memory");
            return Err(AppError::DatabaseError("Game already exists".to_string()));
        }
        store.games.insert(game.id.clone(), game.clone());
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_game(&self, game_id: &str) -> Result<Option<Game>, AppError> {
        let store = self.store.read().await;
        Ok(store.games.get(game_id).cloned())
    }

    #[instrument(skip(self))]
    async fn list_games(&self) -> Result<Vec<Game>, AppError> {
        let store = self.store.read().await;
        let mut games: Vec<Game> = store.games.values().cloned().collect();
        games.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.id.cmp(&b.id)));
        Ok(games)
    }

    #[instrument(skip(self))]
    async fn delete_game(&self, game_id: &str) -> Result<(), AppError> {
        let mut store = self.store.write().await;
        if store.games.remove(game_id).is_none() {
            warn!(game_id = %game_id, "Game not found for deletion in memory");
            return Err(AppError::NotFound("Game not found".to_string()));
        }
        store.goals.retain(|goal| goal.game_id != game_id);
        store.attendance.remove(game_id);

        debug!(game_id = %game_id, "Game and its tallies deleted from memory");
        Ok(())
    }

    async fn list_goals(&self) -> Result<Vec<GoalTally>, AppError> {
        let store = self.store.read().await;
        Ok(store.goals.clone())
    }

    async fn list_goals_for_game(&self, game_id: &str) -> Result<Vec<GoalTally>, AppError> {
        let store = self.store.read().await;
        Ok(store
            .goals
            .iter()
            .filter(|goal| goal.game_id == game_id)
            .cloned()
            .collect())
    }

    #[instrument(skip(self))]
    async fn record_goals(
        &self,
        game_id: &str,
        player_id: &str,
        count: u32,
    ) -> Result<GoalTally, AppError> {
        let mut store = self.store.write().await;
        if !store.games.contains_key(game_id) {
            return Err(AppError::NotFound("Game not found".to_string()));
        }

        if let Some(existing) = store
            .goals
            .iter_mut()
            .find(|goal| goal.game_id == game_id && goal.player_id == player_id)
        {
            existing.count = existing.count.saturating_add(count);
            debug!(goal_id = %existing.id, total = existing.count, "Goal tally incremented");
            return Ok(existing.clone());
        }

        let tally = GoalTally::new(game_id.to_string(), player_id.to_string(), count);
        debug!(goal_id = %tally.id, total = tally.count, "Goal tally created");
        store.goals.push(tally.clone());
        Ok(tally)
    }

    #[instrument(skip(self))]
    async fn delete_goal(&self, goal_id: &str) -> Result<(), AppError> {
        let mut store = self.store.write().await;
        let before = store.goals.len();
        store.goals.retain(|goal| goal.id != goal_id);

        if store.goals.len() == before {
            warn!(goal_id = %goal_id, "Goal tally not found for deletion in memory");
            return Err(AppError::NotFound("Goal tally not found".to_string()));
        }
        Ok(())
    }

    #[instrument(skip(self, player_ids))]
    async fn set_attendance(&self, game_id: &str, player_ids: &[String]) -> Result<(), AppError> {
        let mut store = self.store.write().await;
        if !store.games.contains_key(game_id) {
            return Err(AppError::NotFound("Game not found".to_string()));
        }
        store
            .attendance
            .insert(game_id.to_string(), player_ids.to_vec());

        debug!(game_id = %game_id, confirmed = player_ids.len(), "Attendance replaced");
        Ok(())
    }

    async fn get_attendance(&self, game_id: &str) -> Result<Vec<String>, AppError> {
        let store = self.store.read().await;
        Ok(store.attendance.get(game_id).cloned().unwrap_or_default())
    }
}

/// PostgreSQL implementation of game repository
pub struct PostgresGameRepository {
    pool: PgPool,
}

impl PostgresGameRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn game_from_row(row: &PgRow) -> Result<Game, AppError> {
    let game_type: String = row.try_get("game_type")?;
    Ok(Game {
        id: row.try_get("id")?,
        date: row.try_get("date")?,
        game_type: parse_column(&game_type)?,
    })
}

fn goal_from_row(row: &PgRow) -> Result<GoalTally, AppError> {
    let count: i32 = row.try_get("count")?;
    Ok(GoalTally {
        id: row.try_get("id")?,
        game_id: row.try_get("game_id")?,
        player_id: row.try_get("player_id")?,
        count: u32::try_from(count)
            .map_err(|_| AppError::DatabaseError(format!("Negative goal count {}", count)))?,
    })
}

fn count_param(count: u32) -> Result<i32, AppError> {
    i32::try_from(count).map_err(|_| AppError::Validation(format!("Goal count {} too large", count)))
}

#[async_trait]
impl GameRepository for PostgresGameRepository {
    #[instrument(skip(self, game))]
    async fn create_game(&self, game: &Game) -> Result<(), AppError> {
        debug!(game_id = %game.id, date = %game.date, "Creating game in database");

        sqlx::query("INSERT INTO games (id, date, game_type) VALUES ($1, $2, $3)")
            .bind(&game.id)
            .bind(game.date)
            .bind(game.game_type.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                warn!(error = %e, "Failed to create game in database");
                AppError::DatabaseError(e.to_string())
            })?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_game(&self, game_id: &str) -> Result<Option<Game>, AppError> {
        let row = sqlx::query("SELECT id, date, game_type FROM games WHERE id = $1")
            .bind(game_id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(game_from_row).transpose()
    }

    #[instrument(skip(self))]
    async fn list_games(&self) -> Result<Vec<Game>, AppError> {
        let rows = sqlx::query("SELECT id, date, game_type FROM games ORDER BY date DESC, id")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(game_from_row).collect()
    }

    #[instrument(skip(self))]
    async fn delete_game(&self, game_id: &str) -> Result<(), AppError> {
        // goals and game_attendance cascade on delete
        let result = sqlx::query("DELETE FROM games WHERE id = $1")
            .bind(game_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            warn!(game_id = %game_id, "Game not found for deletion");
            return Err(AppError::NotFound("Game not found".to_string()));
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_goals(&self) -> Result<Vec<GoalTally>, AppError> {
        let rows = sqlx::query("SELECT id, game_id, player_id, count FROM goals ORDER BY created_at, id")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(goal_from_row).collect()
    }

    #[instrument(skip(self))]
    async fn list_goals_for_game(&self, game_id: &str) -> Result<Vec<GoalTally>, AppError> {
        let rows = sqlx::query(
            "SELECT id, game_id, player_id, count FROM goals WHERE game_id = $1 ORDER BY created_at, id",
        )
        .bind(game_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(goal_from_row).collect()
    }

    #[instrument(skip(self))]
    async fn record_goals(
        &self,
        game_id: &str,
        player_id: &str,
        count: u32,
    ) -> Result<GoalTally, AppError> {
        let candidate = GoalTally::new(game_id.to_string(), player_id.to_string(), count);

        let row = sqlx::query(
            "INSERT INTO goals (id, game_id, player_id, count) VALUES ($1, $2, $3, $4) \
             ON CONFLICT (game_id, player_id) DO UPDATE SET count = goals.count + EXCLUDED.count \
             RETURNING id, game_id, player_id, count",
        )
        .bind(&candidate.id)
        .bind(game_id)
        .bind(player_id)
        .bind(count_param(count)?)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            warn!(error = %e, game_id = %game_id, "Failed to record goals");
            AppError::DatabaseError(e.to_string())
        })?;

        goal_from_row(&row)
    }

    #[instrument(skip(self))]
    async fn delete_goal(&self, goal_id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM goals WHERE id = $1")
            .bind(goal_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Goal tally not found".to_string()));
        }
        Ok(())
    }

    #[instrument(skip(self, player_ids))]
    async fn set_attendance(&self, game_id: &str, player_ids: &[String]) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM game_attendance WHERE game_id = $1")
            .bind(game_id)
            .execute(&mut *tx)
            .await?;

        for (position, player_id) in player_ids.iter().enumerate() {
            sqlx::query(
                "INSERT INTO game_attendance (game_id, player_id, position) VALUES ($1, $2, $3)",
            )
            .bind(game_id)
            .bind(player_id)
            .bind(position as i32)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        debug!(game_id = %game_id, confirmed = player_ids.len(), "Attendance replaced in database");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_attendance(&self, game_id: &str) -> Result<Vec<String>, AppError> {
        let rows = sqlx::query(
            "SELECT player_id FROM game_attendance WHERE game_id = $1 ORDER BY position",
        )
        .bind(game_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| row.try_get::<String, _>("player_id").map_err(AppError::from))
            .collect()
    }
}
