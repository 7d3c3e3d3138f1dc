use async_trait::async_trait;
use sqlx::{postgres::PgRow, PgPool, Row};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, instrument, warn};

use super::models::Player;
use crate::shared::{parse_column, AppError};

/// Trait for player repository operations.
/// Every read returns owned copies; callers never share the stored rows.
#[async_trait]
pub trait PlayerRepository {
    async fn create_player(&self, player: &Player) -> Result<(), AppError>;
    async fn get_player(&self, player_id: &str) -> Result<Option<Player>, AppError>;
    async fn list_players(&self) -> Result<Vec<Player>, AppError>;
    async fn update_player(&self, player: &Player) -> Result<(), AppError>;
    async fn delete_player(&self, player_id: &str) -> Result<(), AppError>;
}

/// In-memory implementation of PlayerRepository for development and testing
pub struct InMemoryPlayerRepository {
    players: RwLock<HashMap<String, Player>>,
}

impl Default for InMemoryPlayerRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryPlayerRepository {
    /// Creates a new empty in-memory repository
    pub fn new() -> Self {
        Self {
            players: RwLock::new(HashMap::new()),
        }
    }

    /// Creates an in-memory repository with pre-populated players
    pub fn with_players(players: Vec<Player>) -> Self {
        let players = players
            .into_iter()
            .map(|player| (player.id.clone(), player))
            .collect();

        Self {
            players: RwLock::new(players),
        }
    }
}

#[async_trait]
impl PlayerRepository for InMemoryPlayerRepository {
    #[instrument(skip(self, player))]
    async fn create_player(&self, player: &Player) -> Result<(), AppError> {
        debug!(player_id = %player.id, name = %player.name, "Creating player in memory");

        let mut players = self.players.write().await;
        if players.contains_key(&player.id) {
            warn!(player_id = %player.id, "Player already exists in memory");
            return Err(AppError::DatabaseError("Player already exists".to_string()));
        }
        players.insert(player.id.clone(), player.clone());

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_player(&self, player_id: &str) -> Result<Option<Player>, AppError> {
        let players = self.players.read().await;
        Ok(players.get(player_id).cloned())
    }

    #[instrument(skip(self))]
    async fn list_players(&self) -> Result<Vec<Player>, AppError> {
        let players = self.players.read().await;
        let mut list: Vec<Player> = players.values().cloned().collect();
        list.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));

        debug!(player_count = list.len(), "Players listed from memory");
        Ok(list)
    }

    #[instrument(skip(self, player))]
    async fn update_player(&self, player: &Player) -> Result<(), AppError> {
        let mut players = self.players.write().await;
        match players.get_mut(&player.id) {
            Some(existing) => {
                *existing = player.clone();
                debug!(player_id = %player.id, "Player updated in memory");
                Ok(())
            }
            None => {
                warn!(player_id = %player.id, "Player not found for update in memory");
                Err(AppError::NotFound("Player not found".to_string()))
            }
        }
    }

    #[instrument(skip(self))]
    async fn delete_player(&self, player_id: &str) -> Result<(), AppError> {
        let mut players = self.players.write().await;
        if players.remove(player_id).is_none() {
            warn!(player_id = %player_id, "Player not found for deletion in memory");
            return Err(AppError::NotFound("Player not found".to_string()));
        }

        debug!(player_id = %player_id, "Player deleted from memory");
        Ok(())
    }
}

/// PostgreSQL implementation of player repository
pub struct PostgresPlayerRepository {
    pool: PgPool,
}

impl PostgresPlayerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn player_from_row(row: &PgRow) -> Result<Player, AppError> {
    let position: String = row.try_get("position")?;
    let attendance: String = row.try_get("attendance")?;

    Ok(Player {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        position: parse_column(&position)?,
        rating: row.try_get("rating")?,
        attendance: parse_column(&attendance)?,
        photo_url: row.try_get("photo_url")?,
    })
}

#[async_trait]
impl PlayerRepository for PostgresPlayerRepository {
    #[instrument(skip(self, player))]
    async fn create_player(&self, player: &Player) -> Result<(), AppError> {
        debug!(player_id = %player.id, name = %player.name, "Creating player in database");

        sqlx::query(
            "INSERT INTO players (id, name, position, rating, attendance, photo_url) VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(&player.id)
        .bind(&player.name)
        .bind(player.position.to_string())
        .bind(player.rating)
        .bind(player.attendance.to_string())
        .bind(&player.photo_url)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            warn!(error = %e, "Failed to create player in database");
            AppError::DatabaseError(e.to_string())
        })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_player(&self, player_id: &str) -> Result<Option<Player>, AppError> {
        let row = sqlx::query(
            "SELECT id, name, position, rating, attendance, photo_url FROM players WHERE id = $1",
        )
        .bind(player_id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(player_from_row).transpose()
    }

    #[instrument(skip(self))]
    async fn list_players(&self) -> Result<Vec<Player>, AppError> {
        let rows = sqlx::query(
            "SELECT id, name, position, rating, attendance, photo_url FROM players ORDER BY name, id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            warn!(error = %e, "Failed to list players");
            AppError::DatabaseError(e.to_string())
        })?;

        rows.iter().map(player_from_row).collect()
    }

    #[instrument(skip(self, player))]
    async fn update_player(&self, player: &Player) -> Result<(), AppError> {
        let result = sqlx::query(
            "UPDATE players SET name = $2, position = $3, rating = $4, attendance = $5, photo_url = $6 WHERE id = $1",
        )
        .bind(&player.id)
        .bind(&player.name)
        .bind(player.position.to_string())
        .bind(player.rating)
        .bind(player.attendance.to_string())
        .bind(&player.photo_url)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            warn!(player_id = %player.id, "Player not found for update");
            return Err(AppError::NotFound("Player not found".to_string()));
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_player(&self, player_id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM players WHERE id = $1")
            .bind(player_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            warn!(player_id = %player_id, "Player not found for deletion");
            return Err(AppError::NotFound("Player not found".to_string()));
        }
        Ok(())
    }
}
