use async_trait::async_trait;
use sqlx::{postgres::PgRow, PgPool, Row};
use tokio::sync::RwLock;
use tracing::{debug, instrument, warn};

use super::models::Championship;
use crate::shared::AppError;

#[async_trait]
pub trait ChampionshipRepository {
    async fn create_championship(&self, championship: &Championship) -> Result<(), AppError>;
    /// Most recent first
    async fn list_championships(&self) -> Result<Vec<Championship>, AppError>;
    async fn delete_championship(&self, championship_id: &str) -> Result<(), AppError>;
}

/// In-memory implementation of ChampionshipRepository for development and testing
pub struct InMemoryChampionshipRepository {
    championships: RwLock<Vec<Championship>>,
}

impl Default for InMemoryChampionshipRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryChampionshipRepository {
    pub fn new() -> Self {
        Self {
            championships: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ChampionshipRepository for InMemoryChampionshipRepository {
    #[instrument(skip(self, championship))]
    async fn create_championship(&self, championship: &Championship) -> Result<(), AppError> {
        debug!(championship_id = %championship.id, year = championship.year, "Creating championship in memory");

        let mut championships = self.championships.write().await;
        if championships.iter().any(|c| c.id == championship.id) {
            return Err(AppError::DatabaseError(
                "Championship already exists".to_string(),
            ));
        }
        championships.push(championship.clone());
        Ok(())
    }

    async fn list_championships(&self) -> Result<Vec<Championship>, AppError> {
        let mut list = self.championships.read().await.clone();
        list.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(list)
    }

    #[instrument(skip(self))]
    async fn delete_championship(&self, championship_id: &str) -> Result<(), AppError> {
        let mut championships = self.championships.write().await;
        let before = championships.len();
        championships.retain(|c| c.id != championship_id);

        if championships.len() == before {
            warn!(championship_id = %championship_id, "Championship not found for deletion in memory");
            return Err(AppError::NotFound("Championship not found".to_string()));
        }
        Ok(())
    }
}

/// PostgreSQL implementation of championship repository
pub struct PostgresChampionshipRepository {
    pool: PgPool,
}

impl PostgresChampionshipRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn championship_from_row(row: &PgRow) -> Result<Championship, AppError> {
    Ok(Championship {
        id: row.try_get("id")?,
        player_id: row.try_get("player_id")?,
        year: row.try_get("year")?,
        date: row.try_get("date")?,
        game_id: row.try_get("game_id")?,
    })
}

#[async_trait]
impl ChampionshipRepository for PostgresChampionshipRepository {
    #[instrument(skip(self, championship))]
    async fn create_championship(&self, championship: &Championship) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO championships (id, player_id, year, date, game_id) VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(&championship.id)
        .bind(&championship.player_id)
        .bind(championship.year)
        .bind(championship.date)
        .bind(&championship.game_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            warn!(error = %e, "Failed to create championship in database");
            AppError::DatabaseError(e.to_string())
        })?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_championships(&self) -> Result<Vec<Championship>, AppError> {
        let rows = sqlx::query(
            "SELECT id, player_id, year, date, game_id FROM championships ORDER BY date DESC, id",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(championship_from_row).collect()
    }

    #[instrument(skip(self))]
    async fn delete_championship(&self, championship_id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM championships WHERE id = $1")
            .bind(championship_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Championship not found".to_string()));
        }
        Ok(())
    }
}
