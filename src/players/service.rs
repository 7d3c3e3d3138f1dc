use std::sync::Arc;
use tracing::{debug, info, instrument};

use super::{models::Player, repository::PlayerRepository, types::PlayerRequest};
use crate::shared::AppError;

/// Service for handling roster business logic
pub struct PlayerService {
    repository: Arc<dyn PlayerRepository + Send + Sync>,
}

impl PlayerService {
    pub fn new(repository: Arc<dyn PlayerRepository + Send + Sync>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create_player(&self, request: PlayerRequest) -> Result<Player, AppError> {
        let player = Player::new(request)?;
        self.repository.create_player(&player).await?;

        info!(player_id = %player.id, "Player added to roster");
        Ok(player)
    }

    pub async fn list_players(&self) -> Result<Vec<Player>, AppError> {
        self.repository.list_players().await
    }

    #[instrument(skip(self))]
    pub async fn get_player(&self, player_id: &str) -> Result<Player, AppError> {
        self.repository
            .get_player(player_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Player {} not found", player_id)))
    }

    #[instrument(skip(self, request))]
    pub async fn update_player(
        &self,
        player_id: &str,
        request: PlayerRequest,
    ) -> Result<Player, AppError> {
        let player = Player::with_id(player_id.to_string(), request)?;
        self.repository.update_player(&player).await?;

        debug!(player_id = %player.id, "Player updated");
        Ok(player)
    }

    /// Removes a player. Goal tallies and titles that still reference the
    /// player are left in place and skipped by the rankings.
    #[instrument(skip(self))]
    pub async fn delete_player(&self, player_id: &str) -> Result<(), AppError> {
        self.repository.delete_player(player_id).await?;
        info!(player_id = %player_id, "Player removed from roster");
        Ok(())
    }
}
