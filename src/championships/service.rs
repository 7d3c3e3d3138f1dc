use chrono::Datelike;
use std::sync::Arc;
use tracing::{info, instrument};

use super::{models::Championship, repository::ChampionshipRepository, types::ChampionshipRequest};
use crate::{
    games::repository::GameRepository, players::repository::PlayerRepository, shared::AppError,
};

/// Service for the championship history
pub struct ChampionshipService {
    repository: Arc<dyn ChampionshipRepository + Send + Sync>,
    game_repository: Arc<dyn GameRepository + Send + Sync>,
    player_repository: Arc<dyn PlayerRepository + Send + Sync>,
}

impl ChampionshipService {
    pub fn new(
        repository: Arc<dyn ChampionshipRepository + Send + Sync>,
        game_repository: Arc<dyn GameRepository + Send + Sync>,
        player_repository: Arc<dyn PlayerRepository + Send + Sync>,
    ) -> Self {
        Self {
            repository,
            game_repository,
            player_repository,
        }
    }

    /// Registers a title. The year comes from the linked game when there is
    /// one; a conflicting explicit year is rejected.
    #[instrument(skip(self, request), fields(player_id = %request.player_id))]
    pub async fn create_championship(
        &self,
        request: ChampionshipRequest,
    ) -> Result<Championship, AppError> {
        if self
            .player_repository
            .get_player(&request.player_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Player {} not found",
                request.player_id
            )));
        }

        let year = match &request.game_id {
            Some(game_id) => {
                let game = self
                    .game_repository
                    .get_game(game_id)
                    .await?
                    .ok_or_else(|| AppError::NotFound(format!("Game {} not found", game_id)))?;
                let game_year = game.date.year();
                if let Some(requested) = request.year.filter(|year| *year != game_year) {
                    return Err(AppError::Validation(format!(
                        "Year {} does not match game year {}",
                        requested, game_year
                    )));
                }
                game_year
            }
            None => request.year.unwrap_or_else(|| request.date.year()),
        };

        let championship = Championship::new(request.player_id, year, request.date, request.game_id);
        self.repository.create_championship(&championship).await?;

        info!(championship_id = %championship.id, year, "Championship registered");
        Ok(championship)
    }

    pub async fn list_championships(&self) -> Result<Vec<Championship>, AppError> {
        self.repository.list_championships().await
    }

    #[instrument(skip(self))]
    pub async fn delete_championship(&self, championship_id: &str) -> Result<(), AppError> {
        self.repository.delete_championship(championship_id).await
    }
}
