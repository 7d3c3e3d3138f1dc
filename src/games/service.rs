use std::sync::Arc;
use tracing::{debug, info, instrument};

use super::{
    models::{Game, GoalTally},
    repository::GameRepository,
    types::{AttendanceRequest, GameDetails, GameRequest, GoalRequest},
};
use crate::{players::repository::PlayerRepository, shared::AppError};

/// Service for games, goal tallies and attendance
pub struct GameService {
    repository: Arc<dyn GameRepository + Send + Sync>,
    player_repository: Arc<dyn PlayerRepository + Send + Sync>,
}

impl GameService {
    pub fn new(
        repository: Arc<dyn GameRepository + Send + Sync>,
        player_repository: Arc<dyn PlayerRepository + Send + Sync>,
    ) -> Self {
        Self {
            repository,
            player_repository,
        }
    }

    #[instrument(skip(self))]
    pub async fn create_game(&self, request: GameRequest) -> Result<Game, AppError> {
        let game = Game::new(request.date, request.game_type);
        self.repository.create_game(&game).await?;

        info!(game_id = %game.id, date = %game.date, game_type = %game.game_type, "Game created");
        Ok(game)
    }

    pub async fn list_games(&self) -> Result<Vec<Game>, AppError> {
        self.repository.list_games().await
    }

    #[instrument(skip(self))]
    pub async fn get_game(&self, game_id: &str) -> Result<Game, AppError> {
        self.repository
            .get_game(game_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Game {} not found", game_id)))
    }

    #[instrument(skip(self))]
    pub async fn get_game_details(&self, game_id: &str) -> Result<GameDetails, AppError> {
        let game = self.get_game(game_id).await?;
        let (goals, attendance) = futures::try_join!(
            self.repository.list_goals_for_game(game_id),
            self.repository.get_attendance(game_id),
        )?;

        Ok(GameDetails {
            game,
            goals,
            attendance,
        })
    }

    #[instrument(skip(self))]
    pub async fn delete_game(&self, game_id: &str) -> Result<(), AppError> {
        self.repository.delete_game(game_id).await?;
        info!(game_id = %game_id, "Game deleted");
        Ok(())
    }

    pub async fn list_goals_for_game(&self, game_id: &str) -> Result<Vec<GoalTally>, AppError> {
        self.get_game(game_id).await?;
        self.repository.list_goals_for_game(game_id).await
    }

    /// Adds goals to a player's tally for a game. Repeated calls for the same
    /// player and game grow the same tally.
    #[instrument(skip(self, request), fields(player_id = %request.player_id, count = request.count))]
    pub async fn record_goals(
        &self,
        game_id: &str,
        request: GoalRequest,
    ) -> Result<GoalTally, AppError> {
        if request.count == 0 {
            return Err(AppError::Validation(
                "Goal count must be at least 1".to_string(),
            ));
        }

        self.get_game(game_id).await?;
        self.ensure_player(&request.player_id).await?;

        let tally = self
            .repository
            .record_goals(game_id, &request.player_id, request.count)
            .await?;

        info!(goal_id = %tally.id, total = tally.count, "Goals recorded");
        Ok(tally)
    }

    #[instrument(skip(self))]
    pub async fn delete_goal(&self, goal_id: &str) -> Result<(), AppError> {
        self.repository.delete_goal(goal_id).await
    }

    /// Replaces the confirmed list; duplicates keep their first position
    #[instrument(skip(self, request), fields(requested = request.player_ids.len()))]
    pub async fn set_attendance(
        &self,
        game_id: &str,
        request: AttendanceRequest,
    ) -> Result<Vec<String>, AppError> {
        self.get_game(game_id).await?;

        let mut player_ids: Vec<String> = Vec::with_capacity(request.player_ids.len());
        for player_id in request.player_ids {
            if !player_ids.contains(&player_id) {
                player_ids.push(player_id);
            }
        }
        for player_id in &player_ids {
            self.ensure_player(player_id).await?;
        }

        self.repository.set_attendance(game_id, &player_ids).await?;
        debug!(game_id = %game_id, confirmed = player_ids.len(), "Attendance saved");
        Ok(player_ids)
    }

    pub async fn get_attendance(&self, game_id: &str) -> Result<Vec<String>, AppError> {
        self.get_game(game_id).await?;
        self.repository.get_attendance(game_id).await
    }

    async fn ensure_player(&self, player_id: &str) -> Result<(), AppError> {
        match self.player_repository.get_player(player_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound(format!(
                "Player {} not found",
                player_id
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::{repository::InMemoryGameRepository, GameType};
    use crate::players::{
        repository::InMemoryPlayerRepository, AttendanceTendency, Player, PlayerRequest, Position,
    };
    use chrono::NaiveDate;

    fn player(name: &str) -> Player {
        Player::new(PlayerRequest {
            name: name.to_string(),
            position: Position::Forward,
            rating: 4.0,
            attendance: AttendanceTendency::Regular,
            photo_url: None,
        })
        .unwrap()
    }

    async fn service_with(players: Vec<Player>) -> GameService {
        GameService::new(
            Arc::new(InMemoryGameRepository::new()),
            Arc::new(InMemoryPlayerRepository::with_players(players)),
        )
    }

    fn game_request() -> GameRequest {
        GameRequest {
            date: NaiveDate::from_ymd_opt(2024, 2, 10).unwrap(),
            game_type: GameType::Pelada,
        }
    }

    #[tokio::test]
    async fn test_record_goals_accumulates_per_player() {
        let tostao = player("Tostão");
        let service = service_with(vec![tostao.clone()]).await;
        let game = service.create_game(game_request()).await.unwrap();

        for _ in 0..3 {
            service
                .record_goals(
                    &game.id,
                    GoalRequest {
                        player_id: tostao.id.clone(),
                        count: 1,
                    },
                )
                .await
                .unwrap();
        }

        let goals = service.list_goals_for_game(&game.id).await.unwrap();
        assert_eq!(goals.len(), 1);
        assert_eq!(goals[0].count, 3);
    }

    #[tokio::test]
    async fn test_record_goals_rejects_zero_and_unknown_player() {
        let service = service_with(vec![]).await;
        let game = service.create_game(game_request()).await.unwrap();

        let zero = service
            .record_goals(
                &game.id,
                GoalRequest {
                    player_id: "x".to_string(),
                    count: 0,
                },
            )
            .await;
        assert!(matches!(zero, Err(AppError::Validation(_))));

        let unknown = service
            .record_goals(
                &game.id,
                GoalRequest {
                    player_id: "x".to_string(),
                    count: 1,
                },
            )
            .await;
        assert!(matches!(unknown, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_set_attendance_deduplicates() {
        let a = player("A");
        let b = player("B");
        let service = service_with(vec![a.clone(), b.clone()]).await;
        let game = service.create_game(game_request()).await.unwrap();

        let saved = service
            .set_attendance(
                &game.id,
                AttendanceRequest {
                    player_ids: vec![a.id.clone(), b.id.clone(), a.id.clone()],
                },
            )
            .await
            .unwrap();
        assert_eq!(saved, vec![a.id.clone(), b.id.clone()]);

        let details = service.get_game_details(&game.id).await.unwrap();
        assert_eq!(details.attendance, saved);
        assert!(details.goals.is_empty());
    }
}
