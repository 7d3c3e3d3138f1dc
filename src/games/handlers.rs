use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{
    models::{Game, GoalTally},
    service::GameService,
    types::{AttendanceRequest, GameDetails, GameRequest, GoalRequest},
};
use crate::auth::{require_access, require_modify, AuthClaims, Resource};
use crate::shared::{AppError, AppState};

fn service(state: &AppState) -> GameService {
    GameService::new(
        Arc::clone(&state.game_repository),
        Arc::clone(&state.player_repository),
    )
}

/// GET /games
#[instrument(name = "list_games", skip(state, claims))]
pub async fn list_games(
    State(state): State<AppState>,
    Extension(claims): Extension<AuthClaims>,
) -> Result<Json<Vec<Game>>, AppError> {
    require_access(&claims, Resource::Games)?;

    let games = service(&state).list_games().await?;
    info!(game_count = games.len(), "Games listed successfully");
    Ok(Json(games))
}

/// POST /games
#[instrument(name = "create_game", skip(state, claims))]
pub async fn create_game(
    State(state): State<AppState>,
    Extension(claims): Extension<AuthClaims>,
    Json(request): Json<GameRequest>,
) -> Result<(StatusCode, Json<Game>), AppError> {
    require_modify(&claims, Resource::Games)?;

    let game = service(&state).create_game(request).await?;
    Ok((StatusCode::CREATED, Json(game)))
}

/// GET /games/:id
/// Returns the game with its goal tallies and attendance
#[instrument(name = "get_game", skip(state, claims))]
pub async fn get_game(
    State(state): State<AppState>,
    Extension(claims): Extension<AuthClaims>,
    Path(game_id): Path<String>,
) -> Result<Json<GameDetails>, AppError> {
    require_access(&claims, Resource::Games)?;

    Ok(Json(service(&state).get_game_details(&game_id).await?))
}

/// DELETE /games/:id
#[instrument(name = "delete_game", skip(state, claims))]
pub async fn delete_game(
    State(state): State<AppState>,
    Extension(claims): Extension<AuthClaims>,
    Path(game_id): Path<String>,
) -> Result<StatusCode, AppError> {
    require_modify(&claims, Resource::Games)?;

    service(&state).delete_game(&game_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /games/:id/goals
#[instrument(name = "list_game_goals", skip(state, claims))]
pub async fn list_game_goals(
    State(state): State<AppState>,
    Extension(claims): Extension<AuthClaims>,
    Path(game_id): Path<String>,
) -> Result<Json<Vec<GoalTally>>, AppError> {
    require_access(&claims, Resource::Goals)?;

    Ok(Json(service(&state).list_goals_for_game(&game_id).await?))
}

/// POST /games/:id/goals
#[instrument(name = "record_goals", skip(state, claims))]
pub async fn record_goals(
    State(state): State<AppState>,
    Extension(claims): Extension<AuthClaims>,
    Path(game_id): Path<String>,
    Json(request): Json<GoalRequest>,
) -> Result<Json<GoalTally>, AppError> {
    require_modify(&claims, Resource::Goals)?;

    Ok(Json(service(&state).record_goals(&game_id, request).await?))
}

/// DELETE /goals/:id
#[instrument(name = "delete_goal", skip(state, claims))]
pub async fn delete_goal(
    State(state): State<AppState>,
    Extension(claims): Extension<AuthClaims>,
    Path(goal_id): Path<String>,
) -> Result<StatusCode, AppError> {
    require_modify(&claims, Resource::Goals)?;

    service(&state).delete_goal(&goal_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /games/:id/attendance
#[instrument(name = "get_attendance", skip(state, claims))]
pub async fn get_attendance(
    State(state): State<AppState>,
    Extension(claims): Extension<AuthClaims>,
    Path(game_id): Path<String>,
) -> Result<Json<Vec<String>>, AppError> {
    require_access(&claims, Resource::Games)?;

    Ok(Json(service(&state).get_attendance(&game_id).await?))
}

/// PUT /games/:id/attendance
#[instrument(name = "set_attendance", skip(state, claims, request))]
pub async fn set_attendance(
    State(state): State<AppState>,
    Extension(claims): Extension<AuthClaims>,
    Path(game_id): Path<String>,
    Json(request): Json<AttendanceRequest>,
) -> Result<Json<Vec<String>>, AppError> {
    require_modify(&claims, Resource::Games)?;

    Ok(Json(service(&state).set_attendance(&game_id, request).await?))
}
