use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{models::Championship, service::ChampionshipService, types::ChampionshipRequest};
use crate::auth::{require_access, require_modify, AuthClaims, Resource};
use crate::shared::{AppError, AppState};

fn service(state: &AppState) -> ChampionshipService {
    ChampionshipService::new(
        Arc::clone(&state.championship_repository),
        Arc::clone(&state.game_repository),
        Arc::clone(&state.player_repository),
    )
}

/// GET /championships
#[instrument(name = "list_championships", skip(state, claims))]
pub async fn list_championships(
    State(state): State<AppState>,
    Extension(claims): Extension<AuthClaims>,
) -> Result<Json<Vec<Championship>>, AppError> {
    require_access(&claims, Resource::Championships)?;

    let championships = service(&state).list_championships().await?;
    info!(championship_count = championships.len(), "Championships listed successfully");
    Ok(Json(championships))
}

/// POST /championships
#[instrument(name = "create_championship", skip(state, claims, request))]
pub async fn create_championship(
    State(state): State<AppState>,
    Extension(claims): Extension<AuthClaims>,
    Json(request): Json<ChampionshipRequest>,
) -> Result<(StatusCode, Json<Championship>), AppError> {
    require_modify(&claims, Resource::Championships)?;

    let championship = service(&state).create_championship(request).await?;
    Ok((StatusCode::CREATED, Json(championship)))
}

/// DELETE /championships/:id
#[instrument(name = "delete_championship", skip(state, claims))]
pub async fn delete_championship(
    State(state): State<AppState>,
    Extension(claims): Extension<AuthClaims>,
    Path(championship_id): Path<String>,
) -> Result<StatusCode, AppError> {
    require_modify(&claims, Resource::Championships)?;

    service(&state).delete_championship(&championship_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
