use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{models::Player, service::PlayerService, types::PlayerRequest};
use crate::auth::{require_access, require_modify, AuthClaims, Resource};
use crate::shared::{AppError, AppState};

/// GET /players
#[instrument(name = "list_players", skip(state, claims))]
pub async fn list_players(
    State(state): State<AppState>,
    Extension(claims): Extension<AuthClaims>,
) -> Result<Json<Vec<Player>>, AppError> {
    require_access(&claims, Resource::Roster)?;

    let service = PlayerService::new(Arc::clone(&state.player_repository));
    let players = service.list_players().await?;

    info!(player_count = players.len(), "Players listed successfully");
    Ok(Json(players))
}

/// GET /players/:id
#[instrument(name = "get_player", skip(state, claims))]
pub async fn get_player(
    State(state): State<AppState>,
    Extension(claims): Extension<AuthClaims>,
    Path(player_id): Path<String>,
) -> Result<Json<Player>, AppError> {
    require_access(&claims, Resource::Roster)?;

    let service = PlayerService::new(Arc::clone(&state.player_repository));
    Ok(Json(service.get_player(&player_id).await?))
}

/// POST /players
#[instrument(name = "create_player", skip(state, claims, request))]
pub async fn create_player(
    State(state): State<AppState>,
    Extension(claims): Extension<AuthClaims>,
    Json(request): Json<PlayerRequest>,
) -> Result<(StatusCode, Json<Player>), AppError> {
    require_modify(&claims, Resource::Roster)?;

    let service = PlayerService::new(Arc::clone(&state.player_repository));
    let player = service.create_player(request).await?;

    info!(player_id = %player.id, name = %player.name, "Player created successfully");
    Ok((StatusCode::CREATED, Json(player)))
}

/// PUT /players/:id
#[instrument(name = "update_player", skip(state, claims, request))]
pub async fn update_player(
    State(state): State<AppState>,
    Extension(claims): Extension<AuthClaims>,
    Path(player_id): Path<String>,
    Json(request): Json<PlayerRequest>,
) -> Result<Json<Player>, AppError> {
    require_modify(&claims, Resource::Roster)?;

    let service = PlayerService::new(Arc::clone(&state.player_repository));
    Ok(Json(service.update_player(&player_id, request).await?))
}

/// DELETE /players/:id
#[instrument(name = "delete_player", skip(state, claims))]
pub async fn delete_player(
    State(state): State<AppState>,
    Extension(claims): Extension<AuthClaims>,
    Path(player_id): Path<String>,
) -> Result<StatusCode, AppError> {
    require_modify(&claims, Resource::Roster)?;

    let service = PlayerService::new(Arc::clone(&state.player_repository));
    service.delete_player(&player_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Role;
    use crate::shared::test_utils::{claims_for, AppStateBuilder};
    use axum::{
        body::Body,
        http::Request,
        routing::{get, post},
        Router,
    };
    use tower::ServiceExt; // for `oneshot`

    fn app(state: AppState, role: Role) -> Router {
        Router::new()
            .route("/players", post(create_player).get(list_players))
            .route("/players/:id", get(get_player))
            .layer(Extension(claims_for(role)))
            .with_state(state)
    }

    fn create_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/players")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    const VALID_BODY: &str =
        r#"{"name": "Garrincha", "position": "forward", "rating": 4.8, "attendance": "regular"}"#;

    #[tokio::test]
    async fn test_admin_creates_player() {
        let state = AppStateBuilder::new().build();

        let response = app(state.clone(), Role::Admin)
            .oneshot(create_request(VALID_BODY))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let player: Player = serde_json::from_slice(&body).unwrap();
        assert_eq!(player.name, "Garrincha");

        let stored = state.player_repository.list_players().await.unwrap();
        assert_eq!(stored.len(), 1);
    }

    #[tokio::test]
    async fn test_player_role_cannot_create_player() {
        let state = AppStateBuilder::new().build();

        let response = app(state, Role::Player)
            .oneshot(create_request(VALID_BODY))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_out_of_range_rating_is_bad_request() {
        let state = AppStateBuilder::new().build();
        let body =
            r#"{"name": "Garrincha", "position": "forward", "rating": 9, "attendance": "regular"}"#;

        let response = app(state, Role::Admin)
            .oneshot(create_request(body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_position_is_unprocessable() {
        let state = AppStateBuilder::new().build();
        let body =
            r#"{"name": "Garrincha", "position": "libero", "rating": 3, "attendance": "regular"}"#;

        let response = app(state, Role::Admin)
            .oneshot(create_request(body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_get_missing_player_is_not_found() {
        let state = AppStateBuilder::new().build();
        let request = Request::builder()
            .uri("/players/missing")
            .body(Body::empty())
            .unwrap();

        let response = app(state, Role::Viewer).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
