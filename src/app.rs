use axum::{
    middleware,
    routing::{delete, get},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{auth, championships, games, players, shared::AppState, stats, treasury};

/// Builds the HTTP API. Everything except `/health` needs a bearer token.
pub fn router(state: AppState) -> Router {
    let protected = Router::new()
        .route(
            "/players",
            get(players::list_players).post(players::create_player),
        )
        .route(
            "/players/:id",
            get(players::get_player)
                .put(players::update_player)
                .delete(players::delete_player),
        )
        .route("/games", get(games::list_games).post(games::create_game))
        .route(
            "/games/:id",
            get(games::get_game).delete(games::delete_game),
        )
        .route(
            "/games/:id/attendance",
            get(games::get_attendance).put(games::set_attendance),
        )
        .route(
            "/games/:id/goals",
            get(games::list_game_goals).post(games::record_goals),
        )
        .route("/goals/:id", delete(games::delete_goal))
        .route(
            "/transactions",
            get(treasury::list_transactions).post(treasury::create_transaction),
        )
        .route("/transactions/:id", delete(treasury::delete_transaction))
        .route(
            "/championships",
            get(championships::list_championships).post(championships::create_championship),
        )
        .route(
            "/championships/:id",
            delete(championships::delete_championship),
        )
        .route("/stats/periods", get(stats::list_periods))
        .route("/stats/top-scorers", get(stats::get_top_scorers))
        .route("/stats/balance", get(stats::get_balance))
        .route("/stats/championships", get(stats::get_championship_ranking))
        .layer(middleware::from_fn_with_state(state.clone(), auth::jwt_auth));

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Router with permissive CORS for local SPA development
pub fn router_with_cors(state: AppState) -> Router {
    router(state).layer(CorsLayer::permissive())
}
