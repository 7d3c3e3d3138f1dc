use axum::{
    extract::{Query, State},
    Extension, Json,
};
use tracing::instrument;

use super::{
    balance::BalanceSummary,
    periods::QuarterPeriod,
    ranking::RankedPlayer,
    service::StatsService,
    types::{ChampionshipRankingQuery, ChampionshipRankingResponse, TopScorersQuery},
};
use crate::auth::{require_access, AuthClaims, Resource};
use crate::shared::{AppError, AppState};

/// GET /stats/periods
#[instrument(name = "list_periods", skip(state, claims))]
pub async fn list_periods(
    State(state): State<AppState>,
    Extension(claims): Extension<AuthClaims>,
) -> Result<Json<Vec<QuarterPeriod>>, AppError> {
    require_access(&claims, Resource::Statistics)?;

    Ok(Json(StatsService::from_state(&state).periods().await))
}

/// GET /stats/top-scorers?period=2024-q3&game_type=campeonato
#[instrument(name = "get_top_scorers", skip(state, claims))]
pub async fn get_top_scorers(
    State(state): State<AppState>,
    Extension(claims): Extension<AuthClaims>,
    Query(query): Query<TopScorersQuery>,
) -> Result<Json<Vec<RankedPlayer>>, AppError> {
    require_access(&claims, Resource::Statistics)?;

    Ok(Json(StatsService::from_state(&state).top_scorers(query).await?))
}

/// GET /stats/balance
#[instrument(name = "get_balance", skip(state, claims))]
pub async fn get_balance(
    State(state): State<AppState>,
    Extension(claims): Extension<AuthClaims>,
) -> Result<Json<BalanceSummary>, AppError> {
    require_access(&claims, Resource::Treasury)?;

    Ok(Json(StatsService::from_state(&state).balance().await))
}

/// GET /stats/championships?year=2024
#[instrument(name = "get_championship_ranking", skip(state, claims))]
pub async fn get_championship_ranking(
    State(state): State<AppState>,
    Extension(claims): Extension<AuthClaims>,
    Query(query): Query<ChampionshipRankingQuery>,
) -> Result<Json<ChampionshipRankingResponse>, AppError> {
    require_access(&claims, Resource::Statistics)?;

    Ok(Json(
        StatsService::from_state(&state)
            .championship_ranking(query.year)
            .await,
    ))
}
