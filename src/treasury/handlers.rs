use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{models::Transaction, service::TreasuryService, types::TransactionRequest};
use crate::auth::{require_access, require_modify, AuthClaims, Resource};
use crate::shared::{AppError, AppState};

/// GET /transactions
#[instrument(name = "list_transactions", skip(state, claims))]
pub async fn list_transactions(
    State(state): State<AppState>,
    Extension(claims): Extension<AuthClaims>,
) -> Result<Json<Vec<Transaction>>, AppError> {
    require_access(&claims, Resource::Treasury)?;

    let service = TreasuryService::new(Arc::clone(&state.transaction_repository));
    let transactions = service.list_transactions().await?;

    info!(transaction_count = transactions.len(), "Transactions listed successfully");
    Ok(Json(transactions))
}

/// POST /transactions
#[instrument(name = "create_transaction", skip(state, claims, request))]
pub async fn create_transaction(
    State(state): State<AppState>,
    Extension(claims): Extension<AuthClaims>,
    Json(request): Json<TransactionRequest>,
) -> Result<(StatusCode, Json<Transaction>), AppError> {
    require_modify(&claims, Resource::Treasury)?;

    let service = TreasuryService::new(Arc::clone(&state.transaction_repository));
    let transaction = service.create_transaction(request).await?;
    Ok((StatusCode::CREATED, Json(transaction)))
}

/// DELETE /transactions/:id
#[instrument(name = "delete_transaction", skip(state, claims))]
pub async fn delete_transaction(
    State(state): State<AppState>,
    Extension(claims): Extension<AuthClaims>,
    Path(transaction_id): Path<String>,
) -> Result<StatusCode, AppError> {
    require_modify(&claims, Resource::Treasury)?;

    let service = TreasuryService::new(Arc::clone(&state.transaction_repository));
    service.delete_transaction(&transaction_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
