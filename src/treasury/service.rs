use std::sync::Arc;
use tracing::{info, instrument};

use super::{models::Transaction, repository::TransactionRepository, types::TransactionRequest};
use crate::shared::AppError;

/// Service for the shared treasury ledger
pub struct TreasuryService {
    repository: Arc<dyn TransactionRepository + Send + Sync>,
}

impl TreasuryService {
    pub fn new(repository: Arc<dyn TransactionRepository + Send + Sync>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self, request), fields(direction = %request.direction, amount = %request.amount))]
    pub async fn create_transaction(
        &self,
        request: TransactionRequest,
    ) -> Result<Transaction, AppError> {
        let transaction = Transaction::new(request)?;
        self.repository.create_transaction(&transaction).await?;

        info!(transaction_id = %transaction.id, "Transaction registered");
        Ok(transaction)
    }

    pub async fn list_transactions(&self) -> Result<Vec<Transaction>, AppError> {
        self.repository.list_transactions().await
    }

    #[instrument(skip(self))]
    pub async fn delete_transaction(&self, transaction_id: &str) -> Result<(), AppError> {
        self.repository.delete_transaction(transaction_id).await?;
        info!(transaction_id = %transaction_id, "Transaction removed");
        Ok(())
    }
}
