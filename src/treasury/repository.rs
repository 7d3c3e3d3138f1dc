use async_trait::async_trait;
use sqlx::{postgres::PgRow, PgPool, Row};
use tokio::sync::RwLock;
use tracing::{debug, instrument, warn};

use super::models::Transaction;
use crate::shared::{parse_column, AppError};

/// Trait for treasury ledger operations
#[async_trait]
pub trait TransactionRepository {
    async fn create_transaction(&self, transaction: &Transaction) -> Result<(), AppError>;
    /// Most recent first
    async fn list_transactions(&self) -> Result<Vec<Transaction>, AppError>;
    async fn delete_transaction(&self, transaction_id: &str) -> Result<(), AppError>;
}

/// In-memory implementation of TransactionRepository for development and testing
pub struct InMemoryTransactionRepository {
    transactions: RwLock<Vec<Transaction>>,
}

impl Default for InMemoryTransactionRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryTransactionRepository {
    pub fn new() -> Self {
        Self {
            transactions: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl TransactionRepository for InMemoryTransactionRepository {
    #[instrument(skip(self, transaction))]
    async fn create_transaction(&self, transaction: &Transaction) -> Result<(), AppError> {
        debug!(
            transaction_id = %transaction.id,
            direction = %transaction.direction,
            amount = %transaction.amount,
            "Creating transaction in memory"
        );

        let mut transactions = self.transactions.write().await;
        if transactions.iter().any(|t| t.id == transaction.id) {
            return Err(AppError::DatabaseError(
                "Transaction already exists".to_string(),
            ));
        }
        transactions.push(transaction.clone());
        Ok(())
    }

    async fn list_transactions(&self) -> Result<Vec<Transaction>, AppError> {
        let mut list = self.transactions.read().await.clone();
        // stable: same-day entries keep insertion order
        list.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(list)
    }

    #[instrument(skip(self))]
    async fn delete_transaction(&self, transaction_id: &str) -> Result<(), AppError> {
        let mut transactions = self.transactions.write().await;
        let before = transactions.len();
        transactions.retain(|t| t.id != transaction_id);

        if transactions.len() == before {
            warn!(transaction_id = %transaction_id, "Transaction not found for deletion in memory");
            return Err(AppError::NotFound("Transaction not found".to_string()));
        }
        Ok(())
    }
}

/// PostgreSQL implementation of the treasury ledger
pub struct PostgresTransactionRepository {
    pool: PgPool,
}

impl PostgresTransactionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn transaction_from_row(row: &PgRow) -> Result<Transaction, AppError> {
    let direction: String = row.try_get("direction")?;
    Ok(Transaction {
        id: row.try_get("id")?,
        date: row.try_get("date")?,
        direction: parse_column(&direction)?,
        amount: row.try_get("amount")?,
        description: row.try_get("description")?,
    })
}

#[async_trait]
impl TransactionRepository for PostgresTransactionRepository {
    #[instrument(skip(self, transaction))]
    async fn create_transaction(&self, transaction: &Transaction) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO transactions (id, date, direction, amount, description) VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(&transaction.id)
        .bind(transaction.date)
        .bind(transaction.direction.to_string())
        .bind(transaction.amount)
        .bind(&transaction.description)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            warn!(error = %e, "Failed to create transaction in database");
            AppError::DatabaseError(e.to_string())
        })?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_transactions(&self) -> Result<Vec<Transaction>, AppError> {
        let rows = sqlx::query(
            "SELECT id, date, direction, amount, description FROM transactions ORDER BY date DESC, created_at",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(transaction_from_row).collect()
    }

    #[instrument(skip(self))]
    async fn delete_transaction(&self, transaction_id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM transactions WHERE id = $1")
            .bind(transaction_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            warn!(transaction_id = %transaction_id, "Transaction not found for deletion");
            return Err(AppError::NotFound("Transaction not found".to_string()));
        }
        Ok(())
    }
}
