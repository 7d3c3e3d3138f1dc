use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::models::Direction;

/// Request payload for registering a treasury movement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRequest {
    pub date: NaiveDate,
    pub direction: Direction,
    pub amount: Decimal,
    #[serde(default)]
    pub description: String,
}
