use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use uuid::Uuid;

use super::types::TransactionRequest;
use crate::shared::AppError;

/// Money entering (dues, sponsorship) or leaving (field rent, balls) the kitty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Direction {
    Inflow,
    Outflow,
}

/// Largest amount the `NUMERIC(12, 2)` column holds, exclusive
pub const AMOUNT_LIMIT: Decimal = Decimal::from_parts(1_410_065_408, 2, 0, false, 0);

/// Amounts are stored with cents precision
pub const AMOUNT_SCALE: u32 = 2;

/// Database model for transactions table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub date: NaiveDate,
    pub direction: Direction,
    pub amount: Decimal, // always positive; direction carries the sign
    pub description: String,
}

impl Transaction {
    pub fn new(request: TransactionRequest) -> Result<Self, AppError> {
        if request.amount <= Decimal::ZERO {
            return Err(AppError::Validation(format!(
                "Transaction amount must be positive, got {}",
                request.amount
            )));
        }
        if request.amount.normalize().scale() > AMOUNT_SCALE {
            return Err(AppError::Validation(format!(
                "Transaction amount {} has more than {} decimal places",
                request.amount, AMOUNT_SCALE
            )));
        }
        if request.amount >= AMOUNT_LIMIT {
            return Err(AppError::Validation(format!(
                "Transaction amount must be below {}, got {}",
                AMOUNT_LIMIT, request.amount
            )));
        }

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            date: request.date,
            direction: request.direction,
            amount: request.amount,
            description: request.description.trim().to_string(),
        })
    }

    /// Amount with the sign implied by the direction
    pub fn signed_amount(&self) -> Decimal {
        match self.direction {
            Direction::Inflow => self.amount,
            Direction::Outflow => -self.amount,
        }
    }
}
