use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::treasury::{Direction, Transaction};

/// Treasury position. A negative `balance` means the group is in debt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSummary {
    pub total_inflow: Decimal,
    pub total_outflow: Decimal,
    pub balance: Decimal,
}

/// Nets the whole ledger: inflows minus outflows
pub fn balance(transactions: &[Transaction]) -> BalanceSummary {
    let subtotal = |direction: Direction| -> Decimal {
        transactions
            .iter()
            .filter(|tx| tx.direction == direction)
            .map(|tx| tx.amount)
            .sum()
    };

    BalanceSummary {
        total_inflow: subtotal(Direction::Inflow),
        total_outflow: subtotal(Direction::Outflow),
        balance: transactions.iter().map(Transaction::signed_amount).sum(),
    }
}
