//! Payment entity model.

use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

use carhive_core::types::{DbId, Timestamp};

/// A row from the `payments` table. A reservation may have several
/// payments (deposit, balance, late fees).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Payment {
    pub id: DbId,
    pub reservation_id: DbId,
    /// Amount paid, NUMERIC(10,2).
    pub amount: Decimal,
    /// Free-form payment method label, e.g. `"card"` or `"cash"`.
    pub method: String,
    pub payment_date: Timestamp,
}
