//! Notification entity model.

use serde::Serialize;
use sqlx::FromRow;

use carhive_core::types::{DbId, Timestamp};

/// A row from the `notifications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Notification {
    pub id: DbId,
    pub user_id: DbId,
    /// Free-form category label, e.g. `"booking_update"`.
    pub kind: String,
    pub message: String,
    pub notification_date: Timestamp,
}
