//! Reservation entity model.

use serde::Serialize;
use sqlx::FromRow;

use carhive_core::types::{DbId, Timestamp};

/// A row from the `reservations` table.
///
/// `status` is stored as text; the valid values are the ones
/// `carhive_core::booking::ReservationStatus` serializes to. New rows
/// default to `confirmed`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Reservation {
    pub id: DbId,
    pub car_id: DbId,
    pub user_id: DbId,
    pub reservation_date: Timestamp,
    pub status: String,
}
