//! Booking request entity model.

use serde::Serialize;
use sqlx::FromRow;

use carhive_core::types::{DbId, Timestamp};

/// A row from the `booking_requests` table.
///
/// `status` is stored as text; the valid values are the ones
/// `carhive_core::booking::RequestStatus` serializes to. New rows
/// default to `pending`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BookingRequest {
    pub id: DbId,
    pub car_id: DbId,
    pub user_id: DbId,
    pub request_date: Timestamp,
    pub status: String,
}
