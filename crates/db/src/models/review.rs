//! Review entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use carhive_core::types::{DbId, Timestamp};

/// A row from the `reviews` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Review {
    pub id: DbId,
    pub car_id: DbId,
    pub user_id: DbId,
    /// Non-negative star count.
    pub rating: i32,
    pub body: String,
    pub review_date: Timestamp,
}

/// DTO for creating a new review.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReview {
    pub car_id: DbId,
    pub user_id: DbId,
    pub rating: i32,
    pub body: String,
}
