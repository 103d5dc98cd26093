//! Car listing entity model and DTOs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use carhive_core::types::DbId;

/// A row from the `cars` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Car {
    pub id: DbId,
    pub owner_id: DbId,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub location: String,
    pub availability: bool,
    /// Rental price per day, NUMERIC(10,2).
    pub rental_price: Decimal,
    pub additional_features: String,
}

/// DTO for creating a new car listing.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCar {
    pub owner_id: DbId,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub location: String,
    /// Defaults to `true` (available) if omitted.
    pub availability: Option<bool>,
    pub rental_price: Decimal,
    pub additional_features: String,
}

/// DTO for updating an existing car. All fields are optional.
///
/// `owner_id` is deliberately absent: a listing stays with the owner
/// who created it.
#[derive(Debug, Deserialize)]
pub struct UpdateCar {
    pub model: Option<String>,
    pub year: Option<i32>,
    pub color: Option<String>,
    pub location: Option<String>,
    pub availability: Option<bool>,
    pub rental_price: Option<Decimal>,
    pub additional_features: Option<String>,
}
