//! Car image entity model.

use serde::Serialize;
use sqlx::FromRow;

use carhive_core::types::DbId;

/// A row from the `images` table. Each row is one photo of a car.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Image {
    pub id: DbId,
    pub car_id: DbId,
    pub url: String,
}
