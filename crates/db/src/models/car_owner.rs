//! Car owner entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use carhive_core::owners::OwnerType;
use carhive_core::types::{DbId, Timestamp};

/// A row from the `car_owners` table.
///
/// `owner_type` is stored as text; the valid values are the ones
/// [`OwnerType`] serializes to.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CarOwner {
    pub id: DbId,
    pub name: String,
    pub owner_type: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub profile_picture: String,
    pub registration_date: Timestamp,
}

/// DTO for creating a new car owner.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCarOwner {
    pub name: String,
    pub owner_type: OwnerType,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub profile_picture: String,
}

/// DTO for updating an existing car owner. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateCarOwner {
    pub name: Option<String>,
    pub owner_type: Option<OwnerType>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub profile_picture: Option<String>,
}
