//! User (renter) entity model and DTOs.

use serde::Deserialize;
use sqlx::FromRow;

use carhive_core::types::{DbId, Timestamp};

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to external output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub phone: String,
    pub profile_picture: String,
    pub registration_date: Timestamp,
}

/// DTO for creating a new user.
///
/// `password_hash` must already be hashed; see `carhive_core::password`.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub phone: String,
    pub profile_picture: String,
}

/// DTO for updating an existing user. All fields are optional.
///
/// The password hash is changed through `UserRepo::update_password`,
/// never through this DTO.
#[derive(Debug, Deserialize)]
pub struct UpdateUser {
    pub username: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub profile_picture: Option<String>,
}
