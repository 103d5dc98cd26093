//! Admin entity model and DTOs.

use serde::Deserialize;
use sqlx::FromRow;

use carhive_core::types::{DbId, Timestamp};

/// Full admin row from the `admins` table.
///
/// Contains the password hash -- NEVER serialize this to external output.
///
/// Unlike `users.username`, `admins.username` carries no unique
/// constraint; admins are looked up by email.
#[derive(Debug, Clone, FromRow)]
pub struct Admin {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub profile_picture: String,
    pub registration_date: Timestamp,
}

/// DTO for creating a new admin.
///
/// `password_hash` must already be hashed; see `carhive_core::password`.
#[derive(Debug, Deserialize)]
pub struct CreateAdmin {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub profile_picture: String,
}
