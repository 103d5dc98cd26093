//! Repository for the `car_owners` table.

use sqlx::PgPool;

use carhive_core::types::DbId;

use crate::models::car_owner::{CarOwner, CreateCarOwner, UpdateCarOwner};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, owner_type, address, phone, email, profile_picture, registration_date";

/// Provides CRUD operations for car owners.
pub struct CarOwnerRepo;

impl CarOwnerRepo {
    /// Insert a new car owner, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCarOwner) -> Result<CarOwner, sqlx::Error> {
        let query = format!(
            "INSERT INTO car_owners (name, owner_type, address, phone, email, profile_picture)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CarOwner>(&query)
            .bind(&input.name)
            .bind(input.owner_type.as_str())
            .bind(&input.address)
            .bind(&input.phone)
            .bind(&input.email)
            .bind(&input.profile_picture)
            .fetch_one(pool)
            .await
    }

    /// Find a car owner by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<CarOwner>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM car_owners WHERE id = $1");
        sqlx::query_as::<_, CarOwner>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a car owner by email (case-sensitive).
    pub async fn find_by_email(
        pool: &PgPool,
        email: &str,
    ) -> Result<Option<CarOwner>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM car_owners WHERE email = $1");
        sqlx::query_as::<_, CarOwner>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// List all car owners ordered by most recently registered first.
    pub async fn list(pool: &PgPool) -> Result<Vec<CarOwner>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM car_owners ORDER BY registration_date DESC");
        sqlx::query_as::<_, CarOwner>(&query).fetch_all(pool).await
    }

    /// Update a car owner. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCarOwner,
    ) -> Result<Option<CarOwner>, sqlx::Error> {
        let query = format!(
            "UPDATE car_owners SET
                name = COALESCE($2, name),
                owner_type = COALESCE($3, owner_type),
                address = COALESCE($4, address),
                phone = COALESCE($5, phone),
                email = COALESCE($6, email),
                profile_picture = COALESCE($7, profile_picture)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CarOwner>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.owner_type.map(|t| t.as_str()))
            .bind(&input.address)
            .bind(&input.phone)
            .bind(&input.email)
            .bind(&input.profile_picture)
            .fetch_optional(pool)
            .await
    }

    /// Delete a car owner by ID. Returns `true` if a row was removed.
    ///
    /// Cascades to the owner's cars, and from there to everything
    /// attached to those cars.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM car_owners WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
