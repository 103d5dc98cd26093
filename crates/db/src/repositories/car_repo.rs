//! Repository for the `cars` table.

use sqlx::PgPool;

use carhive_core::types::DbId;

use crate::models::car::{Car, CreateCar, UpdateCar};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, owner_id, model, year, color, location, availability, \
                       rental_price, additional_features";

/// Provides CRUD operations for car listings.
pub struct CarRepo;

impl CarRepo {
    /// Insert a new car, returning the created row.
    ///
    /// If `availability` is `None` in the input, defaults to `true`.
    pub async fn create(pool: &PgPool, input: &CreateCar) -> Result<Car, sqlx::Error> {
        let query = format!(
            "INSERT INTO cars (owner_id, model, year, color, location, availability,
                               rental_price, additional_features)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, TRUE), $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Car>(&query)
            .bind(input.owner_id)
            .bind(&input.model)
            .bind(input.year)
            .bind(&input.color)
            .bind(&input.location)
            .bind(input.availability)
            .bind(input.rental_price)
            .bind(&input.additional_features)
            .fetch_one(pool)
            .await
    }

    /// Find a car by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Car>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cars WHERE id = $1");
        sqlx::query_as::<_, Car>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all cars.
    pub async fn list(pool: &PgPool) -> Result<Vec<Car>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cars ORDER BY id");
        sqlx::query_as::<_, Car>(&query).fetch_all(pool).await
    }

    /// List all cars belonging to one owner.
    pub async fn list_by_owner(pool: &PgPool, owner_id: DbId) -> Result<Vec<Car>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cars WHERE owner_id = $1 ORDER BY id");
        sqlx::query_as::<_, Car>(&query)
            .bind(owner_id)
            .fetch_all(pool)
            .await
    }

    /// List available cars, optionally filtered by exact location.
    pub async fn list_available(
        pool: &PgPool,
        location: Option<&str>,
    ) -> Result<Vec<Car>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM cars
             WHERE availability = TRUE
               AND ($1::TEXT IS NULL OR location = $1)
             ORDER BY id"
        );
        sqlx::query_as::<_, Car>(&query)
            .bind(location)
            .fetch_all(pool)
            .await
    }

    /// Update a car. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCar,
    ) -> Result<Option<Car>, sqlx::Error> {
        let query = format!(
            "UPDATE cars SET
                model = COALESCE($2, model),
                year = COALESCE($3, year),
                color = COALESCE($4, color),
                location = COALESCE($5, location),
                availability = COALESCE($6, availability),
                rental_price = COALESCE($7, rental_price),
                additional_features = COALESCE($8, additional_features)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Car>(&query)
            .bind(id)
            .bind(&input.model)
            .bind(input.year)
            .bind(&input.color)
            .bind(&input.location)
            .bind(input.availability)
            .bind(input.rental_price)
            .bind(&input.additional_features)
            .fetch_optional(pool)
            .await
    }

    /// Flip a car's availability flag. Returns `true` if the row was updated.
    pub async fn set_availability(
        pool: &PgPool,
        id: DbId,
        available: bool,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE cars SET availability = $2 WHERE id = $1")
            .bind(id)
            .bind(available)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a car by ID. Returns `true` if a row was removed.
    ///
    /// Cascades to the car's images, booking requests, reservations,
    /// and reviews.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cars WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
