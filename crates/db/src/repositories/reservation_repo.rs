//! Repository for the `reservations` table.

use sqlx::PgPool;

use carhive_core::types::DbId;

use crate::models::reservation::Reservation;

/// Column list for `reservations` queries.
const COLUMNS: &str = "id, car_id, user_id, reservation_date, status";

/// Provides CRUD operations for reservations.
pub struct ReservationRepo;

impl ReservationRepo {
    /// Reserve a car for a user, returning the created row.
    ///
    /// The row starts in `confirmed` status with `reservation_date` set
    /// to now.
    pub async fn create(
        pool: &PgPool,
        car_id: DbId,
        user_id: DbId,
    ) -> Result<Reservation, sqlx::Error> {
        let query = format!(
            "INSERT INTO reservations (car_id, user_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reservation>(&query)
            .bind(car_id)
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    /// Find a reservation by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Reservation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reservations WHERE id = $1");
        sqlx::query_as::<_, Reservation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a user's reservations, most recent first.
    pub async fn list_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<Reservation>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reservations
             WHERE user_id = $1
             ORDER BY reservation_date DESC"
        );
        sqlx::query_as::<_, Reservation>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// List a car's reservations, most recent first.
    pub async fn list_by_car(pool: &PgPool, car_id: DbId) -> Result<Vec<Reservation>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reservations
             WHERE car_id = $1
             ORDER BY reservation_date DESC"
        );
        sqlx::query_as::<_, Reservation>(&query)
            .bind(car_id)
            .fetch_all(pool)
            .await
    }

    /// Cancel a confirmed reservation.
    ///
    /// Returns `true` if the reservation was confirmed and is now
    /// cancelled, `false` if it does not exist or was already cancelled.
    pub async fn cancel(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE reservations SET status = 'cancelled'
             WHERE id = $1 AND status = 'confirmed'",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a reservation by ID. Returns `true` if a row was removed.
    ///
    /// Cascades to the reservation's payments.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM reservations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
