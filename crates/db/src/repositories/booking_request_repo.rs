//! Repository for the `booking_requests` table.

use sqlx::PgPool;

use carhive_core::booking::RequestStatus;
use carhive_core::types::DbId;

use crate::models::booking_request::BookingRequest;

/// Column list for `booking_requests` queries.
const COLUMNS: &str = "id, car_id, user_id, request_date, status";

/// Provides CRUD operations for booking requests.
pub struct BookingRequestRepo;

impl BookingRequestRepo {
    /// File a booking request for a car, returning the created row.
    ///
    /// The row starts in `pending` status with `request_date` set to now.
    pub async fn create(
        pool: &PgPool,
        car_id: DbId,
        user_id: DbId,
    ) -> Result<BookingRequest, sqlx::Error> {
        let query = format!(
            "INSERT INTO booking_requests (car_id, user_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BookingRequest>(&query)
            .bind(car_id)
            .bind(user_id)
            .fetch_one(pool)
            .await
    }

    /// Find a booking request by internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<BookingRequest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM booking_requests WHERE id = $1");
        sqlx::query_as::<_, BookingRequest>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a user's booking requests, most recent first.
    pub async fn list_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<BookingRequest>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM booking_requests
             WHERE user_id = $1
             ORDER BY request_date DESC"
        );
        sqlx::query_as::<_, BookingRequest>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// List the booking requests filed against a car, most recent first.
    pub async fn list_by_car(
        pool: &PgPool,
        car_id: DbId,
    ) -> Result<Vec<BookingRequest>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM booking_requests
             WHERE car_id = $1
             ORDER BY request_date DESC"
        );
        sqlx::query_as::<_, BookingRequest>(&query)
            .bind(car_id)
            .fetch_all(pool)
            .await
    }

    /// List the pending requests across all of one owner's cars, oldest
    /// first so the owner works through them in arrival order.
    pub async fn list_pending_for_owner(
        pool: &PgPool,
        owner_id: DbId,
    ) -> Result<Vec<BookingRequest>, sqlx::Error> {
        sqlx::query_as::<_, BookingRequest>(
            "SELECT br.id, br.car_id, br.user_id, br.request_date, br.status
             FROM booking_requests br
             INNER JOIN cars c ON br.car_id = c.id
             WHERE c.owner_id = $1 AND br.status = 'pending'
             ORDER BY br.request_date",
        )
        .bind(owner_id)
        .fetch_all(pool)
        .await
    }

    /// Set a request's status. Returns `true` if the row was updated.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: RequestStatus,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE booking_requests SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status.as_str())
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete a booking request by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM booking_requests WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
