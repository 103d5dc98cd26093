//! Repository for the `payments` table.

use rust_decimal::Decimal;
use sqlx::PgPool;

use carhive_core::types::DbId;

use crate::models::payment::Payment;

/// Column list for `payments` queries.
const COLUMNS: &str = "id, reservation_id, amount, method, payment_date";

/// Provides CRUD operations for payments.
pub struct PaymentRepo;

impl PaymentRepo {
    /// Record a payment against a reservation, returning the created row.
    ///
    /// `payment_date` is set to now.
    pub async fn create(
        pool: &PgPool,
        reservation_id: DbId,
        amount: Decimal,
        method: &str,
    ) -> Result<Payment, sqlx::Error> {
        let query = format!(
            "INSERT INTO payments (reservation_id, amount, method)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Payment>(&query)
            .bind(reservation_id)
            .bind(amount)
            .bind(method)
            .fetch_one(pool)
            .await
    }

    /// Find a payment by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Payment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM payments WHERE id = $1");
        sqlx::query_as::<_, Payment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the payments recorded against a reservation, oldest first.
    pub async fn list_by_reservation(
        pool: &PgPool,
        reservation_id: DbId,
    ) -> Result<Vec<Payment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM payments
             WHERE reservation_id = $1
             ORDER BY payment_date"
        );
        sqlx::query_as::<_, Payment>(&query)
            .bind(reservation_id)
            .fetch_all(pool)
            .await
    }

    /// Sum of all payments against a reservation. Zero when none exist.
    pub async fn total_for_reservation(
        pool: &PgPool,
        reservation_id: DbId,
    ) -> Result<Decimal, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COALESCE(SUM(amount), 0) FROM payments WHERE reservation_id = $1",
        )
        .bind(reservation_id)
        .fetch_one(pool)
        .await
    }

    /// Delete a payment by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM payments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
