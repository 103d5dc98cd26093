//! Repository for the `reviews` table.

use rust_decimal::Decimal;
use sqlx::PgPool;

use carhive_core::types::DbId;

use crate::models::review::{CreateReview, Review};

/// Column list for `reviews` queries.
const COLUMNS: &str = "id, car_id, user_id, rating, body, review_date";

/// Provides CRUD operations for reviews.
pub struct ReviewRepo;

impl ReviewRepo {
    /// Insert a new review, returning the created row.
    ///
    /// `review_date` is set to now.
    pub async fn create(pool: &PgPool, input: &CreateReview) -> Result<Review, sqlx::Error> {
        let query = format!(
            "INSERT INTO reviews (car_id, user_id, rating, body)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(input.car_id)
            .bind(input.user_id)
            .bind(input.rating)
            .bind(&input.body)
            .fetch_one(pool)
            .await
    }

    /// Find a review by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Review>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reviews WHERE id = $1");
        sqlx::query_as::<_, Review>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a car's reviews, most recent first.
    pub async fn list_by_car(pool: &PgPool, car_id: DbId) -> Result<Vec<Review>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reviews
             WHERE car_id = $1
             ORDER BY review_date DESC"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(car_id)
            .fetch_all(pool)
            .await
    }

    /// List the reviews a user has written, most recent first.
    pub async fn list_by_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Review>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reviews
             WHERE user_id = $1
             ORDER BY review_date DESC"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Average rating across a car's reviews, `None` when it has none.
    pub async fn average_rating(
        pool: &PgPool,
        car_id: DbId,
    ) -> Result<Option<Decimal>, sqlx::Error> {
        sqlx::query_scalar("SELECT AVG(rating) FROM reviews WHERE car_id = $1")
            .bind(car_id)
            .fetch_one(pool)
            .await
    }

    /// Delete a review by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
