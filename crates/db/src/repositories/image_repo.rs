//! Repository for the `images` table.

use sqlx::PgPool;

use carhive_core::types::DbId;

use crate::models::image::Image;

/// Column list for `images` queries.
const COLUMNS: &str = "id, car_id, url";

/// Provides CRUD operations for car images.
pub struct ImageRepo;

impl ImageRepo {
    /// Attach an image to a car, returning the created row.
    pub async fn create(pool: &PgPool, car_id: DbId, url: &str) -> Result<Image, sqlx::Error> {
        let query = format!(
            "INSERT INTO images (car_id, url)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Image>(&query)
            .bind(car_id)
            .bind(url)
            .fetch_one(pool)
            .await
    }

    /// Find an image by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Image>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM images WHERE id = $1");
        sqlx::query_as::<_, Image>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a car's images in insertion order.
    pub async fn list_by_car(pool: &PgPool, car_id: DbId) -> Result<Vec<Image>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM images WHERE car_id = $1 ORDER BY id");
        sqlx::query_as::<_, Image>(&query)
            .bind(car_id)
            .fetch_all(pool)
            .await
    }

    /// Delete an image by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM images WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
