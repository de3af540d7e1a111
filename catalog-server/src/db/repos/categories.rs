//! Category repository

use sqlx::PgPool;

use super::{in_use_error, DbError};
use crate::models::{Category, NewCategory};

const RESOURCE: &str = "Category";

/// Category repository
pub struct CategoryRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CategoryRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Category>, DbError> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT id, title, description FROM categories ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(categories)
    }

    pub async fn get(&self, id: i64) -> Result<Category, DbError> {
        sqlx::query_as::<_, Category>(
            "SELECT id, title, description FROM categories WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found(RESOURCE, id))
    }

    /// Insert a category. Duplicate titles are accepted.
    pub async fn create(&self, new: &NewCategory) -> Result<Category, DbError> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (title, description)
            VALUES ($1, $2)
            RETURNING id, title, description
            "#,
        )
        .bind(&new.title)
        .bind(&new.description)
        .fetch_one(self.pool)
        .await?;

        tracing::debug!(id = category.id, "created category");
        Ok(category)
    }

    /// Delete a category.
    ///
    /// Fails with `InUse` while any product still points at it.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(|e| in_use_error(e, RESOURCE, id))?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found(RESOURCE, id));
        }

        tracing::debug!(id, "deleted category");
        Ok(())
    }
}
