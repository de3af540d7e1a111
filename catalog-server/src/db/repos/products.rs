//! Product repository
//!
//! Reads and writes `products`:
//! - list / get / sorted-by-price / filter-by-category-title
//! - create: INSERT ... RETURNING
//! - update: SELECT ... FOR UPDATE, apply patch, UPDATE, in one transaction
//! - delete: single DELETE, NotFound when nothing was removed

use sqlx::PgPool;

use super::{reference_error, DbError};
use crate::models::{NewProduct, Product, ProductPatch};

const RESOURCE: &str = "Product";

/// Sort direction for the price listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceOrder {
    Asc,
    Desc,
}

impl PriceOrder {
    /// Ties fall back to id so repeated calls return the same order.
    fn query(self) -> &'static str {
        match self {
            Self::Asc => {
                "SELECT id, title, description, count, price, user_id, category_id \
                 FROM products ORDER BY price ASC, id ASC"
            }
            Self::Desc => {
                "SELECT id, title, description, count, price, user_id, category_id \
                 FROM products ORDER BY price DESC, id ASC"
            }
        }
    }
}

/// Product repository
pub struct ProductRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All products, ordered by id.
    pub async fn list(&self) -> Result<Vec<Product>, DbError> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, title, description, count, price, user_id, category_id
            FROM products
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(products)
    }

    pub async fn get(&self, id: i64) -> Result<Product, DbError> {
        sqlx::query_as::<_, Product>(
            r#"
            SELECT id, title, description, count, price, user_id, category_id
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::not_found(RESOURCE, id))
    }

    /// All products ordered by price.
    pub async fn list_by_price(&self, order: PriceOrder) -> Result<Vec<Product>, DbError> {
        let products = sqlx::query_as::<_, Product>(order.query())
            .fetch_all(self.pool)
            .await?;

        Ok(products)
    }

    /// Products belonging to any category titled `title`.
    ///
    /// Category titles aren't unique, so this unions over every match. No
    /// matching category yields an empty list.
    pub async fn list_by_category_title(&self, title: &str) -> Result<Vec<Product>, DbError> {
        tracing::debug!(category = title, "filtering products by category title");

        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, title, description, count, price, user_id, category_id
            FROM products
            WHERE category_id IN (SELECT id FROM categories WHERE title = $1)
            ORDER BY id
            "#,
        )
        .bind(title)
        .fetch_all(self.pool)
        .await?;

        Ok(products)
    }

    pub async fn create(&self, new: &NewProduct) -> Result<Product, DbError> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (title, description, count, price, user_id, category_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, title, description, count, price, user_id, category_id
            "#,
        )
        .bind(&new.title)
        .bind(&new.description)
        .bind(new.count)
        .bind(new.price)
        .bind(new.user_id)
        .bind(new.category_id)
        .fetch_one(self.pool)
        .await
        .map_err(reference_error)?;

        tracing::debug!(id = product.id, "created product");
        Ok(product)
    }

    /// Apply a partial update.
    ///
    /// The row is locked for the duration of the transaction so concurrent
    /// patches to the same product serialize instead of overwriting each other.
    pub async fn update(&self, id: i64, patch: &ProductPatch) -> Result<Product, DbError> {
        let mut tx = self.pool.begin().await?;

        let mut product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, title, description, count, price, user_id, category_id
            FROM products
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| DbError::not_found(RESOURCE, id))?;

        if patch.is_empty() {
            // nothing to write; dropping tx rolls back and releases the lock
            return Ok(product);
        }

        patch.apply(&mut product);

        let updated = sqlx::query_as::<_, Product>(
            r#"
            UPDATE products
            SET description = $2, count = $3, price = $4
            WHERE id = $1
            RETURNING id, title, description, count, price, user_id, category_id
            "#,
        )
        .bind(id)
        .bind(&product.description)
        .bind(product.count)
        .bind(product.price)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::debug!(id, "updated product");
        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found(RESOURCE, id));
        }

        tracing::debug!(id, "deleted product");
        Ok(())
    }
}
