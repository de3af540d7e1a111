//! Schema creation for the catalog tables
//!
//! Idempotent: every statement is `IF NOT EXISTS`, so this runs on each startup.
//!
//! Delete policy for references held by `products`:
//! - `category_id` is `ON DELETE RESTRICT` (a category in use cannot be removed)
//! - `user_id` is `ON DELETE SET NULL` (products outlive their owner)

use sqlx::PgPool;

const STATEMENTS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id BIGSERIAL PRIMARY KEY,
        name VARCHAR(50) NOT NULL,
        surname VARCHAR(50),
        phone_num VARCHAR(50)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS categories (
        id BIGSERIAL PRIMARY KEY,
        title VARCHAR(200) NOT NULL,
        description VARCHAR(280)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS products (
        id BIGSERIAL PRIMARY KEY,
        title VARCHAR(200) NOT NULL,
        description VARCHAR(280),
        count INTEGER NOT NULL DEFAULT 0,
        price DOUBLE PRECISION NOT NULL DEFAULT 0,
        user_id BIGINT REFERENCES users(id) ON DELETE SET NULL,
        category_id BIGINT REFERENCES categories(id) ON DELETE RESTRICT
    )
    "#,
    "CREATE INDEX IF NOT EXISTS idx_categories_title ON categories(title)",
    "CREATE INDEX IF NOT EXISTS idx_categories_description ON categories(description)",
    "CREATE INDEX IF NOT EXISTS idx_products_title ON products(title)",
    "CREATE INDEX IF NOT EXISTS idx_products_description ON products(description)",
    "CREATE INDEX IF NOT EXISTS idx_products_count ON products(count)",
    "CREATE INDEX IF NOT EXISTS idx_products_price ON products(price)",
    "CREATE INDEX IF NOT EXISTS idx_products_category_id ON products(category_id)",
    "CREATE INDEX IF NOT EXISTS idx_products_user_id ON products(user_id)",
];

/// Create tables and indexes if they don't exist yet.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running catalog migrations...");

    let mut tx = pool.begin().await?;
    for statement in STATEMENTS {
        sqlx::query(statement).execute(&mut *tx).await?;
    }
    tx.commit().await?;

    tracing::info!("Catalog migrations complete");
    Ok(())
}

/// Remove every row and restart id sequences at 1.
///
/// Intended for test setup against a scratch database.
pub async fn reset(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::warn!("Truncating catalog tables");
    sqlx::query("TRUNCATE products, categories, users RESTART IDENTITY CASCADE")
        .execute(pool)
        .await?;
    Ok(())
}
