//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Borrows the pool; every call checks out its own connection
//! - Single statement per read (filter-by-category uses a subquery, no N+1)
//! - Foreign key violations become typed errors instead of opaque 500s

pub mod categories;
pub mod products;
pub mod users;

pub use categories::CategoryRepo;
pub use products::{PriceOrder, ProductRepo};
pub use users::UserRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    /// Insert pointed at a row that doesn't exist
    #[error("{field} does not reference an existing record")]
    InvalidReference { field: &'static str },

    /// Delete blocked by rows that still reference the target
    #[error("{resource} '{id}' is still referenced")]
    InUse { resource: &'static str, id: String },
}

impl DbError {
    pub(crate) fn not_found(resource: &'static str, id: i64) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }
}

/// Map a foreign key violation on insert to the offending column.
pub(crate) fn reference_error(err: sqlx::Error) -> DbError {
    if let sqlx::Error::Database(db) = &err {
        if db.is_foreign_key_violation() {
            let field = match db.constraint() {
                Some(c) if c.contains("category_id") => "category_id",
                Some(c) if c.contains("user_id") => "user_id",
                _ => "reference",
            };
            return DbError::InvalidReference { field };
        }
    }
    DbError::Sqlx(err)
}

/// Map a foreign key violation on delete to `InUse`.
pub(crate) fn in_use_error(err: sqlx::Error, resource: &'static str, id: i64) -> DbError {
    if let sqlx::Error::Database(db) = &err {
        if db.is_foreign_key_violation() {
            return DbError::InUse {
                resource,
                id: id.to_string(),
            };
        }
    }
    DbError::Sqlx(err)
}
