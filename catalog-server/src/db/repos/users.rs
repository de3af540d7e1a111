//! User repository

use sqlx::PgPool;

use super::DbError;
use crate::models::{NewUser, User};

/// User repository
pub struct UserRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<User>, DbError> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, name, surname, phone_num FROM users ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(users)
    }

    pub async fn get(&self, id: i64) -> Result<User, DbError> {
        sqlx::query_as::<_, User>("SELECT id, name, surname, phone_num FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::not_found("User", id))
    }

    pub async fn create(&self, new: &NewUser) -> Result<User, DbError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, surname, phone_num)
            VALUES ($1, $2, $3)
            RETURNING id, name, surname, phone_num
            "#,
        )
        .bind(&new.name)
        .bind(&new.surname)
        .bind(&new.phone_num)
        .fetch_one(self.pool)
        .await?;

        tracing::debug!(id = user.id, "created user");
        Ok(user)
    }
}
