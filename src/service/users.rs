//! User listing and seeding.

use crate::error::AppError;
use crate::model::{NewUser, User};
use sqlx::SqlitePool;

const USER_COLUMNS: &str =
    "id, user_name, password_hash, first_name, last_name, email, created_at, is_active";

pub struct UserService;

impl UserService {
    /// Full-table scan in storage order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<User>, AppError> {
        tracing::debug!("listing users");
        let rows = sqlx::query_as::<_, User>(&format!("SELECT {} FROM users", USER_COLUMNS))
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    /// Insert one user, hashing the plaintext password before it touches
    /// storage. No HTTP endpoint reaches this; it backs seeding and tests.
    pub async fn create(pool: &SqlitePool, new: NewUser) -> Result<User, AppError> {
        let hash = bcrypt::hash(&new.password, bcrypt::DEFAULT_COST)
            .map_err(|e| AppError::Internal(format!("password hash: {}", e)))?;
        tracing::debug!(user_name = %new.user_name, "creating user");
        let row = sqlx::query_as::<_, User>(&format!(
            "INSERT INTO users (user_name, password_hash, first_name, last_name, email) \
             VALUES (?, ?, ?, ?, ?) RETURNING {}",
            USER_COLUMNS
        ))
        .bind(&new.user_name)
        .bind(&hash)
        .bind(&new.first_name)
        .bind(&new.last_name)
        .bind(&new.email)
        .fetch_one(pool)
        .await?;
        Ok(row)
    }
}
