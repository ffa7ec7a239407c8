//! Favourite reads and writes.

use crate::error::AppError;
use crate::model::{Favourite, FavouriteTarget};
use sqlx::SqlitePool;

const FAVOURITE_COLUMNS: &str = "id, kind, planet_id, vehicle_id, character_id, user_id";

pub struct FavouriteService;

impl FavouriteService {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Favourite>, AppError> {
        tracing::debug!("listing favourites");
        let rows = sqlx::query_as::<_, Favourite>(&format!(
            "SELECT {} FROM favourites",
            FAVOURITE_COLUMNS
        ))
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    /// Insert one favourite. `user_id` is stored verbatim (absent means a
    /// NULL user); the foreign-key constraints are the only existence check.
    pub async fn add(
        pool: &SqlitePool,
        target: FavouriteTarget,
        user_id: Option<i64>,
    ) -> Result<Favourite, AppError> {
        tracing::debug!(kind = target.kind(), id = target.id(), "adding favourite");
        let row = sqlx::query_as::<_, Favourite>(&format!(
            "INSERT INTO favourites (kind, {}, user_id) VALUES (?, ?, ?) RETURNING {}",
            target.fk_column(),
            FAVOURITE_COLUMNS
        ))
        .bind(target.kind())
        .bind(target.id())
        .bind(user_id)
        .fetch_one(pool)
        .await?;
        Ok(row)
    }

    /// Delete the first favourite matching (kind, foreign key, user) and
    /// report whether a row was removed. `IS` makes the user comparison
    /// null-safe: an absent `user_id` matches only NULL-user rows.
    pub async fn remove(
        pool: &SqlitePool,
        target: FavouriteTarget,
        user_id: Option<i64>,
    ) -> Result<bool, AppError> {
        tracing::debug!(kind = target.kind(), id = target.id(), "removing favourite");
        let existing = sqlx::query_as::<_, Favourite>(&format!(
            "SELECT {} FROM favourites WHERE kind = ? AND {} = ? AND user_id IS ? LIMIT 1",
            FAVOURITE_COLUMNS,
            target.fk_column()
        ))
        .bind(target.kind())
        .bind(target.id())
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        match existing {
            Some(favourite) => {
                sqlx::query("DELETE FROM favourites WHERE id = ?")
                    .bind(favourite.id)
                    .execute(pool)
                    .await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
