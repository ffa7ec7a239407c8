//! Catalog reads: planets, vehicles, characters. The catalog is populated
//! outside this crate; only list and by-id lookups are exposed.

use crate::error::AppError;
use crate::model::{Character, Planet, Vehicle};
use sqlx::SqlitePool;

const PLANET_COLUMNS: &str = "id, name, orbital_period, population, climate, user_id";
const VEHICLE_COLUMNS: &str = "id, name, model, vehicle_class, manufacturer, cost_in_credits, \
                               length, crew, passengers, user_id";
const CHARACTER_COLUMNS: &str = "id, name, birth_year, eye_color, films, gender, hair_color, \
                                 height, homeworld, user_id";

pub struct CatalogService;

impl CatalogService {
    pub async fn list_planets(pool: &SqlitePool) -> Result<Vec<Planet>, AppError> {
        tracing::debug!("listing planets");
        let rows = sqlx::query_as::<_, Planet>(&format!("SELECT {} FROM planets", PLANET_COLUMNS))
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    /// By-id lookup resolved to an explicit optional: the caller branches on
    /// found versus absent, never on an unresolved query.
    pub async fn find_planet(pool: &SqlitePool, id: i64) -> Result<Option<Planet>, AppError> {
        tracing::debug!(id, "fetching planet");
        let row = sqlx::query_as::<_, Planet>(&format!(
            "SELECT {} FROM planets WHERE id = ?",
            PLANET_COLUMNS
        ))
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(row)
    }

    pub async fn list_vehicles(pool: &SqlitePool) -> Result<Vec<Vehicle>, AppError> {
        tracing::debug!("listing vehicles");
        let rows =
            sqlx::query_as::<_, Vehicle>(&format!("SELECT {} FROM vehicles", VEHICLE_COLUMNS))
                .fetch_all(pool)
                .await?;
        Ok(rows)
    }

    pub async fn list_characters(pool: &SqlitePool) -> Result<Vec<Character>, AppError> {
        tracing::debug!("listing characters");
        let rows = sqlx::query_as::<_, Character>(&format!(
            "SELECT {} FROM characters",
            CHARACTER_COLUMNS
        ))
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    pub async fn find_character(pool: &SqlitePool, id: i64) -> Result<Option<Character>, AppError> {
        tracing::debug!(id, "fetching character");
        let row = sqlx::query_as::<_, Character>(&format!(
            "SELECT {} FROM characters WHERE id = ?",
            CHARACTER_COLUMNS
        ))
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(row)
    }
}
