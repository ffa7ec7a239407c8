//! Pool construction and first-run DDL for the catalog tables.

use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Connect to the store named by `database_url`, creating the database file
/// if it does not exist yet. Foreign keys are enforced (the driver default);
/// they are the only referential backstop the handlers rely on.
pub async fn connect(database_url: &str) -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| AppError::BadRequest(format!("invalid DATABASE_URL: {}", e)))?
        .create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(opts)
        .await?;
    Ok(pool)
}

/// The favourites table carries the discriminator plus one foreign key per
/// catalog kind; the second CHECK makes the pair exclusive, so a row can
/// never point at two entities or at none.
const TABLES: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY,
        user_name TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL,
        first_name TEXT,
        last_name TEXT,
        email TEXT UNIQUE,
        created_at TEXT NOT NULL DEFAULT (datetime('now')),
        is_active INTEGER NOT NULL DEFAULT 1
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS planets (
        id INTEGER PRIMARY KEY,
        name TEXT,
        orbital_period REAL,
        population REAL,
        climate TEXT,
        user_id INTEGER REFERENCES users(id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS vehicles (
        id INTEGER PRIMARY KEY,
        name TEXT,
        model TEXT,
        vehicle_class TEXT,
        manufacturer TEXT,
        cost_in_credits REAL,
        length REAL,
        crew REAL,
        passengers REAL,
        user_id INTEGER REFERENCES users(id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS characters (
        id INTEGER PRIMARY KEY,
        name TEXT,
        birth_year TEXT,
        eye_color TEXT,
        films TEXT,
        gender TEXT,
        hair_color TEXT,
        height REAL,
        homeworld TEXT,
        user_id INTEGER REFERENCES users(id)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS favourites (
        id INTEGER PRIMARY KEY,
        kind TEXT NOT NULL CHECK (kind IN ('planets', 'vehicles', 'characters')),
        planet_id INTEGER REFERENCES planets(id),
        vehicle_id INTEGER REFERENCES vehicles(id),
        character_id INTEGER REFERENCES characters(id),
        user_id INTEGER REFERENCES users(id),
        CHECK (
            (kind = 'planets' AND planet_id IS NOT NULL AND vehicle_id IS NULL AND character_id IS NULL)
            OR (kind = 'vehicles' AND vehicle_id IS NOT NULL AND planet_id IS NULL AND character_id IS NULL)
            OR (kind = 'characters' AND character_id IS NOT NULL AND planet_id IS NULL AND vehicle_id IS NULL)
        )
    )
    "#,
];

/// Create the catalog tables if they do not exist. Idempotent.
pub async fn ensure_tables(pool: &SqlitePool) -> Result<(), AppError> {
    for ddl in TABLES {
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}
