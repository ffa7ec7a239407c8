//! Schema invariants and service-level storage behavior.

use holocron::ensure_tables;
use holocron::model::{FavouriteTarget, NewUser};
use holocron::service::{CatalogService, FavouriteService, UserService};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    ensure_tables(&pool).await.unwrap();
    pool
}

#[tokio::test]
async fn ensure_tables_is_idempotent() {
    let pool = test_pool().await;
    ensure_tables(&pool).await.unwrap();
}

#[tokio::test]
async fn mismatched_favourite_rows_violate_check() {
    let pool = test_pool().await;
    sqlx::query("INSERT INTO characters (id, name) VALUES (1, 'Yoda')")
        .execute(&pool)
        .await
        .unwrap();

    // Discriminator says planets, foreign key points at a character.
    let result = sqlx::query(
        "INSERT INTO favourites (kind, character_id) VALUES ('planets', 1)",
    )
    .execute(&pool)
    .await;
    assert!(result.is_err());

    // No foreign key at all.
    let result = sqlx::query("INSERT INTO favourites (kind) VALUES ('characters')")
        .execute(&pool)
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn favourite_insert_requires_existing_entity() {
    let pool = test_pool().await;
    let result = FavouriteService::add(&pool, FavouriteTarget::Planet(99), None).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn create_user_stores_a_hash_not_the_plaintext() {
    let pool = test_pool().await;
    let user = UserService::create(
        &pool,
        NewUser {
            user_name: "obiwan".into(),
            password: "hello there".into(),
            first_name: Some("Obi-Wan".into()),
            last_name: Some("Kenobi".into()),
            email: Some("obiwan@jedi.test".into()),
        },
    )
    .await
    .unwrap();

    assert_ne!(user.password_hash, "hello there");
    assert!(user.password_hash.starts_with("$2"));
    assert!(bcrypt::verify("hello there", &user.password_hash).unwrap());
    assert!(user.is_active);
}

#[tokio::test]
async fn vehicle_favourites_round_trip_through_the_service() {
    let pool = test_pool().await;
    sqlx::query(
        "INSERT INTO vehicles (id, name, model, vehicle_class, manufacturer) \
         VALUES (14, 'Snowspeeder', 't-47 airspeeder', 'airspeeder', 'Incom corporation')",
    )
    .execute(&pool)
    .await
    .unwrap();

    let vehicles = CatalogService::list_vehicles(&pool).await.unwrap();
    assert_eq!(vehicles.len(), 1);
    assert_eq!(vehicles[0].name.as_deref(), Some("Snowspeeder"));
    let projection = serde_json::to_value(vehicles[0].public()).unwrap();
    assert_eq!(projection["vehicle_class"], "airspeeder");
    assert!(!projection.as_object().unwrap().contains_key("user_id"));

    let favourite = FavouriteService::add(&pool, FavouriteTarget::Vehicle(14), None)
        .await
        .unwrap();
    assert_eq!(favourite.target, FavouriteTarget::Vehicle(14));
    let public = serde_json::to_value(favourite.public()).unwrap();
    assert_eq!(public["type"], "vehicles");
    assert_eq!(public["vehicle_id"], 14);

    let removed = FavouriteService::remove(&pool, FavouriteTarget::Vehicle(14), None)
        .await
        .unwrap();
    assert!(removed);
    assert!(FavouriteService::list(&pool).await.unwrap().is_empty());
}
