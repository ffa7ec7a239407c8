//! Route table and router construction.
//!
//! `ROUTES` is the single source for both registration and the sitemap, so
//! the index page cannot drift from what is actually mounted.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::trace::TraceLayer;

pub const ROUTES: &[(&str, &str)] = &[
    ("GET", "/"),
    ("GET", "/health"),
    ("GET", "/users"),
    ("GET", "/users/favourites"),
    ("GET", "/people"),
    ("GET", "/people/:id"),
    ("GET", "/planets"),
    ("GET", "/planets/:id"),
    ("POST", "/favorite/planet/:id"),
    ("DELETE", "/favorite/planet/:id"),
    ("POST", "/favorite/people/:id"),
    ("DELETE", "/favorite/people/:id"),
];

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::sitemap::sitemap))
        .route("/health", get(health))
        .route("/users", get(handlers::users::list))
        .route("/users/favourites", get(handlers::favourites::list))
        .route("/people", get(handlers::characters::list))
        .route("/people/:id", get(handlers::characters::detail))
        .route("/planets", get(handlers::planets::list))
        .route("/planets/:id", get(handlers::planets::detail))
        .route(
            "/favorite/planet/:id",
            post(handlers::favourites::add_planet).delete(handlers::favourites::remove_planet),
        )
        .route(
            "/favorite/people/:id",
            post(handlers::favourites::add_character)
                .delete(handlers::favourites::remove_character),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
