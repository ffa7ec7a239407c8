//! Favourite endpoints: list, add, remove.

use crate::error::AppError;
use crate::model::{FavouriteTarget, PublicFavourite};
use crate::response::{created_favourite, message};
use crate::service::FavouriteService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

/// Request body for add/remove. `user_id` is optional; an absent value means
/// the favourite belongs to no user.
#[derive(Debug, Deserialize)]
pub struct FavouriteBody {
    #[serde(default)]
    pub user_id: Option<i64>,
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<PublicFavourite>>, AppError> {
    let favourites = FavouriteService::list(&state.pool).await?;
    Ok(Json(favourites.iter().map(|f| f.public()).collect()))
}

pub async fn add_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i64>,
    Json(body): Json<FavouriteBody>,
) -> Result<impl IntoResponse, AppError> {
    let favourite =
        FavouriteService::add(&state.pool, FavouriteTarget::Planet(planet_id), body.user_id)
            .await?;
    Ok(created_favourite(
        "Favourite planet added successfully!",
        favourite.public(),
    ))
}

pub async fn add_character(
    State(state): State<AppState>,
    Path(character_id): Path<i64>,
    Json(body): Json<FavouriteBody>,
) -> Result<impl IntoResponse, AppError> {
    let favourite = FavouriteService::add(
        &state.pool,
        FavouriteTarget::Character(character_id),
        body.user_id,
    )
    .await?;
    Ok(created_favourite(
        "Favourite character added successfully!",
        favourite.public(),
    ))
}

pub async fn remove_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<i64>,
    Json(body): Json<FavouriteBody>,
) -> Result<impl IntoResponse, AppError> {
    let removed =
        FavouriteService::remove(&state.pool, FavouriteTarget::Planet(planet_id), body.user_id)
            .await?;
    Ok(if removed {
        message(StatusCode::OK, "Favourite planet removed successfully!")
    } else {
        message(StatusCode::NOT_FOUND, "Favourite planet not found!")
    })
}

pub async fn remove_character(
    State(state): State<AppState>,
    Path(character_id): Path<i64>,
    Json(body): Json<FavouriteBody>,
) -> Result<impl IntoResponse, AppError> {
    let removed = FavouriteService::remove(
        &state.pool,
        FavouriteTarget::Character(character_id),
        body.user_id,
    )
    .await?;
    Ok(if removed {
        message(StatusCode::OK, "Favourite character removed successfully!")
    } else {
        message(StatusCode::NOT_FOUND, "Favourite character not found!")
    })
}
