//! Character list and detail.

use crate::error::AppError;
use crate::model::PublicCharacter;
use crate::service::CatalogService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<PublicCharacter>>, AppError> {
    let characters = CatalogService::list_characters(&state.pool).await?;
    Ok(Json(characters.iter().map(|c| c.public()).collect()))
}

pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PublicCharacter>, AppError> {
    let character = CatalogService::find_character(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("character {}", id)))?;
    Ok(Json(character.public()))
}
