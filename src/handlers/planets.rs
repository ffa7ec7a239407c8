//! Planet list and detail.

use crate::error::AppError;
use crate::model::PublicPlanet;
use crate::service::CatalogService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<PublicPlanet>>, AppError> {
    let planets = CatalogService::list_planets(&state.pool).await?;
    Ok(Json(planets.iter().map(|p| p.public()).collect()))
}

pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PublicPlanet>, AppError> {
    let planet = CatalogService::find_planet(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("planet {}", id)))?;
    Ok(Json(planet.public()))
}
