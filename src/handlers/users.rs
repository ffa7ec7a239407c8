//! User listing.

use crate::error::AppError;
use crate::model::PublicUser;
use crate::service::UserService;
use crate::state::AppState;
use axum::{extract::State, Json};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<PublicUser>>, AppError> {
    let users = UserService::list(&state.pool).await?;
    Ok(Json(users.iter().map(|u| u.public()).collect()))
}
