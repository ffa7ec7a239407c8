//! Response body helpers for the favourite endpoints.

use axum::{http::StatusCode, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct Message {
    pub msg: String,
}

#[derive(Serialize)]
pub struct FavouriteCreated<T> {
    pub msg: String,
    pub favorite: T,
}

/// 201 with the created favourite and a confirmation message.
pub fn created_favourite<T: Serialize>(
    msg: &str,
    favorite: T,
) -> (StatusCode, Json<FavouriteCreated<T>>) {
    (
        StatusCode::CREATED,
        Json(FavouriteCreated {
            msg: msg.to_string(),
            favorite,
        }),
    )
}

/// Plain `{"msg": ...}` body with the given status.
pub fn message(status: StatusCode, msg: &str) -> (StatusCode, Json<Message>) {
    (
        status,
        Json(Message {
            msg: msg.to_string(),
        }),
    )
}
