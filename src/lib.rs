//! Holocron: a small catalog REST backend. Users, planets, vehicles,
//! characters, and per-user favourites over SQLite.

pub mod error;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod settings;
pub mod state;
pub mod store;

pub use error::AppError;
pub use routes::{api_routes, ROUTES};
pub use settings::Settings;
pub use state::AppState;
pub use store::{connect, ensure_tables};
