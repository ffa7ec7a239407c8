//! Runtime settings from the environment.

/// Store used when `DATABASE_URL` is unset: a local file-backed database,
/// created on first connect.
pub const DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/holocron.db";

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Clone, Debug)]
pub struct Settings {
    pub database_url: String,
    pub port: u16,
}

impl Settings {
    /// Read `DATABASE_URL` and `PORT`, falling back to the defaults above.
    pub fn from_env() -> Self {
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.into());
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);
        Settings { database_url, port }
    }
}
