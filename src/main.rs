//! Server binary: loads settings, prepares storage, mounts routes, serves.

use holocron::{api_routes, connect, ensure_tables, AppState, Settings};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("holocron=info")),
        )
        .init();

    let settings = Settings::from_env();
    let pool = connect(&settings.database_url).await?;
    ensure_tables(&pool).await?;

    let app = api_routes(AppState { pool });
    let listener = TcpListener::bind(("0.0.0.0", settings.port)).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
