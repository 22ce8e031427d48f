use tracing_subscriber::EnvFilter;

use movie_rec_api::api::{create_router, AppState};
use movie_rec_api::config::Config;
use movie_rec_api::services::{ArtifactStore, Recommender};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    // One-time blocking startup step; the server is unusable without its
    // dataset, so any artifact failure aborts the process here.
    let catalog = ArtifactStore::new(&config).load_catalog().await?;
    let state = AppState::new(Recommender::new(catalog));

    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
