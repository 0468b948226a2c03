mod catalog;
mod config;
mod db;
mod entities;
mod error;
mod forms;
mod models;
mod routes;
mod templates;
mod tmdb;

use std::{sync::Arc, time::Duration};

use crate::{catalog::Catalog, config::Config, tmdb::TmdbClient};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Catalog,
    pub tmdb: Arc<TmdbClient>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,reelrank=debug,sqlx=warn".to_string()),
        )
        .init();

    let config = Config::from_env()?;

    let http = reqwest::Client::builder()
        .user_agent("reelrank/0.1")
        .timeout(Duration::from_secs(30))
        .build()?;

    let db = db::connect_and_migrate(&config.database_url).await?;
    let catalog = Catalog::new(db);

    let tmdb = TmdbClient::new(http, config.tmdb_access_token.clone(), config.tmdb_base_url.clone());

    let state = Arc::new(AppState { catalog, tmdb: Arc::new(tmdb) });

    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
