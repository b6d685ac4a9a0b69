//! HTTP surface over the team catalog and highlight search.

pub mod error;
pub mod handlers;
pub mod router;

use anyhow::Context;
use std::sync::Arc;
use tracing::{info, warn};

use crate::modules::highlight::{application::HighlightService, infrastructure::YoutubeClient};
use crate::modules::team::{
    application::TeamService,
    infrastructure::{CatalogLoader, SqliteTeamRepository},
};
use crate::shared::{
    utils::{init_logger, init_tracing},
    AppConfig, Database,
};

pub use router::{build_router, AppState};

/// Wire services from config: open the database, seed it, build the state
pub async fn build_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let db = Database::new(&config.database_url).context("Failed to open database")?;
    db.run_migrations().context("Failed to run migrations")?;

    let team_service = TeamService::new(Arc::new(SqliteTeamRepository::new(Arc::new(db))));
    let catalog = CatalogLoader::from_config(config)?;
    team_service.seed(&catalog).await?;

    let highlight_service = match YoutubeClient::from_config(config) {
        Ok(client) => Some(Arc::new(HighlightService::from_config(
            Arc::new(client),
            config,
        ))),
        Err(e) => {
            warn!("Highlight search disabled: {}", e);
            None
        }
    };

    Ok(AppState::new(Arc::new(team_service), highlight_service))
}

pub async fn run() -> anyhow::Result<()> {
    init_logger(log::LevelFilter::Info);
    init_tracing(tracing::Level::INFO);

    let config = AppConfig::from_env()?;
    let state = build_state(&config).await?;
    let app = build_router(Arc::new(state));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {}", e);
        // Never resolve: keep serving rather than shut down on a broken handler
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
