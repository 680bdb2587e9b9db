use std::net::SocketAddr;

use anyhow::Context;
use mappa_progressoes::build_repository;
use mappa_progressoes::config::{AppConfig, DEFAULT_LOG_FILTER};
use progressao_api::{router, AppState};
use progressao_core::ProgressaoRepository;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Cargar .env si existe (DATABASE_URL, puerto, RUST_LOG)
    let _ = dotenvy::dotenv();

    // `init` también instala el puente `log` -> `tracing` de los crates de almacenamiento
    tracing_subscriber::registry().with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()))
                                  .with(tracing_subscriber::fmt::layer())
                                  .init();

    let config = AppConfig::from_env().context("configuración inválida")?;
    tracing::info!("Starting API Progressões with config: {:?}", config.server);

    let repo_config = config.clone();
    let repo = tokio::task::spawn_blocking(move || {
                   let repo = build_repository(&repo_config)?;
                   match repo.count() {
                       Ok(n) => tracing::info!("{n} progressões na base"),
                       Err(e) => tracing::warn!("no se pudo contar progressões: {e}"),
                   }
                   Ok::<_, progressao_persistence::PersistenceError>(repo)
               }).await?
                 .context("no se pudo inicializar el almacén")?;

    let app = router(AppState::from_arc(repo));
    let addr = SocketAddr::new(config.server.host, config.server.port);
    let listener = TcpListener::bind(addr).await.with_context(|| format!("bind {addr}"))?;
    tracing::info!("API Progressões listening on {}", addr);

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("ctrl_c handler failed: {e}");
    }
    tracing::info!("shutdown requested");
}
