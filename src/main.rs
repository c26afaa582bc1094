use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use records_api::app::{app, AppState};
use records_api::database::DatabaseManager;

#[derive(Parser)]
#[command(name = "records-api")]
#[command(about = "Academic records backend")]
#[command(version)]
struct Args {
    #[arg(long, help = "Port to listen on (overrides RECORDS_API_PORT / PORT)")]
    port: Option<u16>,

    #[arg(long, help = "Apply pending schema migrations before serving")]
    migrate: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, ACCESS_TOKEN, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let config = records_api::config::config();
    tracing::info!("Starting Records API in {:?} mode", config.environment);
    config.validate().context("invalid configuration")?;
    if config.security.access_token.is_empty() {
        tracing::warn!("ACCESS_TOKEN is not set; every protected request will be rejected");
    }

    let pool = DatabaseManager::connect(&config.database)
        .await
        .context("failed to create database pool")?;

    if args.migrate || config.database.run_migrations {
        DatabaseManager::migrate(&pool)
            .await
            .context("failed to apply migrations")?;
    }

    let router = app(AppState::from_config(pool.clone(), config), config);

    let port = args.port.unwrap_or(config.api.port);
    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Records API listening on http://{}", bind_addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    DatabaseManager::close(&pool).await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
