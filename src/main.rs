use mimalloc::MiMalloc;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use sentinel_gateway::config::{CONFIG, Config};
use sentinel_gateway::db::TableStore;
use sentinel_gateway::router::{GatewayState, gateway_router};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = &*CONFIG;

    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(cfg.worker_threads.max(1))
        .enable_all()
        .build()?
        .block_on(run(cfg))
}

async fn run(cfg: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    // the token value itself is never logged
    info!(
        database_url = %cfg.database_url,
        listen_addr = %cfg.listen_addr,
        loglevel = %cfg.loglevel,
        worker_threads = cfg.worker_threads,
        api_token_set = !cfg.api_token.is_empty()
    );

    if cfg.api_token.is_empty() {
        warn!("GATEWAY_API_TOKEN is not set; protected routes will answer 500 until it is configured");
    }

    let store = TableStore::connect(&cfg.database_url).await?;
    store.init_schema().await?;
    match store.probe().await {
        Ok(now) => info!(db_time = %now, "database connection OK"),
        Err(e) => error!(error = %e, "database probe failed"),
    }

    let state = GatewayState::new(store, Arc::from(cfg.api_token.as_str()));
    let app = gateway_router(state);

    let listener = TcpListener::bind(&cfg.listen_addr).await?;
    info!("HTTP server listening on {}", cfg.listen_addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
    }
}
