//! Car inventory server: opens (and seeds) the database, then serves the API
//! and the front-end bundle.

use car_inventory::{app, AppState, BootstrapError, CarStore, ServerConfig};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), BootstrapError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("car_inventory=info,tower_http=info")),
        )
        .try_init()
        .map_err(|e| BootstrapError::Logging(e.to_string()))?;

    let result = match ServerConfig::from_env() {
        Ok(config) => run(config).await,
        Err(e) => Err(e.into()),
    };
    if let Err(e) = &result {
        tracing::error!(error = %e, "server stopped");
    }
    result
}

async fn run(config: ServerConfig) -> Result<(), BootstrapError> {
    // Schema and seed complete before the listener is bound.
    let store = CarStore::open(&config.database_path).await?;
    let router = app(AppState::new(store.clone()), &config);

    let addr = config.socket_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| BootstrapError::Bind { addr: addr.clone(), source })?;
    tracing::info!(
        static_dir = %config.static_dir.display(),
        "car inventory listening on http://{}",
        addr
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(BootstrapError::Serve)?;

    store.close().await;
    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "could not listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
