use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use api_house::{
    api::{create_router, AppState},
    config::EnvMode,
    Config,
};

fn init_tracing(mode: EnvMode) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true);

    if mode.is_development() {
        subscriber.init();
    } else {
        subscriber.json().init();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is fine; the process environment still applies
    dotenvy::dotenv().ok();

    let config = Config::from_env();
    init_tracing(config.as_ref().map(|c| c.mode).unwrap_or_default());

    let config = config.map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        e
    })?;

    info!(mode = %config.mode, "Configuration loaded and validated");
    let config = Arc::new(config);

    let app = create_router(AppState::new(Arc::clone(&config)));

    let listener = TcpListener::bind(config.listen_addr()).await?;
    info!(
        "Server running as {} @ http://localhost:{}",
        config.mode, config.port
    );
    axum::serve(listener, app).await?;

    Ok(())
}
