use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use clearfind::api::{self, AppState};
use clearfind::config::Config;
use clearfind::fetch;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("clearfind=info".parse()?),
        )
        .init();

    let config = Config::from_env();
    let client = fetch::create_client(&config)?;

    let state = Arc::new(AppState { client });
    let app = api::router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("listening on {addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
