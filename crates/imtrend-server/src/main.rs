//! imtrend Server Binary
//!
//! Loads the survey dataset once and serves exploration requests.

use std::sync::Arc;

use imtrend_core::{ExplorerContext, ImtrendConfig};
use imtrend_server::{serve, AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut config = match std::env::var("IMTREND_CONFIG") {
        Ok(path) => ImtrendConfig::load_file(&path)?,
        Err(_) => ImtrendConfig::default(),
    };
    if let Ok(dataset) = std::env::var("IMTREND_DATASET") {
        config.dataset.path = Some(dataset.into());
    }
    if let Ok(addr) = std::env::var("IMTREND_ADDR") {
        config.server.addr = addr;
    }
    config.validate()?;

    let context = ExplorerContext::from_config(&config)?;
    let state = Arc::new(AppState::new(context));

    serve(&config.server.addr, state).await
}
