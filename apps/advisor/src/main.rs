mod config;
mod errors;
mod favorites;
mod gateway;
mod llm_client;
mod models;
mod session;
mod ui;

use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::favorites::JsonFavoritesStore;
use crate::llm_client::GeminiClient;
use crate::session::handlers::Advisor;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging on stderr — stdout belongs to the screens
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting Advisor v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = Arc::new(GeminiClient::new(
        config.gemini_api_key.clone(),
        config.gemini_model.clone(),
    ));
    info!("LLM client initialized (model: {})", llm.model());

    // Initialize favorites store
    let store = JsonFavoritesStore::new(
        config
            .favorites_path
            .clone()
            .unwrap_or_else(JsonFavoritesStore::default_path),
    );
    info!("Favorites store at {}", store.path().display());

    // Favorites are loaded once here; a missing or unreadable store starts empty
    let advisor = Advisor::new(llm, Box::new(store));

    ui::run(advisor).await
}
