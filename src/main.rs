// src/main.rs

use color_eyre::eyre::Result;
use tracing::info;

use seolens::assistant::Assistant;
use seolens::config::Config;
use seolens::fetcher::Fetcher;
use seolens::logging;
use seolens::server::{self, state::AppState};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    logging::initialize_logging()?;

    let config = Config::from_env();
    info!(
        bind_addr = %config.bind_addr,
        model = %config.ollama_model,
        "Starting seolens."
    );

    let fetcher = Fetcher::new()?;
    let assistant = Assistant::new(config.ollama_base_url.clone(), config.ollama_model.clone())?;
    let state = AppState::new(fetcher, assistant);

    server::serve(config.bind_addr, state).await
}
