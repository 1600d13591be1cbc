//! Chain Heroes driver binary.
//!
//! Creates a hero, sends it on an expedition at a fixed interval, and prints
//! its status until interrupted.
//!
//! # Examples
//!
//! ```bash
//! # Three quick rounds with JSON status lines
//! HERO_NAME="Tony" EXPEDITION_DURATION_SECS=2 TRAINING_ROUNDS=3 STATUS_FORMAT=json \
//!     cargo run -p chain-heroes
//! ```

use anyhow::Result;
use chain_heroes::{ClientConfig, driver, logging};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    let _log_guard = logging::setup_logging(config.log_to_file)?;

    tracing::info!("Starting Chain Heroes");
    tracing::debug!("Configuration: {:?}", config);

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    let final_state = driver::run(config, shutdown).await?;
    tracing::info!(
        "Hero {} finished at level {} with {:.1} experience",
        final_state.name,
        final_state.level,
        final_state.experience
    );

    Ok(())
}
