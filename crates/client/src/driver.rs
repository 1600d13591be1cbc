//! Training loop that drives a single hero.
//!
//! Every training interval the hero is sent on the configured expedition;
//! every status interval the latest snapshot is printed. The loop never
//! mutates the hero directly, it only talks to the runtime handle.

use std::future::Future;

use anyhow::{Context, Result};
use tokio::time::{MissedTickBehavior, interval};
use tracing::{info, warn};

use game_core::{GameError, Hero, HeroSnapshot};
use runtime::{HeroHandle, Runtime, RuntimeError};

use crate::config::ClientConfig;
use crate::status;

/// Runs the driver until `shutdown` resolves or the configured rounds are done.
///
/// Returns the hero's final state.
pub async fn run(config: ClientConfig, shutdown: impl Future<Output = ()>) -> Result<HeroSnapshot> {
    let hero = Hero::new(config.hero_name.as_str()).context("Invalid HERO_NAME")?;
    let runtime = Runtime::builder()
        .config(config.runtime.clone())
        .hero(hero)
        .build()
        .await?;

    drive(runtime, &config, shutdown).await
}

/// Drives `runtime` and always shuts it down, even when a round fails.
pub(crate) async fn drive(
    runtime: Runtime,
    config: &ClientConfig,
    shutdown: impl Future<Output = ()>,
) -> Result<HeroSnapshot> {
    let handle = runtime.handle();

    info!(
        "Hero {} ready; expedition {} every {:?}",
        handle.name(),
        config.expedition.name,
        config.training_interval
    );

    let rounds = run_rounds(&handle, config, shutdown).await;
    let stopped = runtime.shutdown().await;
    rounds?;
    stopped?;

    let final_state = handle.snapshot();
    println!("{}", status::render(&final_state, config.status_format)?);
    Ok(final_state)
}

async fn run_rounds(
    handle: &HeroHandle,
    config: &ClientConfig,
    shutdown: impl Future<Output = ()>,
) -> Result<()> {
    let mut training_tick = interval(config.training_interval);
    training_tick.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut status_tick = interval(config.status_refresh);
    status_tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

    tokio::pin!(shutdown);
    let mut sent = 0u32;

    loop {
        tokio::select! {
            _ = &mut shutdown => {
                info!("Shutdown requested");
                return Ok(());
            }
            _ = training_tick.tick() => {
                if config.training_rounds.is_some_and(|rounds| sent >= rounds) {
                    if handle.current_status().is_idle() {
                        info!("All {} rounds finished", sent);
                        return Ok(());
                    }
                    continue;
                }

                match handle.train(config.expedition.build()).await {
                    Ok(training) => {
                        sent += 1;
                        info!("Round {}: sent hero on {}", sent, training.expedition_name());
                    }
                    Err(RuntimeError::Hero(e)) if e.severity().is_recoverable() => {
                        warn!("Skipping round: {}", e);
                    }
                    Err(e) => return Err(e).context("Failed to start training"),
                }
            }
            _ = status_tick.tick() => {
                println!("{}", status::render(&handle.snapshot(), config.status_format)?);
            }
        }
    }
}
