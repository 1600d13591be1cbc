//! High-level runtime orchestrator.
//!
//! The runtime owns the hero's training worker, wires up the command, snapshot
//! and event channels, and exposes a builder-based API for drivers.

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use game_core::Hero;

use crate::api::{HeroHandle, Result, RuntimeError};
use crate::events::EventBus;
use crate::workers::{Command, TrainingWorker};

/// Runtime configuration shared across the orchestrator and worker.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            event_buffer_size: 100,
            command_buffer_size: 32,
        }
    }
}

/// Runtime that owns one hero's training worker
///
/// Design: each hero gets its own runtime, so heroes never contend with each
/// other. [`HeroHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    handle: HeroHandle,
    worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    ///
    /// The handle can be shared across clients and async tasks.
    pub fn handle(&self) -> HeroHandle {
        self.handle.clone()
    }

    /// Shutdown the runtime gracefully
    ///
    /// An expedition still underway is cancelled: the hero returns to idle
    /// without experience and its [`crate::TrainingHandle`] resolves as
    /// cancelled. Read accessors on outstanding handles keep returning the
    /// final state.
    pub async fn shutdown(self) -> Result<()> {
        match self.handle.stop_worker().await {
            Ok(()) => {}
            // Worker already gone; joining below surfaces any panic
            Err(RuntimeError::CommandChannelClosed | RuntimeError::ReplyChannelClosed(_)) => {}
            Err(e) => return Err(e),
        }

        self.worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)?;

        Ok(())
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    hero: Option<Hero>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            hero: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the hero the runtime will own (required)
    pub fn hero(mut self, hero: Hero) -> Self {
        self.hero = Some(hero);
        self
    }

    /// Build the runtime and spawn its training worker
    pub async fn build(self) -> Result<Runtime> {
        let hero = self.hero.ok_or(RuntimeError::MissingHero)?;

        let (command_tx, command_rx) =
            mpsc::channel::<Command>(self.config.command_buffer_size.max(1));
        let (snapshot_tx, snapshot_rx) = watch::channel(hero.snapshot());
        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);

        let handle = HeroHandle::new(command_tx, snapshot_rx, event_bus.clone());

        let worker = TrainingWorker::new(hero, command_rx, snapshot_tx, event_bus);
        let worker_handle = tokio::spawn(async move {
            worker.run().await;
        });

        Ok(Runtime {
            handle,
            worker_handle,
        })
    }
}
