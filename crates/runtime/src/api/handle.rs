//! Cloneable façade for a running hero.
//!
//! [`HeroHandle`] hides channel plumbing: mutations are sent to the training
//! worker as commands, while reads come from the latest snapshot the worker
//! published and never wait on it.
use std::num::NonZeroU64;

use tokio::sync::{broadcast, mpsc, oneshot, watch};
use tokio::time::Instant;

use game_core::{Expedition, HeroSnapshot, Status};

use super::errors::{Result, RuntimeError};
use super::training::TrainingHandle;
use crate::events::{EventBus, HeroEvent};
use crate::workers::Command;

/// Client-facing handle to interact with a hero's runtime
#[derive(Clone)]
pub struct HeroHandle {
    command_tx: mpsc::Sender<Command>,
    snapshot_rx: watch::Receiver<HeroSnapshot>,
    event_bus: EventBus,
}

impl HeroHandle {
    pub(crate) fn new(
        command_tx: mpsc::Sender<Command>,
        snapshot_rx: watch::Receiver<HeroSnapshot>,
        event_bus: EventBus,
    ) -> Self {
        Self {
            command_tx,
            snapshot_rx,
            event_bus,
        }
    }

    /// Send the hero on an expedition.
    ///
    /// Returns once the hero is in `Training`; the returned handle resolves
    /// when the expedition's duration has elapsed. Fails with
    /// [`game_core::HeroError::AlreadyTraining`] if an expedition is already
    /// underway.
    pub async fn train(&self, expedition: Expedition) -> Result<TrainingHandle> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::Train {
                expedition,
                requested_at: Instant::now(),
                reply: reply_tx,
            })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        let ticket = reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)??;

        Ok(TrainingHandle::new(ticket, self.command_tx.clone()))
    }

    /// Latest published state, copied in one piece.
    pub fn snapshot(&self) -> HeroSnapshot {
        self.snapshot_rx.borrow().clone()
    }

    pub fn name(&self) -> String {
        self.snapshot_rx.borrow().name.clone()
    }

    pub fn level(&self) -> NonZeroU64 {
        self.snapshot_rx.borrow().level
    }

    pub fn experience(&self) -> f64 {
        self.snapshot_rx.borrow().experience
    }

    pub fn current_status(&self) -> Status {
        self.snapshot_rx.borrow().status
    }

    /// Name of the expedition in progress, if any.
    pub fn active_expedition_name(&self) -> Option<String> {
        self.snapshot_rx.borrow().expedition.clone()
    }

    /// Wait for the worker to publish a new snapshot and return it.
    pub async fn changed(&mut self) -> Result<HeroSnapshot> {
        self.snapshot_rx
            .changed()
            .await
            .map_err(|_| RuntimeError::WorkerStopped)?;

        Ok(self.snapshot_rx.borrow_and_update().clone())
    }

    /// Subscribe to training events.
    ///
    /// Delivery is best-effort; slow subscribers may observe
    /// [`broadcast::error::RecvError::Lagged`].
    pub fn subscribe(&self) -> broadcast::Receiver<HeroEvent> {
        self.event_bus.subscribe()
    }

    /// Ask the worker to cancel any in-flight training and stop.
    pub(crate) async fn stop_worker(&self) -> Result<()> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::Shutdown { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }
}
