//! Training worker that owns the authoritative [`game_core::Hero`].
//!
//! Receives commands from [`crate::HeroHandle`], applies training transitions,
//! waits out the in-flight expedition, and publishes a fresh
//! [`game_core::HeroSnapshot`] after every transition.

use tokio::sync::{mpsc, oneshot, watch};
use tokio::time::{Duration, Instant, sleep_until};
use tracing::{debug, error, info, warn};

use game_core::{Expedition, GameError, Hero, HeroError, HeroSnapshot};

use crate::api::training::TrainingTicket;
use crate::api::{Result, RuntimeError, TrainingId, TrainingOutcome};
use crate::events::{EventBus, HeroEvent};

/// Commands that can be sent to the training worker
pub(crate) enum Command {
    /// Start an expedition. Rejected while another one is underway.
    ///
    /// The deadline runs from `requested_at`, not from when the worker dequeues it.
    Train {
        expedition: Expedition,
        requested_at: Instant,
        reply: oneshot::Sender<Result<TrainingTicket>>,
    },
    /// Abandon the in-flight expedition if `training` is still underway.
    Cancel {
        training: TrainingId,
        reply: oneshot::Sender<Result<Expedition>>,
    },
    /// Cancel any in-flight expedition and stop the worker.
    Shutdown { reply: oneshot::Sender<()> },
}

struct ActiveTraining {
    id: TrainingId,
    deadline: Instant,
    completion: oneshot::Sender<TrainingOutcome>,
}

/// Background task that serializes every mutation of one hero.
pub(crate) struct TrainingWorker {
    hero: Hero,
    command_rx: mpsc::Receiver<Command>,
    snapshot_tx: watch::Sender<HeroSnapshot>,
    event_bus: EventBus,
    active: Option<ActiveTraining>,
    next_training: u64,
}

impl TrainingWorker {
    pub fn new(
        hero: Hero,
        command_rx: mpsc::Receiver<Command>,
        snapshot_tx: watch::Sender<HeroSnapshot>,
        event_bus: EventBus,
    ) -> Self {
        info!(
            "TrainingWorker initialized for hero {} at level {}",
            hero.name(),
            hero.level()
        );

        Self {
            hero,
            command_rx,
            snapshot_tx,
            event_bus,
            active: None,
            next_training: 1,
        }
    }

    /// Main worker loop.
    pub async fn run(mut self) {
        loop {
            let deadline = self.active.as_ref().map(|active| active.deadline);

            tokio::select! {
                // An elapsed expedition wins over a command arriving at the same instant
                biased;

                _ = wait_for(deadline) => self.finish_training(),
                cmd = self.command_rx.recv() => match cmd {
                    Some(cmd) => {
                        if !self.handle_command(cmd) {
                            break;
                        }
                    }
                    None => {
                        // Every handle is gone; nobody can observe the result
                        self.abandon_active();
                        break;
                    }
                },
            }
        }

        info!("TrainingWorker for hero {} stopped", self.hero.name());
    }

    /// Returns `false` once the worker should stop.
    fn handle_command(&mut self, cmd: Command) -> bool {
        match cmd {
            Command::Train {
                expedition,
                requested_at,
                reply,
            } => {
                let result = self.start_training(expedition, requested_at);
                if reply.send(result).is_err() {
                    debug!("Train reply channel closed (caller dropped)");
                }
            }
            Command::Cancel { training, reply } => {
                let result = self.cancel_training(training);
                if reply.send(result).is_err() {
                    debug!("Cancel reply channel closed (caller dropped)");
                }
            }
            Command::Shutdown { reply } => {
                self.abandon_active();
                if reply.send(()).is_err() {
                    debug!("Shutdown reply channel closed (caller dropped)");
                }
                return false;
            }
        }
        true
    }

    fn start_training(
        &mut self,
        expedition: Expedition,
        requested_at: Instant,
    ) -> Result<TrainingTicket> {
        let name = expedition.name().to_owned();
        let duration = expedition.duration();

        if let Err(e) = self.hero.begin_training(expedition) {
            warn!(
                "Rejected expedition {} for hero {}: {} ({}, {})",
                name,
                self.hero.name(),
                e,
                e.error_code(),
                e.severity().as_str()
            );
            return Err(e.into());
        }

        let id = TrainingId(self.next_training);
        self.next_training += 1;

        let (completion_tx, completion_rx) = oneshot::channel();
        self.active = Some(ActiveTraining {
            id,
            deadline: deadline_after(requested_at, duration),
            completion: completion_tx,
        });

        self.publish_snapshot();
        self.event_bus.publish(HeroEvent::TrainingStarted {
            training: id,
            expedition: name.clone(),
            duration,
        });
        info!(
            "Hero {} started training {} on {} for {:?}",
            self.hero.name(),
            id,
            name,
            duration
        );

        Ok(TrainingTicket {
            id,
            expedition_name: name,
            completion: completion_rx,
        })
    }

    fn finish_training(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        let report = match self.hero.complete_training() {
            Ok(report) => report,
            Err(e) => {
                error!("Training {} could not be completed: {}", active.id, e);
                return;
            }
        };

        // Level, experience and idle status become visible together
        self.publish_snapshot();

        let level_up = report.level_up;
        if level_up.leveled_up() {
            self.event_bus.publish(HeroEvent::LeveledUp {
                from: level_up.from,
                to: level_up.to,
            });
        }
        info!(
            "Hero {} completed {} (+{:.1} exp): level {} -> {}, {:.1} exp",
            self.hero.name(),
            report.expedition.name(),
            report.experience_gained,
            level_up.from,
            level_up.to,
            level_up.experience
        );
        self.event_bus.publish(HeroEvent::TrainingCompleted {
            training: active.id,
            report: report.clone(),
        });

        if active
            .completion
            .send(TrainingOutcome::Completed(report))
            .is_err()
        {
            debug!("Training {} handle dropped before completion", active.id);
        }
    }

    fn cancel_training(&mut self, training: TrainingId) -> Result<Expedition> {
        match &self.active {
            Some(active) if active.id == training => {}
            _ => return Err(RuntimeError::TrainingFinished { training }),
        }

        self.abandon_active()
            .ok_or(RuntimeError::Hero(HeroError::NotTraining))
    }

    /// Abandons the in-flight expedition, if any, resolving its handle as cancelled.
    fn abandon_active(&mut self) -> Option<Expedition> {
        let active = self.active.take()?;

        let expedition = match self.hero.abandon_training() {
            Ok(expedition) => expedition,
            Err(e) => {
                error!("Training {} could not be abandoned: {}", active.id, e);
                return None;
            }
        };

        self.publish_snapshot();
        self.event_bus.publish(HeroEvent::TrainingCancelled {
            training: active.id,
            expedition: expedition.clone(),
        });
        info!(
            "Hero {} abandoned training {} on {}",
            self.hero.name(),
            active.id,
            expedition.name()
        );

        if active
            .completion
            .send(TrainingOutcome::Cancelled(expedition.clone()))
            .is_err()
        {
            debug!("Training {} handle dropped before cancellation", active.id);
        }

        Some(expedition)
    }

    fn publish_snapshot(&self) {
        self.snapshot_tx.send_replace(self.hero.snapshot());
    }
}

/// Deadline `duration` after `start`, clamped for durations too large to represent.
fn deadline_after(start: Instant, duration: Duration) -> Instant {
    start
        .checked_add(duration)
        .unwrap_or_else(|| start + Duration::from_secs(86_400 * 365 * 30))
}

async fn wait_for(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
