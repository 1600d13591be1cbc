//! Unified error types surfaced by the runtime API.
//!
//! Wraps hero rule violations and worker coordination failures so clients can
//! bubble them up with consistent context.
use thiserror::Error;
use tokio::sync::oneshot;

use game_core::HeroError;

use super::training::TrainingId;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Hero(#[from] HeroError),

    #[error("runtime requires a hero to be configured before building")]
    MissingHero,

    #[error("training {training} is no longer in progress")]
    TrainingFinished { training: TrainingId },

    #[error("training worker stopped before training finished")]
    TrainingDropped,

    #[error("training worker command channel closed")]
    CommandChannelClosed,

    #[error("training worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("training worker stopped publishing hero state")]
    WorkerStopped,

    #[error("training worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),
}
