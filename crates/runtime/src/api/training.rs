//! Handle to a single in-flight expedition.
use std::fmt;

use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, oneshot};

use game_core::{Expedition, TrainingReport};

use super::errors::{Result, RuntimeError};
use crate::workers::Command;

/// Identifier assigned by the worker to each accepted training.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TrainingId(pub u64);

impl fmt::Display for TrainingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// How a training ended.
#[derive(Clone, Debug, PartialEq)]
pub enum TrainingOutcome {
    /// The full duration elapsed and the reward was granted.
    Completed(TrainingReport),
    /// Cancelled or interrupted by shutdown; no experience was granted.
    Cancelled(Expedition),
}

/// What the worker hands back when it accepts a training request.
pub(crate) struct TrainingTicket {
    pub id: TrainingId,
    pub expedition_name: String,
    pub completion: oneshot::Receiver<TrainingOutcome>,
}

/// Awaitable, cancellable view of one training.
///
/// Dropping the handle does not cancel the training.
pub struct TrainingHandle {
    id: TrainingId,
    expedition_name: String,
    completion: oneshot::Receiver<TrainingOutcome>,
    command_tx: mpsc::Sender<Command>,
}

impl TrainingHandle {
    pub(crate) fn new(ticket: TrainingTicket, command_tx: mpsc::Sender<Command>) -> Self {
        Self {
            id: ticket.id,
            expedition_name: ticket.expedition_name,
            completion: ticket.completion,
            command_tx,
        }
    }

    pub fn id(&self) -> TrainingId {
        self.id
    }

    pub fn expedition_name(&self) -> &str {
        &self.expedition_name
    }

    /// Non-blocking check for the outcome.
    ///
    /// Returns `Ok(None)` while the expedition is still underway. Once an
    /// outcome has been returned here, [`Self::wait`] no longer yields it.
    pub fn try_outcome(&mut self) -> Result<Option<TrainingOutcome>> {
        match self.completion.try_recv() {
            Ok(outcome) => Ok(Some(outcome)),
            Err(oneshot::error::TryRecvError::Empty) => Ok(None),
            Err(oneshot::error::TryRecvError::Closed) => Err(RuntimeError::TrainingDropped),
        }
    }

    /// Waits until the expedition completes or is cancelled.
    pub async fn wait(self) -> Result<TrainingOutcome> {
        self.completion
            .await
            .map_err(|_| RuntimeError::TrainingDropped)
    }

    /// Abandons the training. The hero returns to idle without experience.
    pub async fn cancel(self) -> Result<Expedition> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::Cancel {
                training: self.id,
                reply: reply_tx,
            })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)?
    }
}

impl fmt::Debug for TrainingHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrainingHandle")
            .field("id", &self.id)
            .field("expedition_name", &self.expedition_name)
            .finish_non_exhaustive()
    }
}
