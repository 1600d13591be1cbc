//! Event types published by the training worker.

use std::num::NonZeroU64;
use std::time::Duration;

use game_core::{Expedition, TrainingReport};
use serde::{Deserialize, Serialize};

use crate::api::TrainingId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HeroEvent {
    /// The hero set out on an expedition
    TrainingStarted {
        training: TrainingId,
        expedition: String,
        duration: Duration,
    },

    /// A completed expedition pushed the hero past one or more thresholds
    LeveledUp { from: NonZeroU64, to: NonZeroU64 },

    /// The expedition's duration elapsed and its reward was granted
    TrainingCompleted {
        training: TrainingId,
        report: TrainingReport,
    },

    /// The expedition was abandoned; no experience was granted
    TrainingCancelled {
        training: TrainingId,
        expedition: Expedition,
    },
}
