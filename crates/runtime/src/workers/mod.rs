//! Worker tasks that back the runtime orchestration.
//!
//! The training worker is the only owner of a hero's mutable state.

mod training;

pub(crate) use training::{Command, TrainingWorker};
