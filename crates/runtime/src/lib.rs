//! Runtime orchestration for hero training.
//!
//! This crate wraps a [`game_core::Hero`] in a background worker task so that
//! expeditions can run for their full duration while any number of readers
//! poll the hero's state. Consumers build a [`Runtime`] per hero and interact
//! with it through the cloneable [`HeroHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] broadcasts training progress to optional subscribers
//! - `workers` keeps the background task internal to the crate
pub mod api;
pub mod events;
pub mod runtime;

mod workers;

pub use api::{HeroHandle, Result, RuntimeError, TrainingHandle, TrainingId, TrainingOutcome};
pub use events::{EventBus, HeroEvent};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
