//! Deterministic hero rules shared by the runtime and tools.
//!
//! `game-core` defines the hero state machine, the expedition value it
//! consumes, and the quadratic experience curve. Everything here is pure:
//! waiting out an expedition and sharing state across tasks belong to the
//! `runtime` crate.
pub mod error;
pub mod expedition;
pub mod progression;
pub mod state;

pub use error::{ErrorSeverity, GameError};
pub use expedition::Expedition;
pub use progression::{LevelUp, MAX_EXPERIENCE_GRANT, required_experience};
pub use state::{Hero, HeroError, HeroSnapshot, Status, TrainingReport};
