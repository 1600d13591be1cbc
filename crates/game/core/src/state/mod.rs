//! Authoritative hero state representation.
//!
//! Runtime layers own a [`Hero`] and mutate it only through its transition
//! methods; readers work from [`HeroSnapshot`] copies.
pub mod error;
pub mod hero;
pub mod snapshot;
pub mod status;

pub use error::HeroError;
pub use hero::{Hero, TrainingReport};
pub use snapshot::HeroSnapshot;
pub use status::Status;
