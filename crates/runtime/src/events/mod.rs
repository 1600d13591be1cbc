//! Training event stream.
//!
//! Events are an optional observation channel; the authoritative hero state is
//! always available through [`crate::HeroHandle`]'s read accessors.

mod bus;
mod types;

pub use bus::EventBus;
pub use types::HeroEvent;
