//! Headless driver for a single hero.
//!
//! # Architecture
//!
//! ```text
//! main (composition root)
//!   ├─→ config   (environment → ClientConfig)
//!   ├─→ logging  (tracing subscriber setup)
//!   └─→ driver   (training rounds + status refresh over a HeroHandle)
//! ```
//!
//! The driver decides when training starts; the `runtime` crate decides how
//! it runs.

pub mod config;
pub mod driver;
pub mod logging;
pub mod status;

pub use config::{ClientConfig, ExpeditionConfig, StatusFormat};
