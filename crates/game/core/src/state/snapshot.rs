use std::num::NonZeroU64;

use super::Status;

/// Point-in-time copy of a hero's observable fields.
///
/// Taken in one piece so readers never see a level from one moment paired
/// with experience from another.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeroSnapshot {
    pub name: String,
    pub level: NonZeroU64,
    pub experience: f64,
    pub status: Status,
    /// Name of the expedition in progress; `None` unless training.
    pub expedition: Option<String>,
}
