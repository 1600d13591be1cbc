//! Timed activity a hero can be sent on.
use std::time::Duration;

/// Immutable description of an expedition: how long it takes and how much
/// experience it grants on completion.
///
/// Construction accepts any values; the reward is validated when a hero
/// starts training on it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Expedition {
    name: String,
    duration: Duration,
    experience_reward: f64,
}

impl Expedition {
    pub fn new(name: impl Into<String>, duration: Duration, experience_reward: f64) -> Self {
        Self {
            name: name.into(),
            duration,
            experience_reward,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn experience_reward(&self) -> f64 {
        self.experience_reward
    }
}
