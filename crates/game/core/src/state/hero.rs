//! The hero and its training state machine.
//!
//! ```text
//! Idle --begin_training--> Training --complete_training--> Idle
//!                          Training --abandon_training---> Idle
//! ```
//!
//! Waiting out the expedition's duration is the caller's job; the hero only
//! validates and applies the transitions on either side of that wait.
use std::num::NonZeroU64;

use crate::expedition::Expedition;
use crate::progression::{self, LevelUp};

use super::{HeroError, HeroSnapshot, Status};

/// Result of a completed expedition.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrainingReport {
    pub expedition: Expedition,
    pub experience_gained: f64,
    pub level_up: LevelUp,
}

/// Mutable hero state.
///
/// Invariants, upheld by every method:
/// - `level >= 1` (enforced by the type)
/// - `0 <= experience < level²`
/// - `expedition.is_some()` iff `status == Training`
#[derive(Clone, Debug, PartialEq)]
pub struct Hero {
    name: String,
    level: NonZeroU64,
    experience: f64,
    status: Status,
    expedition: Option<Expedition>,
}

impl Hero {
    /// Creates a level 1 hero with no experience.
    pub fn new(name: impl Into<String>) -> Result<Self, HeroError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(HeroError::InvalidName);
        }

        Ok(Self {
            name,
            level: NonZeroU64::MIN,
            experience: 0.0,
            status: Status::Idle,
            expedition: None,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> NonZeroU64 {
        self.level
    }

    pub fn experience(&self) -> f64 {
        self.experience
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn expedition(&self) -> Option<&Expedition> {
        self.expedition.as_ref()
    }

    pub fn expedition_name(&self) -> Option<&str> {
        self.expedition.as_ref().map(Expedition::name)
    }

    pub fn snapshot(&self) -> HeroSnapshot {
        HeroSnapshot {
            name: self.name.clone(),
            level: self.level,
            experience: self.experience,
            status: self.status,
            expedition: self.expedition_name().map(str::to_owned),
        }
    }

    /// Sends the hero on `expedition`.
    ///
    /// Only an idle hero can start training. The reward is validated up front
    /// so completion can never fail on it.
    pub fn begin_training(&mut self, expedition: Expedition) -> Result<(), HeroError> {
        if !self.status.is_idle() {
            return Err(HeroError::AlreadyTraining {
                status: self.status,
                expedition: self.expedition_name().map(str::to_owned),
            });
        }
        progression::validate_grant(expedition.experience_reward())?;

        self.status = Status::Training;
        self.expedition = Some(expedition);
        Ok(())
    }

    /// Finishes the current expedition: grants its reward and returns to idle.
    pub fn complete_training(&mut self) -> Result<TrainingReport, HeroError> {
        let expedition = self.take_expedition()?;
        let experience_gained = expedition.experience_reward();
        let level_up = self.resolve_level_up(experience_gained);

        Ok(TrainingReport {
            expedition,
            experience_gained,
            level_up,
        })
    }

    /// Cancels the current expedition without granting any experience.
    pub fn abandon_training(&mut self) -> Result<Expedition, HeroError> {
        self.take_expedition()
    }

    /// Grants experience outside of an expedition.
    pub fn gain_experience(&mut self, amount: f64) -> Result<LevelUp, HeroError> {
        let amount = progression::validate_grant(amount)?;
        Ok(self.resolve_level_up(amount))
    }

    fn take_expedition(&mut self) -> Result<Expedition, HeroError> {
        if self.status != Status::Training {
            return Err(HeroError::NotTraining);
        }
        let expedition = self.expedition.take().ok_or(HeroError::NotTraining)?;
        self.status = Status::Idle;
        Ok(expedition)
    }

    /// Converts `gained` into levels, carrying surplus across thresholds.
    ///
    /// `gained` must already be validated.
    pub(crate) fn resolve_level_up(&mut self, gained: f64) -> LevelUp {
        let from = self.level;
        let mut remaining = gained;

        loop {
            let required = progression::required_experience(self.level) - self.experience;
            if required <= remaining {
                self.advance_level();
                remaining -= required;
                continue;
            }

            self.experience += remaining;
            // Rounding can land exactly on the threshold.
            if self.experience >= progression::required_experience(self.level) {
                self.advance_level();
            }
            break;
        }

        debug_assert!(self.experience_in_range(), "experience out of range: {:?}", self);

        LevelUp {
            from,
            to: self.level,
            experience: self.experience,
        }
    }

    fn advance_level(&mut self) {
        self.level = self.level.saturating_add(1);
        self.experience = 0.0;
    }

    fn experience_in_range(&self) -> bool {
        self.experience >= 0.0 && self.experience < progression::required_experience(self.level)
    }
}
