//! Experience curve and level-up bookkeeping.
//!
//! A hero at level `L` needs `L²` experience to reach `L + 1`. Surplus
//! experience carries over, so a single grant may cross several thresholds.
use std::num::NonZeroU64;

use crate::state::HeroError;

/// Largest experience amount accepted in a single grant.
///
/// Bounds the number of iterations the carry-over loop can take.
pub const MAX_EXPERIENCE_GRANT: f64 = 1.0e12;

/// Experience required to advance from `level` to the next one.
pub fn required_experience(level: NonZeroU64) -> f64 {
    let level = level.get() as f64;
    level * level
}

/// Rejects amounts the carry-over loop cannot resolve soundly.
pub(crate) fn validate_grant(amount: f64) -> Result<f64, HeroError> {
    if amount.is_finite() && (0.0..=MAX_EXPERIENCE_GRANT).contains(&amount) {
        Ok(amount)
    } else {
        Err(HeroError::InvalidExperience { amount })
    }
}

/// Outcome of resolving an experience grant.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelUp {
    /// Level before the grant.
    pub from: NonZeroU64,
    /// Level after the grant.
    pub to: NonZeroU64,
    /// Experience carried into the new level.
    pub experience: f64,
}

impl LevelUp {
    pub fn levels_gained(&self) -> u64 {
        self.to.get() - self.from.get()
    }

    pub fn leveled_up(&self) -> bool {
        self.to > self.from
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(n: u64) -> NonZeroU64 {
        NonZeroU64::new(n).unwrap()
    }

    #[test]
    fn curve_is_quadratic() {
        assert_eq!(required_experience(level(1)), 1.0);
        assert_eq!(required_experience(level(2)), 4.0);
        assert_eq!(required_experience(level(3)), 9.0);
        assert_eq!(required_experience(level(10)), 100.0);
    }

    #[test]
    fn grant_validation_bounds() {
        assert_eq!(validate_grant(0.0), Ok(0.0));
        assert_eq!(validate_grant(MAX_EXPERIENCE_GRANT), Ok(MAX_EXPERIENCE_GRANT));
        assert!(validate_grant(-0.5).is_err());
        assert!(validate_grant(f64::NAN).is_err());
        assert!(validate_grant(f64::INFINITY).is_err());
        assert!(validate_grant(MAX_EXPERIENCE_GRANT * 2.0).is_err());
    }

    #[test]
    fn levels_gained_counts_thresholds() {
        let report = LevelUp {
            from: level(2),
            to: level(5),
            experience: 0.5,
        };
        assert_eq!(report.levels_gained(), 3);
        assert!(report.leveled_up());
    }
}
