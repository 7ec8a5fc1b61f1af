use thiserror::Error;

use crate::game::Phase;

/// Errors raised while configuring or driving the game
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid value for `{name}`: {value} is not in the interval [{low}, {high}]")]
    InvalidInterval {
        name: &'static str,
        value: f32,
        low: f32,
        high: f32,
    },

    #[error("invalid value for `{name}`: {value} must be positive")]
    NonPositive { name: &'static str, value: f32 },

    #[error("`vi - vf` must have the same sign as `rate` (rate={rate}, vi={vi}, vf={vf})")]
    DecayDirection { rate: f32, vi: f32, vf: f32 },

    #[error("cannot {command} while {phase}")]
    InvalidTransition { phase: Phase, command: &'static str },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Checks that `value` lies in the closed interval `[low, high]`
pub(crate) fn check_interval(name: &'static str, value: f32, low: f32, high: f32) -> Result<()> {
    (value >= low && value <= high)
        .then_some(())
        .ok_or(Error::InvalidInterval {
            name,
            value,
            low,
            high,
        })
}

/// Checks that `value` is strictly positive
pub(crate) fn check_positive(name: &'static str, value: f32) -> Result<()> {
    (value > 0.0)
        .then_some(())
        .ok_or(Error::NonPositive { name, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_bounds_are_inclusive() {
        assert!(check_interval("alpha", 0.0, 0.0, 1.0).is_ok());
        assert!(check_interval("alpha", 1.0, 0.0, 1.0).is_ok());
        assert_eq!(
            check_interval("alpha", 1.5, 0.0, 1.0),
            Err(Error::InvalidInterval {
                name: "alpha",
                value: 1.5,
                low: 0.0,
                high: 1.0
            }),
            "Out of range value rejected"
        );
    }

    #[test]
    fn positivity_is_strict() {
        assert!(check_positive("width", 0.5).is_ok());
        assert!(check_positive("width", 0.0).is_err());
        assert!(check_positive("width", -3.0).is_err());
    }

    #[test]
    fn transition_error_message() {
        let err = Error::InvalidTransition {
            phase: Phase::Idle,
            command: "stop training",
        };
        assert_eq!(err.to_string(), "cannot stop training while idle");
    }
}
