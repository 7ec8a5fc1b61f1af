use crate::error::{Error, Result};

/// An implementation of a time-decaying value
pub trait Decay {
    /// Calculate value at time `t`
    fn evaluate(&self, t: f32) -> f32;
}

fn validate(rate: f32, vi: f32, vf: f32) -> Result<()> {
    ((rate >= 0.0 && vi >= vf) || (rate < 0.0 && vi <= vf))
        .then_some(())
        .ok_or(Error::DecayDirection { rate, vi, vf })
}

/// A constant value
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Constant {
    value: f32,
}

impl Constant {
    pub fn new(value: f32) -> Self {
        Self { value }
    }
}

impl Decay for Constant {
    fn evaluate(&self, _t: f32) -> f32 {
        self.value
    }
}

/// v(t) = max(v<sub>i</sub> * r<sup>floor(t)</sup>, v<sub>f</sub>)
///
/// Equivalent to multiplying the value by `rate` once per unit of time and
/// clamping it at the floor `vf`. The dodge agent advances `t` once per
/// collision.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Geometric {
    rate: f32,
    vi: f32,
    vf: f32,
}

impl Geometric {
    /// **Errors** if `rate` is not in `[0,1]` or `vi` is below the floor `vf`
    pub fn new(rate: f32, vi: f32, vf: f32) -> Result<Self> {
        crate::error::check_interval("rate", rate, 0.0, 1.0)?;
        validate(rate, vi, vf)?;
        Ok(Self { rate, vi, vf })
    }

    pub fn floor(&self) -> f32 {
        self.vf
    }
}

impl Decay for Geometric {
    fn evaluate(&self, t: f32) -> f32 {
        let &Self { rate, vi, vf } = self;
        (vi * rate.powf(t.floor())).max(vf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_functional() {
        assert!(validate(1.0, 1.0, 0.0).is_ok());
        assert!(validate(1.0, -1.0, 0.0).is_err());
        assert!(validate(-1.0, 1.0, 0.0).is_err());
        assert!(validate(-1.0, -1.0, 0.0).is_ok());
    }

    #[test]
    fn constant_decay() {
        let x = Constant::new(0.25);
        assert_eq!(x.evaluate(0.0), 0.25);
        assert_eq!(x.evaluate(1000.0), 0.25);
    }

    #[test]
    fn geometric_decay() {
        let x = Geometric::new(0.5, 2.0, 0.3).unwrap();
        assert_eq!(x.evaluate(0.0), 2.0);
        assert_eq!(x.evaluate(1.0), 1.0);
        assert_eq!(x.evaluate(1.9), 1.0, "Only whole steps count");
        assert_eq!(x.evaluate(2.0), 0.5);
        assert_eq!(x.evaluate(3.0), 0.3, "Clamped at the floor");
    }

    #[test]
    fn geometric_rejects_bad_parameters() {
        assert!(Geometric::new(1.5, 0.3, 0.05).is_err(), "Rate above one");
        assert!(Geometric::new(0.995, 0.01, 0.05).is_err(), "Start below floor");
    }

    #[test]
    fn epsilon_schedule_never_drops_below_floor() {
        let x = Geometric::new(0.995, 0.3, 0.05).unwrap();
        let mut prev = x.evaluate(0.0);
        assert_eq!(prev, 0.3);
        for t in 1..5000 {
            let eps = x.evaluate(t as f32);
            assert!(eps <= prev, "Monotonically non-increasing");
            assert!(eps >= 0.05, "Never below the floor");
            prev = eps;
        }
        assert_eq!(prev, 0.05, "Floor reached eventually");
    }
}
