//! Immutable 2D point/displacement
//!
//! Level coordinates are measured in grid cells: x grows to the right,
//! y grows downward (row index).

use std::ops::{Add, Mul};

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// A 2D vector in grid units
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub const ZERO: Vector = Vector::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise sum
    #[inline]
    pub fn plus(self, other: Vector) -> Vector {
        (DVec2::from(self) + DVec2::from(other)).into()
    }

    /// Scale both components by `k`
    #[inline]
    pub fn times(self, k: f64) -> Vector {
        (DVec2::from(self) * k).into()
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        DVec2::from(self).is_finite()
    }

    /// Reject NaN/infinite components, naming the offending argument
    pub(crate) fn ensure_finite(self, what: &'static str) -> Result<Vector, SimError> {
        if self.is_finite() {
            Ok(self)
        } else {
            Err(SimError::NonFiniteVector {
                what,
                x: self.x,
                y: self.y,
            })
        }
    }
}

impl From<DVec2> for Vector {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector> for DVec2 {
    fn from(v: Vector) -> Self {
        DVec2::new(v.x, v.y)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        self.plus(rhs)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, rhs: f64) -> Vector {
        self.times(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_plus_and_times() {
        let a = Vector::new(1.0, 2.0);
        let b = Vector::new(3.0, -4.0);
        assert_eq!(a.plus(b), Vector::new(4.0, -2.0));
        assert_eq!(a.times(-1.0), Vector::new(-1.0, -2.0));
        assert_eq!(a + b, a.plus(b));
        assert_eq!(b * 0.5, Vector::new(1.5, -2.0));
    }

    #[test]
    fn test_ensure_finite() {
        assert!(Vector::new(0.5, 3.0).ensure_finite("pos").is_ok());

        let err = Vector::new(f64::NAN, 0.0).ensure_finite("pos").unwrap_err();
        assert!(matches!(err, SimError::NonFiniteVector { what: "pos", .. }));
        assert!(Vector::new(0.0, f64::INFINITY).ensure_finite("size").is_err());
    }

    proptest! {
        #[test]
        fn plus_is_componentwise(
            ax in -1.0e6..1.0e6f64, ay in -1.0e6..1.0e6f64,
            bx in -1.0e6..1.0e6f64, by in -1.0e6..1.0e6f64,
        ) {
            let sum = Vector::new(ax, ay).plus(Vector::new(bx, by));
            prop_assert_eq!(sum, Vector::new(ax + bx, ay + by));
        }

        #[test]
        fn times_scales_both_components(
            x in -1.0e6..1.0e6f64, y in -1.0e6..1.0e6f64, k in -100.0..100.0f64,
        ) {
            prop_assert_eq!(Vector::new(x, y).times(k), Vector::new(x * k, y * k));
        }
    }
}
