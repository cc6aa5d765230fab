//! Coin spring motion
//!
//! A coin hovers at a fixed anchor and bobs vertically along a sine wave.
//! The starting phase is injected at construction so runs are reproducible.

use serde::{Deserialize, Serialize};

use super::actor::Step;
use super::vector::Vector;
use crate::consts::{COIN_SPRING_DIST, COIN_SPRING_SPEED};

/// Spring state of a coin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    /// Oscillation anchor (the offset spawn point)
    pub abs_pos: Vector,
    /// Current phase (radians)
    pub spring: f64,
    /// Phase advance per time unit
    pub spring_speed: f64,
    /// Bob amplitude
    pub spring_dist: f64,
}

impl Coin {
    pub fn new(abs_pos: Vector, spring: f64) -> Self {
        Self {
            abs_pos,
            spring,
            spring_speed: COIN_SPRING_SPEED,
            spring_dist: COIN_SPRING_DIST,
        }
    }

    pub fn update_spring(&mut self, step: Step) {
        self.spring += self.spring_speed * step.get();
    }

    pub fn spring_vector(&self) -> Vector {
        Vector::new(0.0, self.spring.sin() * self.spring_dist)
    }

    /// Advance the phase and return the resulting box position
    pub fn next_position(&mut self, step: Step) -> Vector {
        self.update_spring(step);
        self.abs_pos.plus(self.spring_vector())
    }
}
