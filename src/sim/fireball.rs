//! Fireball family
//!
//! Fireballs move in a straight line. When the next position would overlap
//! an obstacle they stay put and react instead: most bounce back, fire rain
//! drops again from where it spawned.

use serde::{Deserialize, Serialize};

use super::vector::Vector;

/// Fireball variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FireballKind {
    /// Caller-chosen speed, bounces
    Bouncing,
    /// Moves along x, bounces
    Horizontal,
    /// Moves along y, bounces
    Vertical,
    /// Falls, resets to spawn
    Rain,
}

/// Fireball state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fireball {
    pub kind: FireballKind,
    /// Spawn position, where fire rain restarts
    pub start_pos: Vector,
}

impl Fireball {
    pub fn new(kind: FireballKind, start_pos: Vector) -> Self {
        Self { kind, start_pos }
    }

    /// React to a blocked move
    pub fn handle_obstacle(&self, pos: &mut Vector, speed: &mut Vector) {
        match self.kind {
            FireballKind::Rain => *pos = self.start_pos,
            FireballKind::Bouncing | FireballKind::Horizontal | FireballKind::Vertical => {
                *speed = speed.times(-1.0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Actor, Grid, LevelParser, Obstacle, Step};

    fn grid(rows: &[&str]) -> Grid {
        LevelParser::default().create_grid(rows)
    }

    #[test]
    fn test_next_position() {
        let ball = Actor::fireball(Vector::new(1.0, 1.0), Vector::new(2.0, -1.0)).unwrap();
        assert_eq!(ball.next_position(Step::default()), Vector::new(3.0, 0.0));
        assert_eq!(ball.next_position(Step::new(0.5).unwrap()), Vector::new(2.0, 0.5));
    }

    #[test]
    fn test_moves_when_path_is_clear() {
        let grid = grid(&["     ", "     "]);
        let mut ball = Actor::horizontal_fireball(Vector::new(0.0, 0.0)).unwrap();
        ball.act(Step::default(), &grid).unwrap();
        assert_eq!(ball.pos, Vector::new(2.0, 0.0));
        assert_eq!(ball.speed, Vector::new(2.0, 0.0));
    }

    #[test]
    fn test_horizontal_bounces_off_wall() {
        let grid = grid(&["   x "]);
        let mut ball = Actor::horizontal_fireball(Vector::new(1.0, 0.0)).unwrap();
        assert_eq!(grid.obstacle_at(ball.next_position(Step::default()), ball.size).unwrap(), Some(Obstacle::Wall));

        ball.act(Step::default(), &grid).unwrap();
        assert_eq!(ball.pos, Vector::new(1.0, 0.0));
        assert_eq!(ball.speed, Vector::new(-2.0, 0.0));
    }

    #[test]
    fn test_handle_obstacle_reverses_horizontal_speed() {
        let mut ball = Actor::horizontal_fireball(Vector::new(5.0, 5.0)).unwrap();
        ball.handle_obstacle();
        assert_eq!(ball.speed, Vector::new(-2.0, 0.0));
        assert_eq!(ball.pos, Vector::new(5.0, 5.0));
        ball.handle_obstacle();
        assert_eq!(ball.speed, Vector::new(2.0, 0.0));
    }

    #[test]
    fn test_vertical_bounces_off_lava_floor() {
        // Moving below the last row counts as lava
        let grid = grid(&[" ", " "]);
        let mut ball = Actor::vertical_fireball(Vector::new(0.0, 0.0)).unwrap();
        ball.act(Step::default(), &grid).unwrap();
        assert_eq!(ball.pos, Vector::new(0.0, 0.0));
        assert_eq!(ball.speed, Vector::new(0.0, -2.0));
    }

    #[test]
    fn test_fire_rain_resets_to_spawn() {
        let grid = grid(&[" ", " ", " ", " ", " ", " ", "x"]);
        let mut rain = Actor::fire_rain(Vector::new(0.0, 0.0)).unwrap();

        rain.act(Step::default(), &grid).unwrap();
        assert_eq!(rain.pos, Vector::new(0.0, 3.0));

        // Next drop would hit the wall row: back to the top, speed kept
        rain.act(Step::default(), &grid).unwrap();
        assert_eq!(rain.pos, Vector::new(0.0, 0.0));
        assert_eq!(rain.speed, Vector::new(0.0, 3.0));
    }

    #[test]
    fn test_fire_rain_handle_obstacle() {
        let mut rain = Actor::fire_rain(Vector::new(2.0, 1.0)).unwrap();
        rain.pos = Vector::new(2.0, 7.5);
        rain.handle_obstacle();
        assert_eq!(rain.pos, Vector::new(2.0, 1.0));
        assert_eq!(rain.speed, Vector::new(0.0, 3.0));
    }

    #[test]
    fn test_handle_obstacle_ignored_by_non_fireballs() {
        let mut coin = Actor::coin(Vector::ZERO, 0.0).unwrap();
        let before = coin.clone();
        coin.handle_obstacle();
        assert_eq!(coin, before);
    }
}
