//! Ember Run - a tile-grid platformer simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (vectors, actors, obstacle grid, level state)
//! - `symbols`: Symbol table mapping level characters to actor spawners
//! - `error`: Precondition failures raised by constructors and queries

pub mod error;
pub mod sim;
pub mod symbols;

pub use error::SimError;
pub use symbols::{Spawner, SymbolTable};

/// Game configuration constants
pub mod consts {
    use crate::sim::Vector;

    /// Delay (in time units) between the status latch and the level counting as finished
    pub const FINISH_DELAY: f64 = 1.0;
    /// Elapsed time used when a caller does not supply one
    pub const DEFAULT_STEP: f64 = 1.0;

    /// Grid symbols for obstacle cells
    pub const WALL_SYMBOL: char = 'x';
    pub const LAVA_SYMBOL: char = '!';

    /// Plain actor defaults
    pub const ACTOR_SIZE: Vector = Vector::new(1.0, 1.0);

    /// Player box, offset from its spawn cell so it stands on the cell below
    pub const PLAYER_OFFSET: Vector = Vector::new(0.0, -0.5);
    pub const PLAYER_SIZE: Vector = Vector::new(0.8, 1.5);

    /// Coin box, centred within its spawn cell
    pub const COIN_OFFSET: Vector = Vector::new(0.2, 0.1);
    pub const COIN_SIZE: Vector = Vector::new(0.6, 0.6);
    /// Spring phase advance per time unit
    pub const COIN_SPRING_SPEED: f64 = 8.0;
    /// Vertical bob amplitude
    pub const COIN_SPRING_DIST: f64 = 0.07;

    /// Fireball box and fixed speeds per variant
    pub const FIREBALL_SIZE: Vector = Vector::new(1.0, 1.0);
    pub const HORIZONTAL_FIREBALL_SPEED: Vector = Vector::new(2.0, 0.0);
    pub const VERTICAL_FIREBALL_SPEED: Vector = Vector::new(0.0, 2.0);
    pub const FIRE_RAIN_SPEED: Vector = Vector::new(0.0, 3.0);
}

/// Decode a JSON list of levels, each an array of row strings
///
/// This is the shape level packs are distributed in; the simulation itself
/// only ever sees the rows of one level at a time.
pub fn parse_level_list(json: &str) -> Result<Vec<Vec<String>>, SimError> {
    serde_json::from_str(json).map_err(SimError::LevelData)
}
