//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Elapsed time is supplied by the caller, never read from a clock
//! - Seeded RNG only (coin spring phases)
//! - Stable iteration order (actor list order, fixed at parse time)
//! - No rendering or platform dependencies

pub mod actor;
pub mod coin;
pub mod fireball;
pub mod grid;
pub mod level;
pub mod parser;
pub mod vector;

pub use actor::{Actor, ActorId, ActorKind, ActorType, Step};
pub use coin::Coin;
pub use fireball::{Fireball, FireballKind};
pub use grid::{Cell, Grid, Obstacle};
pub use level::{Level, LevelStatus, Touch};
pub use parser::LevelParser;
pub use vector::Vector;
