//! Actors and their bounding boxes
//!
//! Every simulated entity is an [`Actor`]: a position, size and speed plus a
//! closed set of variant behaviours ([`ActorKind`]). Collision uses the
//! axis-aligned box spanned by `pos` and `pos + size`.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use serde::{Deserialize, Serialize};

use super::coin::Coin;
use super::fireball::{Fireball, FireballKind};
use super::grid::Grid;
use super::vector::Vector;
use crate::consts::*;
use crate::error::SimError;

/// Counter for generating unique actor IDs
static NEXT_ACTOR_ID: AtomicU32 = AtomicU32::new(1);

/// Identity of an actor, unique within the process
///
/// Drawn at construction, so clones share it. Deserialized ids push the
/// counter past themselves so later actors never reuse them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct ActorId(u32);

impl ActorId {
    fn next() -> Self {
        Self(NEXT_ACTOR_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for ActorId {
    fn from(raw: u32) -> Self {
        NEXT_ACTOR_ID.fetch_max(raw.saturating_add(1), Ordering::Relaxed);
        Self(raw)
    }
}

impl From<ActorId> for u32 {
    fn from(id: ActorId) -> Self {
        id.0
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Type tag shared by all actors of a family (fireball variants share `Fireball`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActorType {
    Actor,
    Player,
    Coin,
    Fireball,
}

impl ActorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActorType::Actor => "actor",
            ActorType::Player => "player",
            ActorType::Coin => "coin",
            ActorType::Fireball => "fireball",
        }
    }
}

impl fmt::Display for ActorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Elapsed simulation time for one update, in time units
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Step(f64);

impl Step {
    /// One time unit, the step used when the caller has nothing better
    pub const UNIT: Step = Step(DEFAULT_STEP);

    pub fn new(dt: f64) -> Result<Self, SimError> {
        if dt.is_finite() && dt >= 0.0 {
            Ok(Self(dt))
        } else {
            Err(SimError::InvalidStep(dt))
        }
    }

    #[inline]
    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for Step {
    fn default() -> Self {
        Self::UNIT
    }
}

impl TryFrom<f64> for Step {
    type Error = SimError;

    fn try_from(dt: f64) -> Result<Self, Self::Error> {
        Self::new(dt)
    }
}

impl From<Step> for f64 {
    fn from(step: Step) -> Self {
        step.0
    }
}

/// Per-variant state and behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ActorKind {
    /// Inert actor with no behaviour of its own
    Plain,
    /// Static collider, moved only by an external controller
    Player,
    /// Bobbing pickup
    Coin(Coin),
    /// Linear mover reacting to obstacles
    Fireball(Fireball),
}

/// A simulated entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    id: ActorId,
    pub pos: Vector,
    pub size: Vector,
    pub speed: Vector,
    kind: ActorKind,
}

impl Actor {
    /// Plain actor with an explicit box and speed
    pub fn new(pos: Vector, size: Vector, speed: Vector) -> Result<Self, SimError> {
        Self::with_kind(pos, size, speed, ActorKind::Plain)
    }

    /// Plain unit-sized, stationary actor
    pub fn at(pos: Vector) -> Result<Self, SimError> {
        Self::new(pos, ACTOR_SIZE, Vector::ZERO)
    }

    pub fn player(spawn: Vector) -> Result<Self, SimError> {
        let spawn = spawn.ensure_finite("pos")?;
        Self::with_kind(
            spawn.plus(PLAYER_OFFSET),
            PLAYER_SIZE,
            Vector::ZERO,
            ActorKind::Player,
        )
    }

    /// Coin centred in its spawn cell, with the spring phase supplied by the caller
    pub fn coin(spawn: Vector, spring: f64) -> Result<Self, SimError> {
        let spawn = spawn.ensure_finite("pos")?;
        if !spring.is_finite() {
            return Err(SimError::InvalidSpringPhase(spring));
        }
        let anchor = spawn.plus(COIN_OFFSET);
        Self::with_kind(
            anchor,
            COIN_SIZE,
            Vector::ZERO,
            ActorKind::Coin(Coin::new(anchor, spring)),
        )
    }

    /// Fireball with a caller-chosen speed that bounces off obstacles
    pub fn fireball(pos: Vector, speed: Vector) -> Result<Self, SimError> {
        Self::fireball_of(FireballKind::Bouncing, pos, speed)
    }

    pub fn horizontal_fireball(pos: Vector) -> Result<Self, SimError> {
        Self::fireball_of(FireballKind::Horizontal, pos, HORIZONTAL_FIREBALL_SPEED)
    }

    pub fn vertical_fireball(pos: Vector) -> Result<Self, SimError> {
        Self::fireball_of(FireballKind::Vertical, pos, VERTICAL_FIREBALL_SPEED)
    }

    /// Falling fireball that restarts from its spawn point when blocked
    pub fn fire_rain(pos: Vector) -> Result<Self, SimError> {
        Self::fireball_of(FireballKind::Rain, pos, FIRE_RAIN_SPEED)
    }

    fn fireball_of(kind: FireballKind, pos: Vector, speed: Vector) -> Result<Self, SimError> {
        let pos = pos.ensure_finite("pos")?;
        Self::with_kind(
            pos,
            FIREBALL_SIZE,
            speed,
            ActorKind::Fireball(Fireball::new(kind, pos)),
        )
    }

    fn with_kind(
        pos: Vector,
        size: Vector,
        speed: Vector,
        kind: ActorKind,
    ) -> Result<Self, SimError> {
        Ok(Self {
            id: ActorId::next(),
            pos: pos.ensure_finite("pos")?,
            size: size.ensure_finite("size")?,
            speed: speed.ensure_finite("speed")?,
            kind,
        })
    }

    pub fn id(&self) -> ActorId {
        self.id
    }

    pub fn kind(&self) -> &ActorKind {
        &self.kind
    }

    pub fn actor_type(&self) -> ActorType {
        match self.kind {
            ActorKind::Plain => ActorType::Actor,
            ActorKind::Player => ActorType::Player,
            ActorKind::Coin(_) => ActorType::Coin,
            ActorKind::Fireball(_) => ActorType::Fireball,
        }
    }

    pub fn as_coin(&self) -> Option<&Coin> {
        match &self.kind {
            ActorKind::Coin(coin) => Some(coin),
            _ => None,
        }
    }

    pub fn as_fireball(&self) -> Option<&Fireball> {
        match &self.kind {
            ActorKind::Fireball(fireball) => Some(fireball),
            _ => None,
        }
    }

    #[inline]
    pub fn left(&self) -> f64 {
        self.pos.x
    }

    #[inline]
    pub fn top(&self) -> f64 {
        self.pos.y
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.pos.y + self.size.y
    }

    /// Same actor: the same object, or a clone or snapshot of it
    pub fn is_same(&self, other: &Actor) -> bool {
        self.id == other.id
    }

    /// Box overlap test. Boxes that only share an edge do not intersect,
    /// and an actor never intersects itself.
    pub fn is_intersect(&self, other: &Actor) -> bool {
        if self.is_same(other) {
            return false;
        }
        if self.top() >= other.bottom() {
            return false;
        }
        if self.bottom() <= other.top() {
            return false;
        }
        if self.right() <= other.left() {
            return false;
        }
        if self.left() >= other.right() {
            return false;
        }
        true
    }

    /// Where linear motion would take the actor after `step`
    pub fn next_position(&self, step: Step) -> Vector {
        self.pos.plus(self.speed.times(step.get()))
    }

    /// Variant reaction to being blocked. Only fireballs react.
    pub fn handle_obstacle(&mut self) {
        if let ActorKind::Fireball(fireball) = &self.kind {
            fireball.handle_obstacle(&mut self.pos, &mut self.speed);
        }
    }

    /// Advance the actor by one update
    pub fn act(&mut self, step: Step, grid: &Grid) -> Result<(), SimError> {
        match &mut self.kind {
            ActorKind::Plain | ActorKind::Player => {}
            ActorKind::Coin(coin) => {
                self.pos = coin.next_position(step);
            }
            ActorKind::Fireball(fireball) => {
                let next = self.pos.plus(self.speed.times(step.get()));
                if grid.obstacle_at(next, self.size)?.is_some() {
                    fireball.handle_obstacle(&mut self.pos, &mut self.speed);
                } else {
                    self.pos = next;
                }
            }
        }
        Ok(())
    }
}
