//! Level state
//!
//! A level owns the obstacle grid and the live actor list, answers collision
//! queries and tracks the win/lose latch. The driver (outside this crate)
//! advances actors, runs the queries and reports touches back here.

use serde::{Deserialize, Serialize};

use super::actor::{Actor, ActorId, ActorType, Step};
use super::grid::{Grid, Obstacle};
use super::vector::Vector;
use crate::consts::FINISH_DELAY;
use crate::error::SimError;

/// Terminal outcome of a level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LevelStatus {
    Won,
    Lost,
}

/// What the player touched: a grid obstacle or another actor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Touch {
    Obstacle(Obstacle),
    Actor(ActorType),
}

impl From<Obstacle> for Touch {
    fn from(obstacle: Obstacle) -> Self {
        Touch::Obstacle(obstacle)
    }
}

impl From<ActorType> for Touch {
    fn from(actor_type: ActorType) -> Self {
        Touch::Actor(actor_type)
    }
}

/// A playable level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    grid: Grid,
    /// Live actors in insertion order
    actors: Vec<Actor>,
    /// First player found at construction; not updated if it is removed
    player: Option<ActorId>,
    status: Option<LevelStatus>,
    finish_delay: f64,
}

impl Default for Level {
    fn default() -> Self {
        Self::new(Grid::default(), Vec::new())
    }
}

impl Level {
    /// Build a level; actor list order is the update order
    pub fn new(grid: Grid, actors: Vec<Actor>) -> Self {
        let player = actors
            .iter()
            .find(|a| a.actor_type() == ActorType::Player)
            .map(Actor::id);
        let level = Self {
            grid,
            actors,
            player,
            status: None,
            finish_delay: FINISH_DELAY,
        };

        log::debug!(
            "Level {}x{} with {} actors",
            level.width(),
            level.height(),
            level.actors.len()
        );
        level
    }

    /// Append an actor to the end of the update order
    pub fn add_actor(&mut self, actor: Actor) -> ActorId {
        let id = actor.id();
        self.actors.push(actor);
        id
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    pub fn actor(&self, id: ActorId) -> Option<&Actor> {
        self.actors.iter().find(|a| a.id() == id)
    }

    /// Mutable access for external controllers (e.g. moving the player)
    pub fn actor_mut(&mut self, id: ActorId) -> Option<&mut Actor> {
        self.actors.iter_mut().find(|a| a.id() == id)
    }

    pub fn player_id(&self) -> Option<ActorId> {
        self.player
    }

    /// The player, while it is still in the actor list
    ///
    /// The level only remembers the player's id, so once that actor is
    /// removed this returns `None` while [`Level::player_id`] keeps
    /// returning the stale id.
    pub fn player(&self) -> Option<&Actor> {
        self.player.and_then(|id| self.actor(id))
    }

    pub fn status(&self) -> Option<LevelStatus> {
        self.status
    }

    pub fn finish_delay(&self) -> f64 {
        self.finish_delay
    }

    /// Status latched and the finish delay has run out
    pub fn is_finished(&self) -> bool {
        self.status.is_some() && self.finish_delay < 0.0
    }

    /// First actor (in list order) whose box overlaps `other`'s
    pub fn actor_at(&self, other: &Actor) -> Option<&Actor> {
        self.actors.iter().find(|actor| other.is_intersect(actor))
    }

    /// First obstacle overlapped by a box, see [`Grid::obstacle_at`]
    pub fn obstacle_at(&self, pos: Vector, size: Vector) -> Result<Option<Obstacle>, SimError> {
        self.grid.obstacle_at(pos, size)
    }

    /// Remove an actor by identity; absent ids are ignored
    pub fn remove_actor(&mut self, id: ActorId) -> Option<Actor> {
        let index = self.actors.iter().position(|a| a.id() == id)?;
        let removed = self.actors.remove(index);
        log::debug!("Removed {} {}", removed.actor_type(), id);
        Some(removed)
    }

    pub fn no_more_actors(&self, actor_type: ActorType) -> bool {
        !self.actors.iter().any(|a| a.actor_type() == actor_type)
    }

    /// Report a player touch, possibly latching the level status
    ///
    /// Once a status is set every further touch is ignored. Lava and
    /// fireballs lose the level. Touching a coin collects it (`moved` is the
    /// coin's id) and the last coin wins the level. Anything else is ignored.
    pub fn player_touched(&mut self, touch: impl Into<Touch>, moved: Option<ActorId>) {
        if self.status.is_some() {
            return;
        }

        match touch.into() {
            Touch::Obstacle(Obstacle::Lava) | Touch::Actor(ActorType::Fireball) => {
                self.latch(LevelStatus::Lost);
            }
            Touch::Actor(ActorType::Coin) => {
                if let Some(id) = moved {
                    self.remove_actor(id);
                    if self.no_more_actors(ActorType::Coin) {
                        self.latch(LevelStatus::Won);
                    }
                }
            }
            _ => {}
        }
    }

    fn latch(&mut self, status: LevelStatus) {
        log::info!("Level {:?}", status);
        self.status = Some(status);
    }

    /// Run `act` on every actor in list order
    pub fn act_actors(&mut self, step: Step) -> Result<(), SimError> {
        let Self { grid, actors, .. } = self;
        for actor in actors.iter_mut() {
            actor.act(step, grid)?;
        }
        Ok(())
    }

    /// Burn down the finish delay once the level has an outcome
    pub fn count_down(&mut self, step: Step) {
        if self.status.is_some() {
            self.finish_delay -= step.get();
        }
    }
}
