//! Level state: obstacle grid, actors and win/lose status

use std::fmt;

use serde::{Deserialize, Serialize};

use super::actor::{Actor, ActorKind};
use super::grid::{Grid, Obstacle};
use super::vector::Vector;
use crate::consts::FINISH_DELAY;
use crate::error::SimError;

/// Outcome of a level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Playing,
    Won,
    Lost,
}

/// Handle to an actor owned by a [`Level`]
///
/// Handles are handed out in insertion order and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActorId(pub u32);

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What the player ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Touch {
    Obstacle(Obstacle),
    Actor(ActorKind),
}

impl Touch {
    pub fn as_str(&self) -> &'static str {
        match self {
            Touch::Obstacle(obstacle) => obstacle.as_str(),
            Touch::Actor(kind) => kind.as_str(),
        }
    }
}

impl From<Obstacle> for Touch {
    fn from(obstacle: Obstacle) -> Self {
        Touch::Obstacle(obstacle)
    }
}

impl From<ActorKind> for Touch {
    fn from(kind: ActorKind) -> Self {
        Touch::Actor(kind)
    }
}

#[derive(Debug)]
struct Slot {
    id: ActorId,
    actor: Box<dyn Actor>,
}

/// A live level
#[derive(Debug)]
pub struct Level {
    grid: Grid,
    /// Kept in insertion order; collision queries depend on it
    actors: Vec<Slot>,
    /// Resolved once at construction
    player: Option<ActorId>,
    status: Status,
    /// Seconds left before a decided level reports finished.
    /// Only the runner decrements this.
    pub finish_delay: f64,
}

impl Level {
    pub fn new(grid: Grid, actors: Vec<Box<dyn Actor>>) -> Self {
        let actors: Vec<Slot> = actors
            .into_iter()
            .zip(0u32..)
            .map(|(actor, id)| Slot {
                id: ActorId(id),
                actor,
            })
            .collect();
        let player = actors
            .iter()
            .find(|slot| slot.actor.kind() == ActorKind::Player)
            .map(|slot| slot.id);

        Self {
            grid,
            actors,
            player,
            status: Status::Playing,
            finish_delay: FINISH_DELAY,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// True once the level is decided and its finish delay ran out
    pub fn is_finished(&self) -> bool {
        self.status != Status::Playing && self.finish_delay < 0.0
    }

    /// Actors in collection order
    pub fn actors(&self) -> impl Iterator<Item = (ActorId, &dyn Actor)> + '_ {
        self.actors.iter().map(|slot| (slot.id, slot.actor.as_ref()))
    }

    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    pub fn actor(&self, id: ActorId) -> Option<&dyn Actor> {
        self.slot_index(id)
            .and_then(|i| self.actors.get(i))
            .map(|slot| slot.actor.as_ref())
    }

    pub fn actor_mut(&mut self, id: ActorId) -> Option<&mut (dyn Actor + 'static)> {
        let index = self.slot_index(id)?;
        self.actors.get_mut(index).map(|slot| slot.actor.as_mut())
    }

    /// Handle of the player found at construction
    pub fn player_id(&self) -> Option<ActorId> {
        self.player
    }

    /// The player, if it is still in the level
    pub fn player(&self) -> Option<&dyn Actor> {
        self.player.and_then(|id| self.actor(id))
    }

    /// First actor, in collection order, that intersects `actor`
    pub fn actor_at(&self, actor: &dyn Actor) -> Result<Option<(ActorId, &dyn Actor)>, SimError> {
        actor.body().check()?;
        for slot in &self.actors {
            if slot.actor.is_intersect(actor)? {
                return Ok(Some((slot.id, slot.actor.as_ref())));
            }
        }
        Ok(None)
    }

    /// See [`Grid::obstacle_at`]
    pub fn obstacle_at(&self, pos: Vector, size: Vector) -> Result<Option<Obstacle>, SimError> {
        self.grid.obstacle_at(pos, size)
    }

    /// Remove an actor, returning it; no-op if it is not here
    pub fn remove_actor(&mut self, id: ActorId) -> Option<Box<dyn Actor>> {
        let index = self.slot_index(id)?;
        Some(self.actors.remove(index).actor)
    }

    /// True when no actor carries `kind`
    pub fn no_more_actors(&self, kind: ActorKind) -> bool {
        !self.actors.iter().any(|slot| slot.actor.kind() == kind)
    }

    /// Run every actor's `act` once, in collection order
    pub fn act_all(&mut self, time: f64) -> Result<(), SimError> {
        for slot in &mut self.actors {
            slot.actor.act(time, &self.grid)?;
        }
        Ok(())
    }

    /// React to the player touching an obstacle or another actor
    ///
    /// Lava and fireballs lose the level. Touching a coin collects it and
    /// wins once the last coin is gone. A decided level ignores all touches.
    pub fn player_touched(&mut self, touch: Touch, actor: Option<ActorId>) {
        if self.status != Status::Playing {
            return;
        }

        log::debug!("Player touched {}", touch.as_str());
        match touch {
            Touch::Obstacle(Obstacle::Lava) | Touch::Actor(ActorKind::Fireball) => {
                self.set_status(Status::Lost);
            }
            Touch::Actor(ActorKind::Coin) => {
                let Some(id) = actor else { return };
                if self.actor(id).map(|a| a.kind()) != Some(ActorKind::Coin) {
                    return;
                }
                self.remove_actor(id);
                log::debug!("Coin {} collected", id);
                if self.no_more_actors(ActorKind::Coin) {
                    self.set_status(Status::Won);
                }
            }
            _ => {}
        }
    }

    fn set_status(&mut self, status: Status) {
        log::info!("Level {:?} -> {:?}", self.status, status);
        self.status = status;
    }

    fn slot_index(&self, id: ActorId) -> Option<usize> {
        self.actors.iter().position(|slot| slot.id == id)
    }
}
