//! Concrete actors: player, coin and the fireball family

use std::f64::consts::TAU;

use rand::Rng;

use super::actor::{Actor, ActorKind, Body};
use super::grid::Grid;
use super::vector::Vector;
use crate::consts::*;
use crate::error::SimError;

/// The player's hit-box
///
/// Moved only by outside control; it has no behaviour of its own.
#[derive(Debug, Clone)]
pub struct Player {
    pub body: Body,
}

impl Player {
    /// Player standing on cell `pos`
    ///
    /// The box is lifted by half a cell so a sprite anchored at its feet
    /// lines up with the cell below.
    pub fn new(pos: Vector) -> Result<Self, SimError> {
        Ok(Self {
            body: Body::new(PLAYER_OFFSET.checked_plus(pos)?, PLAYER_SIZE, Vector::ZERO)?,
        })
    }
}

impl Actor for Player {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn kind(&self) -> ActorKind {
        ActorKind::Player
    }
}

/// A bobbing coin
///
/// The bobbing is cosmetic: coins never consult the grid.
#[derive(Debug, Clone)]
pub struct Coin {
    pub body: Body,
    /// Resting position the spring oscillates around
    pub start: Vector,
    /// Current spring phase (radians)
    pub spring: f64,
    pub spring_speed: f64,
    pub spring_dist: f64,
}

impl Coin {
    /// Coin in cell `pos` with a random initial phase in `[0, 2π)`
    pub fn new<R: Rng + ?Sized>(pos: Vector, rng: &mut R) -> Result<Self, SimError> {
        Self::with_phase(pos, rng.random_range(0.0..TAU))
    }

    /// Coin in cell `pos` with a fixed initial phase
    pub fn with_phase(pos: Vector, spring: f64) -> Result<Self, SimError> {
        let start = COIN_OFFSET.checked_plus(pos)?;
        Ok(Self {
            body: Body::new(start, COIN_SIZE, Vector::ZERO)?,
            start,
            spring,
            spring_speed: COIN_SPRING_SPEED,
            spring_dist: COIN_SPRING_DIST,
        })
    }

    /// Vertical displacement for the current phase
    pub fn spring_offset(&self) -> Vector {
        Vector::new(0.0, self.spring.sin() * self.spring_dist)
    }
}

impl Actor for Coin {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn kind(&self) -> ActorKind {
        ActorKind::Coin
    }

    fn act(&mut self, time: f64, _grid: &Grid) -> Result<(), SimError> {
        self.spring += self.spring_speed * time;
        self.body.pos = self.start.plus(self.spring_offset());
        Ok(())
    }
}

/// How a fireball reacts when its next step is blocked
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pattern {
    /// Reverse speed and keep going back and forth
    Bounce,
    /// Jump back to where it was spawned, keeping its speed
    Rain { start: Vector },
}

/// Linearly moving hazard
#[derive(Debug, Clone)]
pub struct Fireball {
    pub body: Body,
    pub pattern: Pattern,
}

impl Fireball {
    /// Bouncing fireball with an arbitrary speed
    pub fn new(pos: Vector, speed: Vector) -> Result<Self, SimError> {
        Ok(Self {
            body: Body::new(pos, FIREBALL_SIZE, speed)?,
            pattern: Pattern::Bounce,
        })
    }

    /// Bounces left and right
    pub fn horizontal(pos: Vector) -> Result<Self, SimError> {
        Self::new(pos, HORIZONTAL_FIREBALL_SPEED)
    }

    /// Bounces up and down
    pub fn vertical(pos: Vector) -> Result<Self, SimError> {
        Self::new(pos, VERTICAL_FIREBALL_SPEED)
    }

    /// Falls and restarts from `pos` whenever it lands
    pub fn rain(pos: Vector) -> Result<Self, SimError> {
        Ok(Self {
            body: Body::new(pos, FIREBALL_SIZE, FIRE_RAIN_SPEED)?,
            pattern: Pattern::Rain { start: pos },
        })
    }

    /// Where the fireball would be after `time` seconds unobstructed
    pub fn next_position(&self, time: f64) -> Vector {
        self.body.pos.plus(self.body.speed.times(time))
    }

    pub fn handle_obstacle(&mut self) {
        match self.pattern {
            Pattern::Bounce => self.body.speed = self.body.speed.times(-1.0),
            Pattern::Rain { start } => self.body.pos = start,
        }
    }
}

impl Actor for Fireball {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    fn kind(&self) -> ActorKind {
        ActorKind::Fireball
    }

    fn act(&mut self, time: f64, grid: &Grid) -> Result<(), SimError> {
        let next = self.next_position(time);
        if grid.obstacle_at(next, self.body.size)?.is_some() {
            self.handle_obstacle();
        } else {
            self.body.pos = next;
        }
        Ok(())
    }
}
