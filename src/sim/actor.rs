//! Actor contract shared by every moving entity in a level

use std::fmt;

use serde::{Deserialize, Serialize};

use super::grid::Grid;
use super::vector::Vector;
use crate::error::SimError;

/// Type tag reported by an actor
///
/// Several concrete actors may share a tag (every fireball pattern reports
/// [`ActorKind::Fireball`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActorKind {
    #[default]
    Actor,
    Player,
    Coin,
    Fireball,
}

impl ActorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActorKind::Actor => "actor",
            ActorKind::Player => "player",
            ActorKind::Coin => "coin",
            ActorKind::Fireball => "fireball",
        }
    }
}

/// Which body field failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyField {
    Position,
    Size,
    Speed,
}

impl fmt::Display for BodyField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BodyField::Position => "position",
            BodyField::Size => "size",
            BodyField::Speed => "speed",
        })
    }
}

/// Position, size and speed of an actor
///
/// The bounding box is derived from `pos` and `size` and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vector,
    pub size: Vector,
    pub speed: Vector,
}

impl Default for Body {
    fn default() -> Self {
        Self {
            pos: Vector::ZERO,
            size: Vector::ONE,
            speed: Vector::ZERO,
        }
    }
}

impl Body {
    /// Build a body, validating each field in turn
    pub fn new(pos: Vector, size: Vector, speed: Vector) -> Result<Self, SimError> {
        let invalid = |field, value| SimError::InvalidArgument { field, value };
        if !pos.is_valid() {
            return Err(invalid(BodyField::Position, pos));
        }
        if !size.is_valid() || size.x < 0.0 || size.y < 0.0 {
            return Err(invalid(BodyField::Size, size));
        }
        if !speed.is_valid() {
            return Err(invalid(BodyField::Speed, speed));
        }
        Ok(Self { pos, size, speed })
    }

    /// Body at `pos` with default size and no speed
    pub fn at(pos: Vector) -> Result<Self, SimError> {
        Self::new(pos, Vector::ONE, Vector::ZERO)
    }

    /// Check that the body still holds well-formed vectors
    pub fn check(&self) -> Result<(), SimError> {
        Self::new(self.pos, self.size, self.speed)
            .map(|_| ())
            .map_err(|e| SimError::InvalidActor(e.to_string()))
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

    /// Open-interval AABB overlap; touching edges do not count
    pub fn overlaps(&self, other: &Body) -> bool {
        other.left() < self.right()
            && other.right() > self.left()
            && other.top() < self.bottom()
            && other.bottom() > self.top()
    }
}

/// A positioned, sized, moving entity
pub trait Actor: fmt::Debug {
    fn body(&self) -> &Body;

    fn body_mut(&mut self) -> &mut Body;

    /// Type tag, `Actor` unless overridden
    fn kind(&self) -> ActorKind {
        ActorKind::Actor
    }

    /// Advance this actor by `time` seconds
    ///
    /// Only the actor's own body may change. The default does nothing.
    fn act(&mut self, _time: f64, _grid: &Grid) -> Result<(), SimError> {
        Ok(())
    }

    fn pos(&self) -> Vector {
        self.body().pos
    }

    fn size(&self) -> Vector {
        self.body().size
    }

    fn speed(&self) -> Vector {
        self.body().speed
    }

    fn left(&self) -> f64 {
        self.body().left()
    }

    fn top(&self) -> f64 {
        self.body().top()
    }

    fn right(&self) -> f64 {
        self.body().right()
    }

    fn bottom(&self) -> f64 {
        self.body().bottom()
    }

    /// Whether `other` overlaps this actor
    ///
    /// An actor never intersects itself. Fails with `InvalidActor` if
    /// `other` carries a malformed body.
    fn is_intersect(&self, other: &dyn Actor) -> Result<bool, SimError> {
        other.body().check()?;
        if std::ptr::addr_eq(self, other) {
            return Ok(false);
        }
        Ok(self.body().overlaps(other.body()))
    }
}

/// A plain actor with no behaviour of its own
#[derive(Debug, Clone, Default)]
pub struct Prop {
    pub body: Body,
}

impl Prop {
    pub fn new(pos: Vector, size: Vector, speed: Vector) -> Result<Self, SimError> {
        Ok(Self {
            body: Body::new(pos, size, speed)?,
        })
    }
}

impl Actor for Prop {
    fn body(&self) -> &Body {
        &self.body
    }

    fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }
}
