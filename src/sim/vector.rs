//! Immutable 2D vector used for positions, sizes and speeds

use std::fmt;
use std::ops::{Add, Deref, Mul, Neg};

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// A 2D value in level units (one unit = one grid cell)
///
/// Thin wrapper over [`DVec2`]; components are reachable as `v.x` / `v.y`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector(DVec2);

impl Vector {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self(DVec2::new(x, y))
    }

    /// Build a vector from untrusted components
    pub fn try_new(x: f64, y: f64) -> Result<Self, SimError> {
        Self::new(x, y).validated()
    }

    /// True when both components are finite
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.0.is_finite()
    }

    /// Returns `self` if valid, `InvalidOperand` otherwise
    pub fn validated(self) -> Result<Self, SimError> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(SimError::InvalidOperand(self))
        }
    }

    /// Componentwise sum
    #[inline]
    #[must_use]
    pub fn plus(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }

    /// Componentwise sum that rejects a malformed operand
    pub fn checked_plus(self, other: Self) -> Result<Self, SimError> {
        Ok(self.plus(other.validated()?))
    }

    /// Componentwise scale
    #[inline]
    #[must_use]
    pub fn times(self, factor: f64) -> Self {
        Self(self.0 * factor)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Deref for Vector {
    type Target = DVec2;

    fn deref(&self) -> &DVec2 {
        &self.0
    }
}

impl From<DVec2> for Vector {
    fn from(v: DVec2) -> Self {
        Self(v)
    }
}

impl From<Vector> for DVec2 {
    fn from(v: Vector) -> Self {
        v.0
    }
}

impl From<(f64, f64)> for Vector {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl Add for Vector {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.plus(rhs)
    }
}

impl Mul<f64> for Vector {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        self.times(rhs)
    }
}

impl Neg for Vector {
    type Output = Self;

    fn neg(self) -> Self {
        self.times(-1.0)
    }
}
