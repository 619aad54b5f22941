//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied time steps only
//! - Seeded RNG only
//! - Stable iteration order (actor insertion order)
//! - No rendering, input or I/O

pub mod actor;
pub mod actors;
pub mod grid;
pub mod parser;
pub mod state;
pub mod tick;
pub mod vector;

pub use actor::{Actor, ActorKind, Body, BodyField, Prop};
pub use actors::{Coin, Fireball, Pattern, Player};
pub use grid::{Grid, Obstacle};
pub use parser::{ActorFactory, Dictionary, LevelParser};
pub use state::{ActorId, Level, Status, Touch};
pub use tick::{step_once, tick};
pub use vector::Vector;
