//! Lava Run - a tile-and-actor platformer simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (vectors, actors, levels, plan parsing, ticks)
//! - `campaign`: Ordered level sets; win advances, loss restarts
//! - `settings`: Data-driven run configuration
//! - `error`: Error types

pub mod campaign;
pub mod error;
pub mod settings;
pub mod sim;

pub use campaign::{Campaign, CampaignEvent, LevelSet};
pub use error::{CampaignError, SimError};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    use crate::sim::Vector;

    /// Fixed timestep used by the headless driver (60 Hz)
    pub const SIM_DT: f64 = 1.0 / 60.0;
    /// Longest slice a tick is split into
    pub const MAX_STEP: f64 = 0.05;
    /// Seconds a decided level keeps running before it reports finished
    pub const FINISH_DELAY: f64 = 1.0;
    /// Seed used when none is configured
    pub const DEFAULT_SEED: u64 = 0x1A7A;

    /// Player hit-box, lifted half a cell off its spawn cell
    pub const PLAYER_SIZE: Vector = Vector::new(0.8, 1.5);
    pub const PLAYER_OFFSET: Vector = Vector::new(0.0, -0.5);

    /// Coin hit-box, centred-ish in its spawn cell
    pub const COIN_SIZE: Vector = Vector::new(0.6, 0.6);
    pub const COIN_OFFSET: Vector = Vector::new(0.2, 0.1);
    /// Spring phase speed (radians per second)
    pub const COIN_SPRING_SPEED: f64 = 8.0;
    /// Spring amplitude (cells)
    pub const COIN_SPRING_DIST: f64 = 0.07;

    pub const FIREBALL_SIZE: Vector = Vector::new(1.0, 1.0);
    pub const HORIZONTAL_FIREBALL_SPEED: Vector = Vector::new(2.0, 0.0);
    pub const VERTICAL_FIREBALL_SPEED: Vector = Vector::new(0.0, 2.0);
    pub const FIRE_RAIN_SPEED: Vector = Vector::new(0.0, 3.0);
}
