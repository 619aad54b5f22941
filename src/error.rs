//! Error types for the simulation core and the campaign loader

use thiserror::Error;

use crate::sim::actor::BodyField;
use crate::sim::vector::Vector;

/// Failures raised by the simulation core
///
/// All of them are boundary checks on values coming from outside the
/// simulation (level data, dictionaries, caller-built actors).
#[derive(Debug, Clone, Error)]
pub enum SimError {
    /// A vector operand had a non-finite component
    #[error("operand is not a finite vector: {0}")]
    InvalidOperand(Vector),
    /// An actor was built from a malformed position, size or speed
    #[error("actor {field} is not a valid vector: {value}")]
    InvalidArgument { field: BodyField, value: Vector },
    /// A time step was NaN or infinite
    #[error("time step is not finite: {0}")]
    InvalidTime(f64),
    /// An actor argument does not hold a well-formed body
    #[error("not a valid actor: {0}")]
    InvalidActor(String),
}

/// Failures while loading or running a campaign
#[derive(Debug, Error)]
pub enum CampaignError {
    #[error("level set parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("level set is empty")]
    Empty,
    #[error(transparent)]
    Sim(#[from] SimError),
}
