//! Headless simulation tick
//!
//! Advances a level the way the game runner does: actors act, the player is
//! checked against the grid and the other actors, and a decided level
//! counts down its finish delay.

use super::state::{Level, Status, Touch};
use crate::error::SimError;

/// Advance `level` by `dt` seconds in slices of at most `max_step`
///
/// A non-positive or non-finite `max_step` runs `dt` as a single slice.
/// A non-finite `dt` is rejected.
pub fn tick(level: &mut Level, dt: f64, max_step: f64) -> Result<(), SimError> {
    if !dt.is_finite() {
        return Err(SimError::InvalidTime(dt));
    }
    let max_step = if max_step.is_finite() && max_step > 0.0 {
        max_step
    } else {
        dt
    };

    let mut remaining = dt;
    while remaining > 0.0 {
        let step = remaining.min(max_step);
        step_once(level, step)?;
        remaining -= step;
    }
    Ok(())
}

/// One slice of a tick
pub fn step_once(level: &mut Level, step: f64) -> Result<(), SimError> {
    if !step.is_finite() {
        return Err(SimError::InvalidTime(step));
    }
    level.act_all(step)?;

    if let Some(player) = level.player() {
        let obstacle = level.obstacle_at(player.pos(), player.size())?;
        let other = level.actor_at(player)?.map(|(id, actor)| (id, actor.kind()));

        if let Some(obstacle) = obstacle {
            level.player_touched(Touch::Obstacle(obstacle), None);
        }
        if let Some((id, kind)) = other {
            level.player_touched(Touch::Actor(kind), Some(id));
        }
    }

    if level.status() != Status::Playing {
        level.finish_delay -= step;
    }
    Ok(())
}
