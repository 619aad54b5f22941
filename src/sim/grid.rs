//! Static obstacle grid and obstacle queries

use serde::{Deserialize, Serialize};

use super::vector::Vector;
use crate::error::SimError;

/// A fixed grid cell tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Obstacle {
    Wall,
    Lava,
}

impl Obstacle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Obstacle::Wall => "wall",
            Obstacle::Lava => "lava",
        }
    }

    /// Fixed plan symbol table: `x` is a wall, `!` is lava
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'x' => Some(Obstacle::Wall),
            '!' => Some(Obstacle::Lava),
            _ => None,
        }
    }
}

/// Rows of cells, top row first; `None` is empty space
///
/// Rows may be ragged. Cells past the end of a short row read as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    rows: Vec<Vec<Option<Obstacle>>>,
    /// Longest row, computed once
    width: usize,
}

impl Grid {
    pub fn new(rows: Vec<Vec<Option<Obstacle>>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        Self { rows, width }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<Option<Obstacle>>] {
        &self.rows
    }

    /// Cell at column `x`, row `y`
    pub fn cell(&self, x: usize, y: usize) -> Option<Obstacle> {
        self.rows.get(y).and_then(|row| row.get(x)).copied().flatten()
    }

    /// Obstacle overlapping the box at `pos` with extent `size`
    ///
    /// Leaving the level to the left, right or top is always a wall.
    /// Falling past the bottom is always lava, checked only once the
    /// horizontal and top bounds pass. Otherwise the covered cells are
    /// scanned row-major and the first non-empty one wins.
    pub fn obstacle_at(&self, pos: Vector, size: Vector) -> Result<Option<Obstacle>, SimError> {
        let pos = pos.validated()?;
        let size = size.validated()?;

        let left = pos.x.floor() as i64;
        let right = (pos.x + size.x).ceil() as i64;
        let top = pos.y.floor() as i64;
        let bottom = (pos.y + size.y).ceil() as i64;

        if left < 0 || right > self.width as i64 || top < 0 {
            return Ok(Some(Obstacle::Wall));
        }
        if bottom > self.height() as i64 {
            return Ok(Some(Obstacle::Lava));
        }

        // A negative size leaves an empty span
        if right <= left || bottom <= top {
            return Ok(None);
        }

        // Bounds checked above, so the span is non-negative here
        for y in top as usize..bottom as usize {
            for x in left as usize..right as usize {
                if let Some(obstacle) = self.cell(x, y) {
                    return Ok(Some(obstacle));
                }
            }
        }
        Ok(None)
    }
}
