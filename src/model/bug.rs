//! Bug agents: mobile grid dwellers that eat, grow and reproduce.

use std::fmt;

use crate::model::cell::HabitatCell;
use crate::model::error::{ModelError, Result};
use crate::model::grid::GridPoint;

/// How much food a bug can eat from its cell in one tick, by default.
pub const DEFAULT_MAX_CONSUMPTION_RATE: f64 = 1.0;

#[derive(Debug, Clone)]
pub struct Bug {
    position: GridPoint,
    size: f64,
    max_consumption_rate: f64,
}

impl Bug {
    /// An adult bug of size 1, as scattered at world-build time.
    pub fn new(position: GridPoint) -> Self {
        Self {
            position,
            size: 1.0,
            max_consumption_rate: DEFAULT_MAX_CONSUMPTION_RATE,
        }
    }

    /// A newborn of size 0, as placed by reproduction.
    pub fn hatchling(position: GridPoint) -> Self {
        Self {
            size: 0.0,
            ..Self::new(position)
        }
    }

    pub fn position(&self) -> GridPoint {
        self.position
    }

    pub fn set_position(&mut self, position: GridPoint) {
        self.position = position;
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn set_size(&mut self, size: f64) -> Result<()> {
        if size < 0.0 {
            return Err(ModelError::NegativeValue {
                name: "size",
                value: size,
            });
        }
        self.size = size;
        Ok(())
    }

    pub fn max_consumption_rate(&self) -> f64 {
        self.max_consumption_rate
    }

    pub fn set_max_consumption_rate(&mut self, rate: f64) -> Result<()> {
        if rate < 0.0 {
            return Err(ModelError::NegativeValue {
                name: "max_consumption_rate",
                value: rate,
            });
        }
        self.max_consumption_rate = rate;
        Ok(())
    }

    /// Eats from the co-located cell: the amount is capped both by the bug's
    /// consumption rate and by what the cell holds. The bug grows by the
    /// amount eaten, which is returned.
    pub fn eat(&mut self, cell: &mut HabitatCell) -> Result<f64> {
        let eaten = self.max_consumption_rate.min(cell.food_availability());
        cell.food_consumed(eaten)?;
        self.size += eaten;
        Ok(eaten)
    }

    pub fn can_reproduce(&self, threshold: f64) -> bool {
        self.size >= threshold
    }
}

impl fmt::Display for Bug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bug @ ({}, {}), size={}",
            self.position.x, self.position.y, self.size
        )
    }
}
