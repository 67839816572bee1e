//! Habitat cells: fixed grid locations with local, regrowing food state.
//!
//! Each cell owns its food availability and maximum food production rate.
//! Once per tick the world asks every cell to grow food; the new availability
//! is mirrored into the shared food value layer so external consumers (e.g.
//! a renderer) can read it without touching the cells themselves.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;

use rand::Rng;

use crate::model::error::{ModelError, Result};
use crate::model::grid::GridCell;
use crate::model::layer::{LayerRegistry, FOOD_LAYER_ID};

/// Default maximum food production rate of a freshly built cell.
pub const DEFAULT_MAX_FOOD_PRODUCTION_RATE: f64 = 0.01;

#[derive(Debug, Clone)]
pub struct HabitatCell {
    x: i32,
    y: i32,
    maximum_food_production_rate: f64,
    food_availability: f64,
}

impl HabitatCell {
    /// Creates a cell at `(x, y)`. Both coordinates must be non-negative and
    /// are fixed for the cell's lifetime.
    pub fn new(x: i32, y: i32) -> Result<Self> {
        if x < 0 {
            return Err(ModelError::NegativeCoordinate { axis: 'x', value: x });
        }
        if y < 0 {
            return Err(ModelError::NegativeCoordinate { axis: 'y', value: y });
        }
        Ok(Self {
            x,
            y,
            maximum_food_production_rate: DEFAULT_MAX_FOOD_PRODUCTION_RATE,
            food_availability: 0.0,
        })
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn maximum_food_production_rate(&self) -> f64 {
        self.maximum_food_production_rate
    }

    pub fn set_maximum_food_production_rate(&mut self, rate: f64) -> Result<()> {
        if rate < 0.0 {
            return Err(ModelError::NegativeValue {
                name: "maximum_food_production_rate",
                value: rate,
            });
        }
        self.maximum_food_production_rate = rate;
        Ok(())
    }

    pub fn food_availability(&self) -> f64 {
        self.food_availability
    }

    pub fn set_food_availability(&mut self, food: f64) -> Result<()> {
        if food < 0.0 {
            return Err(ModelError::NegativeValue {
                name: "food_availability",
                value: food,
            });
        }
        self.food_availability = food;
        Ok(())
    }

    /// Grows a uniformly random amount of food in
    /// `[0, maximum_food_production_rate)` and mirrors the new availability
    /// into the registered food value layer.
    ///
    /// Fails with [`ModelError::MissingValueLayer`] when no layer named
    /// [`FOOD_LAYER_ID`] is registered; the cell's own availability is still
    /// updated in that case, matching the mirror-after-grow write order.
    pub fn grow_food<R: Rng>(&mut self, rng: &mut R, layers: &mut LayerRegistry) -> Result<()> {
        // gen_range panics on an empty range; a zero rate must grow exactly 0.
        let grown = if self.maximum_food_production_rate > 0.0 {
            rng.gen_range(0.0..self.maximum_food_production_rate)
        } else {
            0.0
        };
        self.food_availability += grown;

        let layer = layers
            .get_mut(FOOD_LAYER_ID)
            .ok_or_else(|| ModelError::MissingValueLayer(FOOD_LAYER_ID.to_string()))?;
        layer.set(self.food_availability, self.x, self.y)
    }

    /// Removes `eaten` food from this cell on behalf of a co-located agent.
    ///
    /// The amount must be non-negative and at most the current availability;
    /// consuming exactly the available amount is legal and leaves 0.
    pub fn food_consumed(&mut self, eaten: f64) -> Result<()> {
        if eaten < 0.0 {
            return Err(ModelError::NegativeValue {
                name: "eaten",
                value: eaten,
            });
        }
        if eaten > self.food_availability {
            return Err(ModelError::Overconsumption {
                requested: eaten,
                available: self.food_availability,
            });
        }
        self.food_availability -= eaten;
        Ok(())
    }
}

impl fmt::Display for HabitatCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HabitatCell @ ({}, {}), food_availability={}",
            self.x, self.y, self.food_availability
        )
    }
}

/// Orders two grid locations by descending food availability of their
/// occupant cell.
///
/// Callers are expected to pass single-occupant locations; that precondition
/// is checked in debug builds. As a deterministic fallback, a location with
/// no occupant sorts after any occupied one, and only the first occupant of
/// a stacked location is considered.
pub fn descending_food_order<H: Borrow<HabitatCell>>(
    a: &GridCell<H>,
    b: &GridCell<H>,
) -> Ordering {
    debug_assert_eq!(a.items().len(), 1, "expected exactly one habitat cell");
    debug_assert_eq!(b.items().len(), 1, "expected exactly one habitat cell");

    let food = |gc: &GridCell<H>| {
        gc.items()
            .first()
            .map(|cell| cell.borrow().food_availability())
            .unwrap_or(f64::NEG_INFINITY)
    };
    food(b).total_cmp(&food(a))
}
