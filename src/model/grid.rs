//! Grid points, spatial query results and the occupancy filter.

use rand::Rng;

use crate::model::error::{ModelError, Result};

/// A discrete location on the simulation grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl GridPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A location paired with whatever currently occupies it, as produced by a
/// neighborhood query.
#[derive(Debug, Clone)]
pub struct GridCell<T> {
    point: GridPoint,
    items: Vec<T>,
}

impl<T> GridCell<T> {
    /// An unoccupied location.
    pub fn empty(point: GridPoint) -> Self {
        Self {
            point,
            items: Vec::new(),
        }
    }

    pub fn with_items(point: GridPoint, items: Vec<T>) -> Self {
        Self { point, items }
    }

    pub fn point(&self) -> GridPoint {
        self.point
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_free(&self) -> bool {
        self.items.is_empty()
    }
}

/// Returns the unoccupied subset of `neighborhood`, preserving relative
/// order. The input is never mutated; an empty input yields an empty output.
pub fn free_grid_cells<T>(neighborhood: &[GridCell<T>]) -> Vec<&GridCell<T>> {
    neighborhood.iter().filter(|cell| cell.is_free()).collect()
}

/// Picks a uniformly random element of `list` without modifying it.
///
/// Fails with [`ModelError::EmptySelection`] when the list is empty.
pub fn random_element_of<'a, T, R: Rng>(list: &'a [T], rng: &mut R) -> Result<&'a T> {
    if list.is_empty() {
        return Err(ModelError::EmptySelection);
    }
    Ok(&list[rng.gen_range(0..list.len())])
}
