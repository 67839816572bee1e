//! Error types for the simulation model.
//!
//! Two kinds of failures exist: invalid arguments (negative coordinates,
//! rates, availabilities or consumption amounts, empty selections,
//! out-of-bounds layer writes) and invalid state (a required value layer
//! missing at growth time). Both are raised synchronously and are fatal
//! for the invocation that triggered them.

use thiserror::Error;

/// Main error type for model operations.
#[derive(Error, Debug)]
pub enum ModelError {
    /// Grid coordinates must be non-negative.
    #[error("coordinate {axis} = {value} < 0")]
    NegativeCoordinate { axis: char, value: i32 },

    /// A rate, availability or size field received a negative value.
    #[error("{name} = {value} < 0")]
    NegativeValue { name: &'static str, value: f64 },

    /// An agent tried to eat more food than the cell holds.
    #[error("eaten food {requested} > food availability {available}")]
    Overconsumption { requested: f64, available: f64 },

    /// A named value layer was not registered with the world.
    #[error("cannot locate value layer with id={0}")]
    MissingValueLayer(String),

    /// A value layer access fell outside the raster.
    #[error("value layer {layer}: ({x}, {y}) is out of bounds")]
    OutOfBounds { layer: String, x: i32, y: i32 },

    /// A random pick was requested from an empty list.
    #[error("cannot pick a random element of an empty list")]
    EmptySelection,

    /// World dimensions must be positive.
    #[error("invalid world dimensions {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    /// More agents were requested than the grid has cells.
    #[error("cannot place {requested} bugs on {capacity} cells")]
    Overcrowded { requested: usize, capacity: usize },
}

/// Result type alias for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
