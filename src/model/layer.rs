//! Named scalar rasters mirroring per-cell state for external consumers.

use std::collections::HashMap;

use crate::model::error::{ModelError, Result};

/// Registry key of the layer mirroring habitat food availability.
pub const FOOD_LAYER_ID: &str = "food";

/// A width x height grid of `f64` values addressed by integer coordinates.
#[derive(Debug, Clone)]
pub struct ValueLayer {
    name: String,
    width: i32,
    height: i32,
    values: Vec<f64>,
}

impl ValueLayer {
    pub fn new(name: impl Into<String>, width: i32, height: i32) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(ModelError::InvalidDimensions { width, height });
        }
        Ok(Self {
            name: name.into(),
            width,
            height,
            values: vec![0.0; width as usize * height as usize],
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, x: i32, y: i32) -> Result<f64> {
        let idx = self.index(x, y)?;
        Ok(self.values[idx])
    }

    /// Writes `value` at `(x, y)`. Argument order follows the raster
    /// convention of value-first. The value must be non-negative, like the
    /// per-cell state it mirrors.
    pub fn set(&mut self, value: f64, x: i32, y: i32) -> Result<()> {
        if value < 0.0 {
            return Err(ModelError::NegativeValue {
                name: "layer value",
                value,
            });
        }
        let idx = self.index(x, y)?;
        self.values[idx] = value;
        Ok(())
    }

    fn index(&self, x: i32, y: i32) -> Result<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return Err(ModelError::OutOfBounds {
                layer: self.name.clone(),
                x,
                y,
            });
        }
        Ok(y as usize * self.width as usize + x as usize)
    }
}

/// Name-keyed collection of value layers owned by the world.
#[derive(Debug, Default)]
pub struct LayerRegistry {
    layers: HashMap<String, ValueLayer>,
}

impl LayerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, layer: ValueLayer) {
        self.layers.insert(layer.name().to_string(), layer);
    }

    pub fn get(&self, name: &str) -> Option<&ValueLayer> {
        self.layers.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut ValueLayer> {
        self.layers.get_mut(name)
    }
}
