use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct WorldConfig {
    pub width: i32,
    pub height: i32,
    pub initial_bugs: usize,
    pub tick_limit: u64,
    pub seed: Option<u64>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CellConfig {
    pub max_food_production_rate: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BugConfig {
    pub max_consumption_rate: f64,
    pub reproduction_threshold: f64,
    pub offspring_count: usize,
    /// Moore radius searched for a free cell to move to.
    pub neighborhood_radius: i32,
    /// Moore radius searched for free cells to place offspring on.
    pub birth_radius: i32,
    /// The run stops once any bug reaches this size.
    pub stop_size: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SimConfig {
    pub world: WorldConfig,
    pub cell: CellConfig,
    pub bug: BugConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            world: WorldConfig {
                width: 100,
                height: 100,
                initial_bugs: 100,
                tick_limit: 1000,
                seed: None,
            },
            cell: CellConfig {
                max_food_production_rate: 0.01,
            },
            bug: BugConfig {
                max_consumption_rate: 1.0,
                reproduction_threshold: 10.0,
                offspring_count: 5,
                neighborhood_radius: 4,
                birth_radius: 3,
                stop_size: 100.0,
            },
        }
    }
}

impl SimConfig {
    /// Loads a TOML config from `path`, falling back to defaults when the
    /// file is missing or unreadable.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!(error = %e, path = %path.display(), "invalid config file, using defaults");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}
