//! The world: habitat cells, bug agents and the per-tick driver loop.
//!
//! One tick runs in a fixed order: food production on every cell, then bug
//! actions in descending size order, then reproduction, then a projection of
//! cell availability into the food value layer. All mutation is synchronous
//! and single-threaded; each cell writes only its own coordinate slot of the
//! layer, so no coordination is needed.

use std::collections::HashSet;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::model::bug::Bug;
use crate::model::cell::{self, HabitatCell};
use crate::model::config::SimConfig;
use crate::model::error::{ModelError, Result};
use crate::model::grid::{free_grid_cells, random_element_of, GridCell, GridPoint};
use crate::model::layer::{LayerRegistry, ValueLayer, FOOD_LAYER_ID};

/// Per-tick summary returned by [`World::step`].
#[derive(Debug, Clone, Copy)]
pub struct StepReport {
    pub tick: u64,
    pub population: usize,
    pub births: usize,
    pub total_food: f64,
    pub max_bug_size: f64,
}

pub struct World {
    pub config: SimConfig,
    pub bugs: Vec<Bug>,
    width: i32,
    height: i32,
    tick: u64,
    cells: Vec<HabitatCell>,
    layers: LayerRegistry,
    rng: ChaCha8Rng,
    finished: bool,
}

impl World {
    pub fn new(config: SimConfig) -> Result<Self> {
        let width = config.world.width;
        let height = config.world.height;
        if width <= 0 || height <= 0 {
            return Err(ModelError::InvalidDimensions { width, height });
        }

        // Computed in usize so large-but-valid dimensions cannot overflow i32.
        let capacity = width as usize * height as usize;
        if config.world.initial_bugs > capacity {
            return Err(ModelError::Overcrowded {
                requested: config.world.initial_bugs,
                capacity,
            });
        }

        let mut rng = match config.world.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        let mut cells = Vec::with_capacity(capacity);
        for y in 0..height {
            for x in 0..width {
                let mut cell = HabitatCell::new(x, y)?;
                cell.set_maximum_food_production_rate(config.cell.max_food_production_rate)?;
                cells.push(cell);
            }
        }

        let mut layers = LayerRegistry::new();
        layers.register(ValueLayer::new(FOOD_LAYER_ID, width, height)?);

        // Scatter the initial population over distinct cells.
        let mut open: Vec<GridPoint> = cells.iter().map(|c| GridPoint::new(c.x(), c.y())).collect();
        let mut bugs = Vec::with_capacity(config.world.initial_bugs);
        for _ in 0..config.world.initial_bugs {
            let i = rng.gen_range(0..open.len());
            let mut bug = Bug::new(open.swap_remove(i));
            bug.set_max_consumption_rate(config.bug.max_consumption_rate)?;
            bugs.push(bug);
        }

        Ok(Self {
            config,
            bugs,
            width,
            height,
            tick: 0,
            cells,
            layers,
            rng,
            finished: false,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn finished(&self) -> bool {
        self.finished
    }

    pub fn cells(&self) -> &[HabitatCell] {
        &self.cells
    }

    pub fn cell_at(&self, point: GridPoint) -> Option<&HabitatCell> {
        if point.x < 0 || point.y < 0 || point.x >= self.width || point.y >= self.height {
            return None;
        }
        Some(&self.cells[Self::index(self.width, point)])
    }

    pub fn layers(&self) -> &LayerRegistry {
        &self.layers
    }

    pub fn total_food(&self) -> f64 {
        self.cells.iter().map(HabitatCell::food_availability).sum()
    }

    fn index(width: i32, point: GridPoint) -> usize {
        point.y as usize * width as usize + point.x as usize
    }

    /// Moore neighborhood of `origin` (the origin itself excluded), each
    /// location carrying one marker per bug currently sitting on it.
    fn survey(&self, origin: GridPoint, radius: i32) -> Vec<GridCell<()>> {
        let mut out = Vec::new();
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let p = GridPoint::new(origin.x + dx, origin.y + dy);
                if p.x < 0 || p.y < 0 || p.x >= self.width || p.y >= self.height {
                    continue;
                }
                let occupants = self.bugs.iter().filter(|b| b.position() == p).count();
                out.push(GridCell::with_items(p, vec![(); occupants]));
            }
        }
        out
    }

    /// Free locations around `origin`, as points.
    fn free_points_around(&self, origin: GridPoint, radius: i32) -> Vec<GridPoint> {
        let neighborhood = self.survey(origin, radius);
        free_grid_cells(&neighborhood)
            .iter()
            .map(|gc| gc.point())
            .collect()
    }

    /// Advances the simulation by one tick.
    pub fn step(&mut self) -> Result<StepReport> {
        // 1. Food production runs before any agent action.
        for cell in &mut self.cells {
            cell.grow_food(&mut self.rng, &mut self.layers)?;
        }

        // 2. Bugs act in descending size order: move to the richest free
        //    cell in range (ties broken uniformly at random), then eat.
        let mut order: Vec<usize> = (0..self.bugs.len()).collect();
        order.sort_by(|&a, &b| self.bugs[b].size().total_cmp(&self.bugs[a].size()));

        for idx in order {
            let origin = self.bugs[idx].position();
            let free = self.free_points_around(origin, self.config.bug.neighborhood_radius);
            if !free.is_empty() {
                let target = {
                    let mut ranked: Vec<GridCell<&HabitatCell>> = free
                        .iter()
                        .map(|&p| {
                            GridCell::with_items(p, vec![&self.cells[Self::index(self.width, p)]])
                        })
                        .collect();
                    ranked.sort_by(|a, b| cell::descending_food_order(a, b));

                    let best = ranked[0].items()[0].food_availability();
                    let ties: Vec<GridPoint> = ranked
                        .iter()
                        .take_while(|gc| gc.items()[0].food_availability() == best)
                        .map(|gc| gc.point())
                        .collect();
                    *random_element_of(&ties, &mut self.rng)?
                };
                self.bugs[idx].set_position(target);
            }

            let at = Self::index(self.width, self.bugs[idx].position());
            self.bugs[idx].eat(&mut self.cells[at])?;
        }

        // 3. Reproduction: a bug at the threshold is replaced by hatchlings
        //    on free cells near its spot; offspring with nowhere to go are
        //    dropped.
        let threshold = self.config.bug.reproduction_threshold;
        let mut vacated = Vec::new();
        self.bugs.retain(|bug| {
            if bug.can_reproduce(threshold) {
                vacated.push(bug.position());
                false
            } else {
                true
            }
        });

        let mut births = 0;
        for spot in vacated {
            for _ in 0..self.config.bug.offspring_count {
                let free = self.free_points_around(spot, self.config.bug.birth_radius);
                if free.is_empty() {
                    continue;
                }
                let p = *random_element_of(&free, &mut self.rng)?;
                let mut hatchling = Bug::hatchling(p);
                hatchling.set_max_consumption_rate(self.config.bug.max_consumption_rate)?;
                self.bugs.push(hatchling);
                births += 1;
            }
        }

        // 4. Project availability back into the food layer so it tracks the
        //    cells after consumption, not just after growth.
        let layer = self
            .layers
            .get_mut(FOOD_LAYER_ID)
            .ok_or_else(|| ModelError::MissingValueLayer(FOOD_LAYER_ID.to_string()))?;
        for cell in &self.cells {
            layer.set(cell.food_availability(), cell.x(), cell.y())?;
        }

        self.tick += 1;

        let max_bug_size = self.bugs.iter().map(Bug::size).fold(0.0, f64::max);
        if max_bug_size >= self.config.bug.stop_size {
            tracing::info!(max_bug_size, tick = self.tick, "a bug reached the stop size");
            self.finished = true;
        }
        if self.bugs.is_empty() || self.tick >= self.config.world.tick_limit {
            self.finished = true;
        }

        Ok(StepReport {
            tick: self.tick,
            population: self.bugs.len(),
            births,
            total_food: self.total_food(),
            max_bug_size,
        })
    }

    /// Sanity check used by tests: no two bugs share a cell.
    pub fn occupancy_is_exclusive(&self) -> bool {
        let mut seen = HashSet::new();
        self.bugs.iter().all(|b| seen.insert(b.position()))
    }
}
