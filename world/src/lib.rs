#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative world state management for lifegrid.
//!
//! The [`World`] owns the lattice, the run counters and the random stream used
//! to generate grids. It is mutated exclusively through [`apply`] and read
//! through the [`query`] functions.

mod grid;
mod rule;
mod stamping;

pub use grid::Grid;
pub use rule::next_state;

use lifegrid_core::{
    shapes, CellCoord, Command, DeadBias, EngineError, Event, SimulationConfig,
};
use log::{debug, info, trace};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Represents the authoritative state of a single simulation run.
#[derive(Debug)]
pub struct World {
    config: SimulationConfig,
    rng: ChaCha8Rng,
    dead_bias: DeadBias,
    grid: Grid,
    next: Vec<bool>,
    generation: u64,
    alive_count: u64,
    dead_count: u64,
    total_born: u64,
    total_deaths: u64,
}

impl World {
    /// Creates a world whose grid is randomly generated from `config`.
    #[must_use]
    pub fn new(config: SimulationConfig) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed());
        let dead_bias = config.dead_bias();
        let grid = Grid::random(config.size(), dead_bias, &mut rng);
        let mut world = Self {
            next: Vec::with_capacity(grid.cells().len()),
            config,
            rng,
            dead_bias,
            grid,
            generation: 0,
            alive_count: 0,
            dead_count: 0,
            total_born: 0,
            total_deaths: 0,
        };
        world.restart_counters();
        info!(
            "created {}x{} world with {} live cells (dead bias {})",
            world.grid.width(),
            world.grid.height(),
            world.alive_count,
            world.dead_bias.get()
        );
        world
    }

    fn regenerate(&mut self, dead_bias: DeadBias) {
        self.grid = Grid::random(self.config.size(), dead_bias, &mut self.rng);
        self.next.clear();
        self.restart_counters();
        info!(
            "regenerated grid with {} live cells (dead bias {})",
            self.alive_count,
            dead_bias.get()
        );
    }

    fn restart_counters(&mut self) {
        self.generation = 0;
        self.recount();
        self.total_born = self.alive_count;
        self.total_deaths = self.dead_count;
    }

    fn recount(&mut self) {
        self.alive_count = self.grid.alive_count();
        self.dead_count = self.grid.cells().len() as u64 - self.alive_count;
    }

    fn advance_generation(&mut self) -> (u64, u64) {
        let width = i64::from(self.grid.width());
        let height = i64::from(self.grid.height());

        self.next.clear();
        self.next.reserve(self.grid.cells().len());
        for y in 0..height {
            for x in 0..width {
                let alive = self.grid.get(x, y);
                let neighbors = self.grid.count_live_neighbors(x, y);
                self.next.push(next_state(alive, neighbors));
            }
        }

        let (born, died) = self.grid.commit(&mut self.next);
        self.total_born = self.total_born.saturating_add(born);
        self.total_deaths = self.total_deaths.saturating_add(died);
        self.generation = self.generation.saturating_add(1);
        self.recount();

        trace!(
            "generation {}: {} born, {} died, {} alive",
            self.generation,
            born,
            died,
            self.alive_count
        );
        (born, died)
    }

    fn flip(&mut self, cell: CellCoord) -> Result<bool, EngineError> {
        let alive = self.grid.toggle(cell)?;
        if alive {
            self.total_born = self.total_born.saturating_add(1);
        } else {
            self.total_deaths = self.total_deaths.saturating_add(1);
        }
        Ok(alive)
    }

    fn stamp(
        &mut self,
        name: String,
        angle_degrees: f64,
        anchor: CellCoord,
        out_events: &mut Vec<Event>,
    ) -> Result<(), EngineError> {
        let shape = shapes::find(&name).ok_or_else(|| EngineError::UnknownShape(name.clone()))?;
        let plan = stamping::plan(shape, angle_degrees, anchor, self.config.size());

        let mut toggled: u32 = 0;
        for cell in plan.cells {
            let alive = self.flip(cell)?;
            toggled = toggled.saturating_add(1);
            out_events.push(Event::CellToggled { cell, alive });
        }
        self.recount();

        debug!(
            "stamped '{name}' at ({}, {}) rotated {angle_degrees} degrees: {toggled} toggled, {} skipped",
            anchor.column(),
            anchor.row(),
            plan.skipped
        );
        out_events.push(Event::ShapeStamped {
            shape: name,
            toggled,
            skipped: plan.skipped,
        });
        Ok(())
    }
}

/// Applies the provided command to the world, mutating state deterministically.
///
/// A rejected command emits no events and leaves the world untouched.
pub fn apply(
    world: &mut World,
    command: Command,
    out_events: &mut Vec<Event>,
) -> Result<(), EngineError> {
    let result = execute(world, command, out_events);
    if let Err(error) = &result {
        debug!("rejected command: {error}");
    }
    result
}

fn execute(
    world: &mut World,
    command: Command,
    out_events: &mut Vec<Event>,
) -> Result<(), EngineError> {
    match command {
        Command::Step => {
            let (born, died) = world.advance_generation();
            out_events.push(Event::GenerationAdvanced {
                generation: world.generation,
                born,
                died,
            });
        }
        Command::ToggleCell { cell } => {
            let alive = world.flip(cell)?;
            world.recount();
            out_events.push(Event::CellToggled { cell, alive });
        }
        Command::StampShape {
            shape,
            angle_degrees,
            anchor,
        } => world.stamp(shape, angle_degrees, anchor, out_events)?,
        Command::Reset { dead_bias } => {
            world.dead_bias = dead_bias;
            world.regenerate(dead_bias);
            out_events.push(Event::GridReset {
                dead_bias,
                alive: world.alive_count,
            });
        }
        Command::Clear => {
            world.regenerate(DeadBias::ALL_DEAD);
            out_events.push(Event::GridReset {
                dead_bias: DeadBias::ALL_DEAD,
                alive: world.alive_count,
            });
        }
    }
    Ok(())
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use super::{Grid, World};
    use lifegrid_core::{CellCoord, DeadBias, GridSize, PopulationStats, SimulationConfig};

    /// Configuration snapshot the run was created with.
    #[must_use]
    pub fn config(world: &World) -> &SimulationConfig {
        &world.config
    }

    /// Dead bias used by the most recent random regeneration.
    #[must_use]
    pub fn dead_bias(world: &World) -> DeadBias {
        world.dead_bias
    }

    /// Grid dimensions.
    #[must_use]
    pub fn size(world: &World) -> GridSize {
        world.grid.size()
    }

    /// Number of grid columns.
    #[must_use]
    pub fn width(world: &World) -> u32 {
        world.grid.width()
    }

    /// Number of grid rows.
    #[must_use]
    pub fn height(world: &World) -> u32 {
        world.grid.height()
    }

    /// Number of generations committed since the run started.
    #[must_use]
    pub fn generation(world: &World) -> u64 {
        world.generation
    }

    /// Cells currently alive.
    #[must_use]
    pub fn alive_count(world: &World) -> u64 {
        world.alive_count
    }

    /// Cells currently dead.
    #[must_use]
    pub fn dead_count(world: &World) -> u64 {
        world.dead_count
    }

    /// Cumulative dead-to-alive transitions for the run.
    #[must_use]
    pub fn total_born(world: &World) -> u64 {
        world.total_born
    }

    /// Cumulative alive-to-dead transitions for the run.
    #[must_use]
    pub fn total_deaths(world: &World) -> u64 {
        world.total_deaths
    }

    /// Reports whether the cell is alive; `false` outside the grid.
    #[must_use]
    pub fn is_alive(world: &World, cell: CellCoord) -> bool {
        world.grid.is_alive(cell)
    }

    /// Read-only access to the lattice.
    #[must_use]
    pub fn grid(world: &World) -> &Grid {
        &world.grid
    }

    /// Row-major alive flags for renderers.
    #[must_use]
    pub fn cells(world: &World) -> &[bool] {
        world.grid.cells()
    }

    /// Snapshot of every aggregate counter.
    #[must_use]
    pub fn stats(world: &World) -> PopulationStats {
        PopulationStats {
            generation: world.generation,
            alive: world.alive_count,
            dead: world.dead_count,
            total_born: world.total_born,
            total_deaths: world.total_deaths,
        }
    }
}
