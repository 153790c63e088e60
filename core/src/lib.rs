#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the lifegrid engine.
//!
//! This crate defines the message surface that connects host adapters, the
//! authoritative world, and pure systems. Systems and adapters submit
//! [`Command`] values describing desired mutations, the world executes those
//! commands via its `apply` entry point, and then broadcasts [`Event`] values
//! describing what changed. Renderers never mutate state; they read the world
//! through its query functions.

mod config;
mod error;
pub mod shapes;

pub use config::{ConfigError, DeadBias, GridSize, SimulationConfig};
pub use error::EngineError;
pub use shapes::{CellOffset, Shape};

use serde::{Deserialize, Serialize};

/// Commands that express all permissible world mutations.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Advances the automaton by exactly one generation.
    Step,
    /// Flips the alive state of a single cell.
    ToggleCell {
        /// Cell whose state should be inverted.
        cell: CellCoord,
    },
    /// Toggles every cell covered by a rotated catalog shape.
    StampShape {
        /// Catalog name of the shape to stamp.
        shape: String,
        /// Counter-clockwise rotation applied to the shape offsets, in degrees.
        angle_degrees: f64,
        /// Anchor cell; the shape origin lands one cell up and left of it.
        anchor: CellCoord,
    },
    /// Regenerates the grid randomly and restarts the run counters.
    Reset {
        /// Probability that each regenerated cell starts dead.
        dead_bias: DeadBias,
    },
    /// Regenerates the grid with every cell dead and restarts the run counters.
    Clear,
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// Confirms that a generation was committed.
    GenerationAdvanced {
        /// Generation index reached after the step.
        generation: u64,
        /// Number of cells that transitioned from dead to alive.
        born: u64,
        /// Number of cells that transitioned from alive to dead.
        died: u64,
    },
    /// Confirms that a single cell flipped state.
    CellToggled {
        /// Cell that flipped.
        cell: CellCoord,
        /// State of the cell after the flip.
        alive: bool,
    },
    /// Summarises a completed shape stamp.
    ShapeStamped {
        /// Catalog name of the stamped shape.
        shape: String,
        /// Number of offsets that landed inside the grid and were toggled.
        toggled: u32,
        /// Number of offsets that fell outside the grid and were skipped.
        skipped: u32,
    },
    /// Announces that the grid was regenerated and the run restarted.
    GridReset {
        /// Dead bias used to generate the new grid.
        dead_bias: DeadBias,
        /// Number of live cells in the regenerated grid.
        alive: u64,
    },
}

/// Describes whether an external scheduler is repeatedly stepping the world.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RunState {
    /// No automatic stepping; edits through clicks are accepted.
    #[default]
    Idle,
    /// Generations advance on every elapsed refresh interval.
    Running,
}

/// Location of a single grid cell expressed as column and row coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    column: u32,
    row: u32,
}

impl CellCoord {
    /// Creates a new grid cell coordinate.
    #[must_use]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }
}

/// Plain snapshot of the aggregate counters shown by statistics displays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PopulationStats {
    /// Number of generations committed since the run started.
    pub generation: u64,
    /// Cells currently alive.
    pub alive: u64,
    /// Cells currently dead.
    pub dead: u64,
    /// Cumulative dead-to-alive transitions, seeded with the initial population.
    pub total_born: u64,
    /// Cumulative alive-to-dead transitions, seeded with the initial dead cells.
    pub total_deaths: u64,
}

impl PopulationStats {
    /// Total number of cells covered by the snapshot.
    #[must_use]
    pub const fn cell_count(&self) -> u64 {
        self.alive + self.dead
    }
}
