//! Dense lattice of alive/dead flags with a permanently dead border.

use lifegrid_core::{CellCoord, DeadBias, EngineError, GridSize};
use rand::Rng;

const MOORE_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Fixed-size lattice of cells addressed in row-major order.
///
/// Coordinates outside `[0, width) x [0, height)` read as dead; there is no
/// wraparound.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: GridSize,
    cells: Vec<bool>,
}

impl Grid {
    /// Creates a grid with every cell dead.
    #[must_use]
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            cells: vec![false; size.cell_count()],
        }
    }

    /// Creates a grid where each cell independently starts alive with
    /// probability `1 - dead_bias`.
    pub fn random<R: Rng>(size: GridSize, dead_bias: DeadBias, rng: &mut R) -> Self {
        let alive_probability = dead_bias.alive_probability();
        let cells = (0..size.cell_count())
            .map(|_| rng.gen_bool(alive_probability))
            .collect();
        Self { size, cells }
    }

    /// Builds a grid from row-major flags.
    ///
    /// Returns `None` when `cells` does not hold exactly `width * height`
    /// entries.
    #[must_use]
    pub fn from_cells(size: GridSize, cells: Vec<bool>) -> Option<Self> {
        (cells.len() == size.cell_count()).then_some(Self { size, cells })
    }

    /// Dimensions of the grid.
    #[must_use]
    pub const fn size(&self) -> GridSize {
        self.size
    }

    /// Number of columns.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.size.width()
    }

    /// Number of rows.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.size.height()
    }

    /// Row-major alive flags, `index = x + y * width`.
    #[must_use]
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Alive state at a signed coordinate; `false` outside the grid.
    #[must_use]
    pub fn get(&self, x: i64, y: i64) -> bool {
        self.index(x, y)
            .and_then(|index| self.cells.get(index).copied())
            .unwrap_or(false)
    }

    /// Alive state of an in-grid coordinate; `false` outside the grid.
    #[must_use]
    pub fn is_alive(&self, cell: CellCoord) -> bool {
        self.get(i64::from(cell.column()), i64::from(cell.row()))
    }

    /// Overwrites the state of a cell.
    pub fn set(&mut self, cell: CellCoord, alive: bool) -> Result<(), EngineError> {
        let index = self.checked_index(cell)?;
        self.cells[index] = alive;
        Ok(())
    }

    /// Flips the state of a cell and returns its new state.
    pub fn toggle(&mut self, cell: CellCoord) -> Result<bool, EngineError> {
        let index = self.checked_index(cell)?;
        let alive = !self.cells[index];
        self.cells[index] = alive;
        Ok(alive)
    }

    /// Number of live cells among the eight Moore neighbors of `(x, y)`.
    ///
    /// The cell itself is never counted and out-of-range neighbors count as
    /// dead.
    #[must_use]
    pub fn count_live_neighbors(&self, x: i64, y: i64) -> u8 {
        MOORE_OFFSETS
            .iter()
            .map(|&(dx, dy)| u8::from(self.get(x + dx, y + dy)))
            .sum()
    }

    /// Number of live cells.
    #[must_use]
    pub fn alive_count(&self) -> u64 {
        self.cells.iter().filter(|alive| **alive).count() as u64
    }

    /// Replaces every cell with the buffered next generation.
    ///
    /// Returns `(born, died)` transition counts. `next` receives the previous
    /// generation so its allocation can be reused.
    pub(crate) fn commit(&mut self, next: &mut Vec<bool>) -> (u64, u64) {
        debug_assert_eq!(next.len(), self.cells.len(), "buffer covers every cell");

        let mut born = 0;
        let mut died = 0;
        for (current, upcoming) in self.cells.iter().zip(next.iter()) {
            match (*current, *upcoming) {
                (false, true) => born += 1,
                (true, false) => died += 1,
                _ => {}
            }
        }

        std::mem::swap(&mut self.cells, next);
        (born, died)
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if !self.size.contains(x, y) {
            return None;
        }
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        let width = usize::try_from(self.size.width()).ok()?;
        Some(x + y * width)
    }

    fn checked_index(&self, cell: CellCoord) -> Result<usize, EngineError> {
        self.index(i64::from(cell.column()), i64::from(cell.row()))
            .ok_or(EngineError::OutOfBounds {
                column: cell.column(),
                row: cell.row(),
                width: self.size.width(),
                height: self.size.height(),
            })
    }
}
