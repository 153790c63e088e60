//! Resolves catalog shapes into the grid cells a stamp will toggle.

use lifegrid_core::{CellCoord, CellOffset, GridSize, Shape};

/// Cells a stamp will toggle, in catalog order, plus the number of offsets
/// that fell outside the grid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct StampPlan {
    pub(crate) cells: Vec<CellCoord>,
    pub(crate) skipped: u32,
}

/// Rotates every offset of `shape` and translates it onto the grid.
///
/// The anchor is one cell past the shape origin, so offset `(0, 0)` lands on
/// `(anchor.column - 1, anchor.row - 1)`. Targets outside `size` are counted
/// as skipped rather than rejected.
pub(crate) fn plan(
    shape: &Shape,
    angle_degrees: f64,
    anchor: CellCoord,
    size: GridSize,
) -> StampPlan {
    let mut plan = StampPlan::default();
    for offset in shape.rotated_offsets(angle_degrees) {
        match target_cell(anchor, offset, size) {
            Some(cell) => plan.cells.push(cell),
            None => plan.skipped = plan.skipped.saturating_add(1),
        }
    }
    plan
}

fn target_cell(anchor: CellCoord, offset: CellOffset, size: GridSize) -> Option<CellCoord> {
    let column = i64::from(anchor.column()) + i64::from(offset.dx()) - 1;
    let row = i64::from(anchor.row()) + i64::from(offset.dy()) - 1;
    if !size.contains(column, row) {
        return None;
    }
    Some(CellCoord::new(
        u32::try_from(column).ok()?,
        u32::try_from(row).ok()?,
    ))
}
