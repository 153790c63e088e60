//! Failures reported by world commands.

use thiserror::Error;

/// Reasons a command may be rejected by the world.
///
/// A rejected command never mutates world state; bounds and catalog lookups
/// happen before any cell is written.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The addressed cell lies outside the configured grid.
    #[error("cell ({column}, {row}) lies outside the {width}x{height} grid")]
    OutOfBounds {
        /// Column that was addressed.
        column: u32,
        /// Row that was addressed.
        row: u32,
        /// Width of the grid at the time of the request.
        width: u32,
        /// Height of the grid at the time of the request.
        height: u32,
    },
    /// No shape with the provided name exists in the catalog.
    #[error("shape '{0}' is not in the catalog")]
    UnknownShape(String),
}
