//! Transition rule applied to every cell once per generation.

/// Next alive state for a cell with `live_neighbors` live Moore neighbors.
///
/// Exactly three neighbors make the cell alive, exactly two keep its current
/// state, and every other count leaves it dead.
#[must_use]
pub const fn next_state(alive: bool, live_neighbors: u8) -> bool {
    match live_neighbors {
        3 => true,
        2 => alive,
        _ => false,
    }
}
