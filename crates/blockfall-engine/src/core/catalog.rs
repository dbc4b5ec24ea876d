//! Spawn positions for the piece catalog.

use super::cell::{Cell, PieceCells, ShapeKind};
use super::rng;

/// Column of the rotation pivot at spawn.
pub(crate) const ROTATION_ORIGIN_X: i16 = 4;
/// Row of the rotation pivot at spawn.
pub(crate) const ROTATION_ORIGIN_Y: i16 = -1;

/// Absolute spawn cells of each shape, indexed by [`rng::scale`].
///
/// Every shape spawns around the rotation origin `(4, -1)`, partly above
/// the visible grid, and descends into view on the first due ticks.
const SPAWN_CELLS: [[Cell; 4]; ShapeKind::LEN] = {
    use ShapeKind::{I, J, L, O, S, T, Z};

    const fn c(x: i16, y: i16, kind: ShapeKind) -> Cell {
        Cell::new(x, y, kind)
    }

    [
        [c(4, -2, O), c(5, -2, O), c(4, -1, O), c(5, -1, O)],
        [c(3, -1, I), c(4, -1, I), c(5, -1, I), c(6, -1, I)],
        [c(3, -2, J), c(3, -1, J), c(4, -1, J), c(5, -1, J)],
        [c(5, -2, L), c(3, -1, L), c(4, -1, L), c(5, -1, L)],
        [c(3, -1, S), c(4, -1, S), c(4, -2, S), c(5, -2, S)],
        [c(3, -2, Z), c(4, -1, Z), c(4, -2, Z), c(5, -1, Z)],
        [c(3, -1, T), c(4, -1, T), c(4, -2, T), c(5, -1, T)],
    ]
};

/// Picks the next piece for a seed and returns its spawn cells.
#[must_use]
pub fn spawn_piece(seed: u64) -> PieceCells {
    PieceCells::from(SPAWN_CELLS[rng::scale(seed)])
}
