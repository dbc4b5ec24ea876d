//! Board geometry and the collision predicates.
//!
//! The board is not stored as a grid. Both the falling piece and the
//! settled stack are plain cell lists, and every rule about the board is a
//! predicate over those lists.

use super::cell::Cell;

/// Number of playable columns. Columns `-1` and `GRID_WIDTH` are the walls.
pub const GRID_WIDTH: i16 = 10;
/// Number of visible rows. Row `GRID_HEIGHT` is the floor.
pub const GRID_HEIGHT: i16 = 20;

/// Reports whether a candidate piece position is illegal.
///
/// A position collides when any of its cells overlaps a settled cell,
/// touches the floor row, or touches either wall column. Rows above the
/// grid are legal; pieces spawn there.
#[must_use]
pub fn is_colliding(falling: &[Cell], settled: &[Cell]) -> bool {
    falling
        .iter()
        .any(|cell| settled.iter().any(|s| s.x() == cell.x() && s.y() == cell.y()))
        || falling.iter().any(|cell| cell.y() == GRID_HEIGHT)
        || falling.iter().any(|cell| cell.x() == -1 || cell.x() == GRID_WIDTH)
}

/// Reports whether the settled stack has reached the top row.
///
/// Once a cell settles on row `0` the game is lost; the next tick latches
/// the terminal state.
#[must_use]
pub fn is_topped_out(settled: &[Cell]) -> bool {
    settled.iter().any(|cell| cell.y() == 0)
}

/// Reports whether every column of the given row holds a settled cell.
///
/// Settled cells never overlap, so a count of `GRID_WIDTH` means the row
/// is complete.
#[must_use]
pub fn is_full_row(settled: &[Cell], row: i16) -> bool {
    #[expect(clippy::cast_sign_loss)]
    const FULL: usize = GRID_WIDTH as usize;
    settled.iter().filter(|cell| cell.y() == row).count() == FULL
}
