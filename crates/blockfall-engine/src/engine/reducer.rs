use crate::core::{Cell, PieceCells, board, catalog, rng};

use super::action::{Action, Spin};
use super::state::{GameState, Offset};

/// Ticks between gravity drops at level 1. Each level divides the period.
const BASE_DROP_PERIOD: u64 = 200;
/// Points awarded per cleared row.
const SCORE_PER_ROW: u64 = 100;
/// Score required per level for the next level-up.
const LEVEL_UP_SCORE: u64 = 500;

/// Applies one action to a state and returns the successor state.
///
/// This is the whole public surface of the state machine. The function is
/// total: any action in any state produces a well-formed successor, and
/// illegal inputs (moving into a wall, rotating after a top-out) return
/// the prior state unchanged.
#[must_use]
pub fn reduce(state: &GameState, action: Action) -> GameState {
    match action {
        Action::Move { dx, dy } => apply_move(state, dx, dy),
        Action::Tick { elapsed } => apply_tick(state, elapsed),
        Action::HardDrop => apply_hard_drop(state),
        Action::Rotate(spin) => apply_rotate(state, spin),
        Action::Restart => apply_restart(state),
    }
}

/// Shifts the falling piece and its offset without any legality check.
///
/// Gravity and every player movement funnel through here, so the offset
/// can never drift apart from the cells it describes.
fn shift_piece(state: &GameState, dx: i16, dy: i16) -> GameState {
    if board::is_topped_out(&state.settled) {
        return state.clone();
    }
    GameState {
        falling: state
            .falling
            .iter()
            .map(|cell| cell.translated(dx, dy))
            .collect(),
        offset: state.offset.shifted(dx, dy),
        ..state.clone()
    }
}

fn apply_move(state: &GameState, dx: i16, dy: i16) -> GameState {
    let candidate = shift_piece(state, dx, dy);
    if board::is_colliding(&candidate.falling, &candidate.settled) {
        state.clone()
    } else {
        candidate
    }
}

/// One beat of the game clock.
///
/// A topped-out board latches the terminal state before anything else, so
/// the seed, score and level survive exactly as they were when the stack
/// reached the top. Otherwise the seed is refreshed from the tick counter
/// and gravity runs if the counter lands on the drop period.
fn apply_tick(state: &GameState, elapsed: u64) -> GameState {
    if board::is_topped_out(&state.settled) {
        return GameState {
            ended: true,
            falling: PieceCells::new(),
            next_piece: PieceCells::new(),
            high_score: state.high_score.max(state.score),
            ..state.clone()
        };
    }

    let refreshed = GameState {
        seed: rng::hash(elapsed),
        ..state.clone()
    };

    // Past level 200 the integer period would hit zero; clamping to 1
    // makes every tick a drop tick, which is as fast as gravity can get.
    let period = (BASE_DROP_PERIOD / refreshed.level).max(1);
    if elapsed % period != 0 {
        return refreshed;
    }

    let lowered: PieceCells = refreshed
        .falling
        .iter()
        .map(|cell| cell.translated(0, 1))
        .collect();
    if board::is_colliding(&lowered, &refreshed.settled) {
        lock_piece(&refreshed)
    } else {
        shift_piece(&refreshed, 0, 1)
    }
}

/// Locks the falling piece into the stack and promotes the preview piece.
///
/// The replacement preview is drawn from the seed stored in the state, so
/// the piece sequence depends only on the seed history.
fn lock_piece(state: &GameState) -> GameState {
    let mut settled = state.settled.clone();
    settled.extend(state.falling.iter().copied());
    sweep_rows(GameState {
        falling: state.next_piece.clone(),
        settled,
        next_piece: catalog::spawn_piece(state.seed),
        offset: Offset::default(),
        ..state.clone()
    })
}

/// Clears complete rows, drops the rows above them, and settles the score.
///
/// Cells that locked above the visible grid are discarded here, which is
/// what keeps the stack inside the grid. Each surviving cell falls by the
/// number of cleared rows below it.
fn sweep_rows(state: GameState) -> GameState {
    let full_rows: Vec<i16> = (0..board::GRID_HEIGHT)
        .filter(|&row| board::is_full_row(&state.settled, row))
        .collect();

    let settled = state
        .settled
        .iter()
        .filter(|cell| {
            (0..board::GRID_HEIGHT).contains(&cell.y()) && !full_rows.contains(&cell.y())
        })
        .map(|cell| {
            let dropped_below: i16 = full_rows.iter().map(|&row| i16::from(row > cell.y())).sum();
            cell.translated(0, dropped_below)
        })
        .collect();

    let score = state.score + full_rows.len() as u64 * SCORE_PER_ROW;
    let level = if score >= LEVEL_UP_SCORE * state.level {
        state.level + 1
    } else {
        state.level
    };

    GameState {
        settled,
        score,
        level,
        ..state
    }
}

/// Sends the falling piece straight down to its resting position.
///
/// The piece is only repositioned. Locking stays with the tick action, so
/// a hard-dropped piece can still be slid or rotated until the next due
/// tick picks it up.
fn apply_hard_drop(state: &GameState) -> GameState {
    if board::is_topped_out(&state.settled) {
        return state.clone();
    }

    let mut dropped = state.clone();
    // Spawn rows sit above the grid, so the longest possible descent is
    // the grid height plus the two entry rows.
    for _ in 0..board::GRID_HEIGHT + 2 {
        let lowered = shift_piece(&dropped, 0, 1);
        if board::is_colliding(&lowered.falling, &lowered.settled) {
            break;
        }
        dropped = lowered;
    }
    dropped
}

/// Turns the falling piece a quarter around its pivot.
///
/// The pivot is the spawn origin carried along by the piece offset. The
/// square piece is rotation-symmetric and skips rotation entirely; any
/// rotation that would collide is absorbed.
fn apply_rotate(state: &GameState, spin: Spin) -> GameState {
    if board::is_topped_out(&state.settled) {
        return state.clone();
    }
    let rotatable = state
        .falling
        .first()
        .is_some_and(|cell| cell.kind().is_rotatable());
    if !rotatable {
        return state.clone();
    }

    let pivot_x = catalog::ROTATION_ORIGIN_X + state.offset.x();
    let pivot_y = catalog::ROTATION_ORIGIN_Y + state.offset.y();
    let rotated: PieceCells = state
        .falling
        .iter()
        .map(|cell| {
            let rel_x = cell.x() - pivot_x;
            let rel_y = cell.y() - pivot_y;
            let (x, y) = match spin {
                Spin::Clockwise => (pivot_x - rel_y, pivot_y + rel_x),
                Spin::Anticlockwise => (pivot_x + rel_y, pivot_y - rel_x),
            };
            Cell::new(x, y, cell.kind())
        })
        .collect();

    if board::is_colliding(&rotated, &state.settled) {
        state.clone()
    } else {
        GameState {
            falling: rotated,
            ..state.clone()
        }
    }
}

/// Starts a fresh game, carrying the high score over.
///
/// Restarting is only meaningful once the stack has reached the top. The
/// guard checks the board itself rather than the latched flag, so the
/// restart also works on a lost game whose latching tick has not landed
/// yet. The new game is seeded by stepping the generator once more, which
/// keeps the restarted game deterministic too.
fn apply_restart(state: &GameState) -> GameState {
    if !board::is_topped_out(&state.settled) {
        return state.clone();
    }

    let fresh = rng::hash(state.seed);
    GameState {
        ended: false,
        falling: catalog::spawn_piece(fresh),
        settled: Vec::new(),
        seed: fresh,
        next_piece: catalog::spawn_piece(rng::hash(fresh)),
        offset: Offset::default(),
        level: 1,
        score: 0,
        high_score: state.high_score.max(state.score),
    }
}
