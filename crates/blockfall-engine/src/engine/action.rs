/// Rotation direction of a [`Rotate`](Action::Rotate) action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spin {
    Clockwise,
    Anticlockwise,
}

/// Everything that can happen to a game.
///
/// The set is closed: every state transition in the engine is the result
/// of exactly one of these actions, and the reducer handles all of them
/// exhaustively. Actions that are illegal in the current state are simply
/// absorbed without changing anything, so callers never have to pre-check
/// whether an input is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Shift the falling piece by one step: `dx = -1` or `dx = 1` for
    /// sideways movement, `dy = 1` for a soft drop.
    Move { dx: i16, dy: i16 },
    /// One beat of the game clock, carrying the host's tick counter.
    /// Gravity, piece locking, row clearing and the game-over latch all
    /// happen here.
    Tick { elapsed: u64 },
    /// Send the falling piece to the lowest legal position. The piece is
    /// repositioned only; it locks on the next due tick.
    HardDrop,
    /// Turn the falling piece a quarter around its spawn pivot.
    Rotate(Spin),
    /// Start a fresh game after a top-out, keeping the high score.
    Restart,
}
