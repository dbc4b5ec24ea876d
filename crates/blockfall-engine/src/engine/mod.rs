//! The game state machine.
//!
//! Everything in here is a pure function over [`GameState`] values. A game
//! advances by folding [`reduce`] over a stream of [`Action`]s: the host
//! emits clock ticks and player inputs, and the engine answers each one
//! with the successor state.
//!
//! A game moves through three phases:
//!
//! * pieces spawn above the grid and descend under gravity ticks,
//! * locked pieces settle into the stack, complete rows clear and raise
//!   the score and level,
//! * once the stack reaches the top row, the next tick latches the
//!   terminal state and only [`Action::Restart`] leaves it.
//!
//! # Examples
//!
//! ```
//! use blockfall_engine::{Action, GameState, reduce};
//!
//! let state = GameState::with_seed(42);
//! let state = reduce(&state, Action::Move { dx: 1, dy: 0 });
//! let state = reduce(&state, Action::Tick { elapsed: 0 });
//! assert!(!state.ended());
//! assert_eq!(state.falling().len(), 4);
//! ```

pub use self::{action::*, reducer::*, state::*};

pub(crate) mod action;
pub(crate) mod reducer;
pub(crate) mod state;
