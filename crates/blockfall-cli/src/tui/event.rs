use crossterm::event::Event;

/// Events produced by the TUI event loop.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::From)]
pub(super) enum TuiEvent {
    /// The game clock advanced one beat.
    Tick,
    /// The screen should be redrawn.
    Render,
    /// A terminal event (key press, resize, ...) arrived.
    #[from]
    Crossterm(Event),
}
