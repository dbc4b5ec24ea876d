use crossterm::event::Event;
use ratatui::Frame;

use super::Tui;

/// Behavior of an application driven by [`Tui::run`].
pub trait App {
    /// Called once before the event loop starts. This is where the
    /// application picks its tick interval and render mode.
    fn init(&mut self, tui: &mut Tui);

    /// Reports whether the event loop should stop.
    fn should_exit(&self) -> bool;

    /// Handles one terminal event.
    fn handle_event(&mut self, event: &Event);

    /// Draws the screen. Called on every render event.
    fn draw(&self, frame: &mut Frame);

    /// Advances the application clock. Called on every tick event.
    fn update(&mut self);
}
