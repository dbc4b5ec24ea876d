use std::path::PathBuf;

use crossterm::event::Event;
use ratatui::Frame;

use crate::{
    command::replay::screen::TurnViewerScreen,
    schema::record::RecordedGame,
    tui::{App, Tui},
};

#[derive(Debug)]
pub struct ReplayApp {
    screen: TurnViewerScreen,
}

impl ReplayApp {
    pub fn new(path: PathBuf, game: RecordedGame) -> Self {
        Self {
            screen: TurnViewerScreen::new(path, game),
        }
    }
}

impl App for ReplayApp {
    // The default on-dirty render mode fits a viewer: the screen only
    // changes in response to input, so no tick clock is needed.
    fn init(&mut self, _tui: &mut Tui) {}

    fn should_exit(&self) -> bool {
        self.screen.should_exit()
    }

    fn handle_event(&mut self, event: &Event) {
        self.screen.handle_event(event);
    }

    fn draw(&self, frame: &mut Frame) {
        self.screen.draw(frame);
    }

    fn update(&mut self) {}
}
