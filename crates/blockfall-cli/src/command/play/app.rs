use std::time::Duration;

use crossterm::event::Event;
use ratatui::Frame;

use crate::{
    command::play::screen::PlayScreen,
    record::GameHistory,
    tui::{App, RenderMode, Tui},
};

/// The game clock fires once per millisecond. Gravity and the drop
/// period are measured in these ticks.
const TICK_INTERVAL: Duration = Duration::from_millis(1);
const FRAME_RATE: u64 = 60;

#[derive(Debug)]
pub struct PlayApp {
    screen: PlayScreen,
}

impl PlayApp {
    pub fn new(entropy: u64, history_size: usize) -> Self {
        Self {
            screen: PlayScreen::new(entropy, history_size),
        }
    }

    pub fn into_history(self) -> GameHistory {
        self.screen.into_history()
    }
}

impl App for PlayApp {
    fn init(&mut self, tui: &mut Tui) {
        tui.set_tick_interval(Some(TICK_INTERVAL));
        tui.set_render_mode(RenderMode::Interval(Duration::from_micros(
            1_000_000 / FRAME_RATE,
        )));
    }

    fn should_exit(&self) -> bool {
        self.screen.should_exit()
    }

    fn handle_event(&mut self, event: &Event) {
        self.screen.handle_event(event);
    }

    fn draw(&self, frame: &mut Frame) {
        self.screen.draw(frame);
    }

    fn update(&mut self) {
        self.screen.update();
    }
}
