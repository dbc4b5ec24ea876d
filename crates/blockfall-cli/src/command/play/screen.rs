use blockfall_engine::{Action, Spin};
use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Style},
    text::Text,
};

use crate::{
    record::{GameHistory, RecordingGame},
    ui::widgets::GameDisplay,
};

#[derive(Debug)]
pub struct PlayScreen {
    game: RecordingGame,
    elapsed: u64,
    is_exiting: bool,
}

impl PlayScreen {
    pub fn new(entropy: u64, history_size: usize) -> Self {
        Self {
            game: RecordingGame::with_seed(entropy, history_size),
            elapsed: 0,
            is_exiting: false,
        }
    }

    pub fn should_exit(&self) -> bool {
        self.is_exiting
    }

    pub fn into_history(self) -> GameHistory {
        self.game.into_history()
    }

    pub fn draw(&self, frame: &mut Frame<'_>) {
        let game_display = GameDisplay::new(&self.game, true);
        let help_text = if self.game.ended() {
            "Controls: R (Restart) | Q (Quit)"
        } else {
            "Controls: ← → / A D (Move) | ↓ / S (Soft Drop) | Z X (Rotate) | Space (Drop) | R (Restart) | Q (Quit)"
        };
        let help_text = Text::from(help_text)
            .style(Style::default().fg(Color::DarkGray))
            .centered();

        let [main_area, help_area] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(frame.area());
        frame.render_widget(game_display, main_area);
        frame.render_widget(help_text, help_area);
    }

    pub fn handle_event(&mut self, event: &Event) {
        let Some(event) = event.as_key_event() else {
            return;
        };
        // Terminals with the enhancement flags report releases and
        // repeats too; only presses become actions.
        if event.kind != KeyEventKind::Press {
            return;
        }
        let action = match event.code {
            KeyCode::Left | KeyCode::Char('a') => Action::Move { dx: -1, dy: 0 },
            KeyCode::Right | KeyCode::Char('d') => Action::Move { dx: 1, dy: 0 },
            KeyCode::Down | KeyCode::Char('s') => Action::Move { dx: 0, dy: 1 },
            KeyCode::Char('z') => Action::Rotate(Spin::Anticlockwise),
            KeyCode::Char('x') | KeyCode::Up => Action::Rotate(Spin::Clockwise),
            KeyCode::Char(' ') => Action::HardDrop,
            KeyCode::Char('r') => Action::Restart,
            KeyCode::Char('q') | KeyCode::Esc => {
                self.is_exiting = true;
                return;
            }
            _ => return,
        };
        self.game.apply(action);
    }

    /// Feeds one clock tick to the game. The counter keeps running after
    /// a game over so that a restart resumes from a live clock.
    pub fn update(&mut self) {
        self.game.apply(Action::Tick {
            elapsed: self.elapsed,
        });
        self.elapsed = self.elapsed.wrapping_add(1);
    }
}
