use std::path::PathBuf;

use crossterm::event::{Event, KeyCode};
use ratatui::{
    Frame,
    layout::{Constraint, HorizontalAlignment, Layout, Spacing},
    style::Color,
    symbols::merge::MergeStrategy,
    text::{Line, Text},
    widgets::{Block as BlockWidget, Padding, Paragraph},
};

use crate::{schema::record::RecordedGame, ui::widgets::BoardDisplay};

/// Steps through the placements of a saved game one turn at a time.
#[derive(Debug)]
pub struct TurnViewerScreen {
    path: PathBuf,
    game: RecordedGame,
    turn_index: usize,
    should_exit: bool,
}

impl TurnViewerScreen {
    pub fn new(path: PathBuf, game: RecordedGame) -> Self {
        Self {
            path,
            game,
            turn_index: 0,
            should_exit: false,
        }
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    pub fn draw(&self, frame: &mut Frame<'_>) {
        let top_block = BlockWidget::bordered()
            .title(format!("Replay: {}", self.path.display()))
            .title_alignment(HorizontalAlignment::Center)
            .padding(Padding::symmetric(1, 0));
        let viewport = frame
            .area()
            .centered(Constraint::Max(96), Constraint::Max(27));

        if self.game.turns.is_empty() {
            let text_area = top_block
                .inner(viewport)
                .centered_vertically(Constraint::Length(1));
            let text = Text::from("NO TURNS RECORDED").centered().style(Color::Red);
            frame.render_widget(top_block, viewport);
            frame.render_widget(text, text_area);
            return;
        }

        let record = &self.game.turns[self.turn_index];

        let [top_area, mid_area, bottom_area] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Length(3),
        ])
        .spacing(Spacing::Overlap(1))
        .areas(viewport);

        let header = Paragraph::new(vec![
            Line::from(format!(
                "Entry: {:6}/{:6}",
                self.turn_index + 1,
                self.game.turns.len()
            )),
            Line::from(format!(
                "Turn {:6} | Score {:8} | Level {:4}",
                record.turn, record.score, record.level
            )),
        ])
        .block(top_block.merge_borders(MergeStrategy::Exact));

        // The stack before the placement is drawn as walls, the placed
        // piece in its own color on top.
        let board = BoardDisplay::new(&record.settled)
            .settled_as_walls()
            .falling(&record.placed);
        let mid_block = BlockWidget::bordered().merge_borders(MergeStrategy::Exact);
        let board_area = mid_block.inner(mid_area).centered(
            Constraint::Length(board.width()),
            Constraint::Length(board.height()),
        );

        let help = Paragraph::new(
            Line::from(
                "j/k or ↓/↑ (1 turn) | h/l or ←/→ (10 turns) | g/Home (First) | G/End (Last) | q/Esc (Quit)",
            )
            .centered(),
        )
        .style(Color::DarkGray)
        .block(BlockWidget::bordered().merge_borders(MergeStrategy::Exact));

        frame.render_widget(header, top_area);
        frame.render_widget(mid_block, mid_area);
        frame.render_widget(board, board_area);
        frame.render_widget(help, bottom_area);
    }

    pub fn handle_event(&mut self, event: &Event) {
        if let Some(event) = event.as_key_event() {
            match event.code {
                KeyCode::Char('j') | KeyCode::Down => self.step_forward(1),
                KeyCode::Char('k') | KeyCode::Up => self.step_backward(1),
                KeyCode::Char('h') | KeyCode::Left => self.step_backward(10),
                KeyCode::Char('l') | KeyCode::Right => self.step_forward(10),
                KeyCode::Char('g') | KeyCode::Home => self.jump_to_first(),
                KeyCode::Char('G') | KeyCode::End => self.jump_to_last(),
                KeyCode::Char('q') | KeyCode::Esc => self.should_exit = true,
                _ => {}
            }
        }
    }

    fn step_forward(&mut self, amount: usize) {
        let len = self.game.turns.len();
        if len == 0 {
            return;
        }
        self.turn_index = usize::min(self.turn_index + amount, len - 1);
    }

    fn step_backward(&mut self, amount: usize) {
        self.turn_index = self.turn_index.saturating_sub(amount);
    }

    fn jump_to_first(&mut self) {
        self.turn_index = 0;
    }

    fn jump_to_last(&mut self) {
        self.turn_index = self.game.turns.len().saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use blockfall_engine::PieceCells;
    use chrono::Utc;
    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;
    use crate::schema::record::TurnRecord;

    fn viewer(turn_count: u64) -> TurnViewerScreen {
        let turns = (0..turn_count)
            .map(|turn| TurnRecord {
                turn,
                settled: Vec::new(),
                placed: PieceCells::new(),
                score: 0,
                level: 1,
            })
            .collect();
        let game = RecordedGame {
            recorded_at: Utc::now(),
            entropy: 0,
            final_score: 0,
            final_level: 1,
            high_score: 0,
            turns,
        };
        TurnViewerScreen::new(PathBuf::from("game.json"), game)
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::empty()))
    }

    #[test]
    fn stepping_clamps_to_the_recorded_range() {
        let mut screen = viewer(3);

        screen.step_backward(1);
        assert_eq!(screen.turn_index, 0);

        screen.step_forward(10);
        assert_eq!(screen.turn_index, 2);

        screen.step_forward(1);
        assert_eq!(screen.turn_index, 2);
    }

    #[test]
    fn jumps_land_on_the_endpoints() {
        let mut screen = viewer(5);

        screen.jump_to_last();
        assert_eq!(screen.turn_index, 4);

        screen.jump_to_first();
        assert_eq!(screen.turn_index, 0);
    }

    #[test]
    fn navigation_on_an_empty_recording_is_safe() {
        let mut screen = viewer(0);

        screen.step_forward(1);
        screen.jump_to_last();
        assert_eq!(screen.turn_index, 0);
    }

    #[test]
    fn keys_drive_the_navigation() {
        let mut screen = viewer(30);

        screen.handle_event(&key(KeyCode::Char('l')));
        assert_eq!(screen.turn_index, 10);

        screen.handle_event(&key(KeyCode::Char('k')));
        assert_eq!(screen.turn_index, 9);

        screen.handle_event(&key(KeyCode::Esc));
        assert!(screen.should_exit());
    }
}
