use blockfall_engine::{Action, GameState, reduce};
use ratatui::{
    layout::{Constraint, Flex, Layout},
    prelude::{Buffer, Rect},
    style::Style,
    text::{Line, Text},
    widgets::{Block as BlockWidget, Clear, Padding, Widget},
};

use super::{BoardDisplay, PieceDisplay, StatsDisplay, color, style};

/// Renders a whole game: stats, board and preview side by side, with a
/// popup over the board once the game has ended.
#[derive(Debug)]
pub struct GameDisplay<'a> {
    state: &'a GameState,
    show_ghost: bool,
}

impl<'a> GameDisplay<'a> {
    pub fn new(state: &'a GameState, show_ghost: bool) -> Self {
        Self { state, show_ghost }
    }
}

impl Widget for GameDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &GameDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let style = style::DEFAULT;
        let block_padding = Padding::symmetric(1, 0);
        let border_style = if self.state.ended() {
            color::RED
        } else {
            color::WHITE
        };

        let board = {
            let widget = BoardDisplay::new(self.state.settled())
                .falling(self.state.falling())
                .block(BlockWidget::bordered().border_style(border_style).style(style));
            if self.show_ghost && !self.state.ended() {
                // The resting position is what a hard drop would reach.
                widget.ghost(reduce(self.state, Action::HardDrop).falling().clone())
            } else {
                widget
            }
        };
        let next_panel = PieceDisplay::new().piece(self.state.next_piece()).block(
            BlockWidget::bordered()
                .title(Line::from("NEXT").centered())
                .padding(block_padding)
                .border_style(border_style)
                .style(style),
        );
        let stats = StatsDisplay::new(self.state).block(
            BlockWidget::bordered()
                .title(Line::from("STATS").centered())
                .padding(block_padding)
                .border_style(border_style)
                .style(style),
        );

        let [left_column, center_column, right_column] = Layout::horizontal([
            Constraint::Length(stats.width()),
            Constraint::Length(board.width()),
            Constraint::Length(next_panel.width()),
        ])
        .flex(Flex::Center)
        .spacing(1)
        .areas(area);

        let [stats_area] =
            Layout::vertical([Constraint::Length(stats.height())]).areas(left_column);
        let [board_area] =
            Layout::vertical([Constraint::Length(board.height())]).areas(center_column);
        let [next_area] =
            Layout::vertical([Constraint::Length(next_panel.height())]).areas(right_column);

        let board_width = board.width();
        stats.render(stats_area, buf);
        board.render(board_area, buf);
        next_panel.render(next_area, buf);

        if self.state.ended() {
            let popup_style = Style::new().fg(color::WHITE).bg(color::RED);
            let block = BlockWidget::new().style(popup_style);
            let text = Text::styled("GAME OVER!!\nPress R to restart", popup_style).centered();
            let popup_area = board_area.centered(
                Constraint::Length(board_width),
                Constraint::Length(4),
            );
            let inner = block.inner(popup_area);
            Clear.render(popup_area, buf);
            block.render(popup_area, buf);
            text.render(inner.centered_vertically(Constraint::Length(2)), buf);
        }
    }
}
