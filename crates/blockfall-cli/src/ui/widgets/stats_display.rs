use blockfall_engine::GameState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Block as BlockWidget, BlockExt, Widget},
};

use super::BlockDisplay;

/// Renders the score, level and high score of a game.
#[derive(Debug)]
pub struct StatsDisplay<'a> {
    state: &'a GameState,
    block: Option<BlockWidget<'a>>,
}

impl<'a> StatsDisplay<'a> {
    pub fn new(state: &'a GameState) -> Self {
        Self { state, block: None }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        8 * BlockDisplay::width() + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        5 * BlockDisplay::height() + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Widget for StatsDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &StatsDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let rows = [
            ("SCORE", self.state.score()),
            ("LEVEL", self.state.level()),
            ("HIGH", self.state.high_score()),
        ];

        let mut rect_y = area.y;
        for (label, value) in rows {
            let rect = Rect::new(area.x, rect_y, area.width, 1).intersection(area);
            Line::from(label).left_aligned().render(rect, buf);
            Line::from(value.to_string()).right_aligned().render(rect, buf);
            // One blank row between entries.
            rect_y += 2;
        }
    }
}
