use blockfall_engine::PieceCells;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use super::{BlockDisplay, Tile};

/// Renders one piece centered in a panel, for the preview.
///
/// The piece's absolute cells are normalized to their bounding box, so a
/// piece displays the same wherever it would spawn. Without a piece the
/// panel is left blank, which is how the preview looks after a game ends.
#[derive(Debug, Default)]
pub struct PieceDisplay<'a> {
    piece: Option<&'a PieceCells>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> PieceDisplay<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn piece(self, piece: &'a PieceCells) -> Self {
        Self {
            piece: Some(piece),
            ..self
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        // Wide enough for the four-cell bar.
        4 * BlockDisplay::width() + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        2 * BlockDisplay::height() + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Widget for PieceDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &PieceDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let Some(piece) = self.piece.filter(|piece| !piece.is_empty()) else {
            return;
        };

        let (min_x, min_y) = piece.iter().fold((i16::MAX, i16::MAX), |(x, y), cell| {
            (x.min(cell.x()), y.min(cell.y()))
        });
        let (max_x, max_y) = piece.iter().fold((i16::MIN, i16::MIN), |(x, y), cell| {
            (x.max(cell.x()), y.max(cell.y()))
        });
        let cols = u16::try_from(max_x - min_x + 1).unwrap_or(0);
        let rows = u16::try_from(max_y - min_y + 1).unwrap_or(0);

        let piece_area = area.centered(
            Constraint::Length(cols * BlockDisplay::width()),
            Constraint::Length(rows * BlockDisplay::height()),
        );

        for cell in piece {
            let Ok(col) = u16::try_from(cell.x() - min_x) else {
                continue;
            };
            let Ok(row) = u16::try_from(cell.y() - min_y) else {
                continue;
            };
            let rect = Rect::new(
                piece_area.x + col * BlockDisplay::width(),
                piece_area.y + row * BlockDisplay::height(),
                BlockDisplay::width(),
                BlockDisplay::height(),
            )
            .intersection(piece_area);
            BlockDisplay::from_tile(Tile::Shape(cell.kind()), false).render(rect, buf);
        }
    }
}
