use blockfall_engine::ShapeKind;
use ratatui::{
    prelude::{Buffer, Rect},
    style::Style,
    widgets::{Paragraph, Widget},
};

use super::style;

/// What one grid square shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Empty,
    /// A settled cell drawn without its shape color, for replays.
    Wall,
    /// The resting position preview of the falling piece.
    Ghost,
    Shape(ShapeKind),
}

/// Renders a single tile as a two-column block of the terminal.
#[derive(Debug)]
pub struct BlockDisplay {
    style: Style,
    symbol: &'static str,
}

impl BlockDisplay {
    pub const fn new(style: Style, symbol: &'static str) -> Self {
        Self { style, symbol }
    }

    pub fn width() -> u16 {
        2
    }

    pub fn height() -> u16 {
        1
    }

    pub fn from_tile(tile: Tile, show_dots: bool) -> Self {
        match tile {
            Tile::Empty => {
                if show_dots {
                    Self::new(style::EMPTY_DOT, ".")
                } else {
                    Self::new(style::EMPTY, "")
                }
            }
            Tile::Wall => Self::new(style::WALL, ""),
            Tile::Ghost => Self::new(style::GHOST, "[]"),
            Tile::Shape(kind) => {
                let style = match kind {
                    ShapeKind::O => style::O_BLOCK,
                    ShapeKind::I => style::I_BLOCK,
                    ShapeKind::J => style::J_BLOCK,
                    ShapeKind::L => style::L_BLOCK,
                    ShapeKind::S => style::S_BLOCK,
                    ShapeKind::Z => style::Z_BLOCK,
                    ShapeKind::T => style::T_BLOCK,
                };
                Self::new(style, "")
            }
        }
    }
}

impl Widget for BlockDisplay {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &BlockDisplay {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        // A Paragraph fills the whole area, not just the symbol cells
        Paragraph::new(self.symbol)
            .style(self.style)
            .centered()
            .render(area, buf);
    }
}
