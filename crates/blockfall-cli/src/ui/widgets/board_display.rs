use blockfall_engine::{Cell, PieceCells};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Block as BlockWidget, BlockExt, Widget},
};

use super::{BlockDisplay, Tile};

// Grid dimensions drawn by the board, matching the engine's board.
const COLS: usize = 10;
const ROWS: usize = 20;

type TileGrid = [[Tile; COLS]; ROWS];

/// Looks up the grid square a cell occupies. Cells above the grid (on
/// the spawn rows) have no square and are simply not drawn.
fn slot<'g>(grid: &'g mut TileGrid, cell: &Cell) -> Option<&'g mut Tile> {
    let x = usize::try_from(cell.x()).ok()?;
    let y = usize::try_from(cell.y()).ok()?;
    grid.get_mut(y)?.get_mut(x)
}

/// Renders the playing field: the settled stack, optionally the falling
/// piece and its ghost.
#[derive(Debug)]
pub struct BoardDisplay<'a> {
    settled: &'a [Cell],
    falling: Option<&'a PieceCells>,
    ghost: Option<PieceCells>,
    settled_as_walls: bool,
    block: Option<BlockWidget<'a>>,
}

impl<'a> BoardDisplay<'a> {
    pub fn new(settled: &'a [Cell]) -> Self {
        Self {
            settled,
            falling: None,
            ghost: None,
            settled_as_walls: false,
            block: None,
        }
    }

    pub fn falling(self, piece: &'a PieceCells) -> Self {
        Self {
            falling: Some(piece),
            ..self
        }
    }

    pub fn ghost(self, piece: PieceCells) -> Self {
        Self {
            ghost: Some(piece),
            ..self
        }
    }

    /// Draws the settled stack in a neutral color so an overlaid piece
    /// stands out. Used by the replay viewer.
    pub fn settled_as_walls(self) -> Self {
        Self {
            settled_as_walls: true,
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
        10 * BlockDisplay::width() + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        20 * BlockDisplay::height() + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Widget for BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let mut grid: TileGrid = [[Tile::Empty; COLS]; ROWS];
        for cell in self.settled {
            if let Some(tile) = slot(&mut grid, cell) {
                *tile = if self.settled_as_walls {
                    Tile::Wall
                } else {
                    Tile::Shape(cell.kind())
                };
            }
        }
        if let Some(ghost) = &self.ghost {
            for cell in ghost {
                if let Some(tile) = slot(&mut grid, cell) {
                    *tile = Tile::Ghost;
                }
            }
        }
        if let Some(falling) = self.falling {
            for cell in falling {
                if let Some(tile) = slot(&mut grid, cell) {
                    *tile = Tile::Shape(cell.kind());
                }
            }
        }

        let mut rect_y = area.y;
        for row in &grid {
            let mut rect_x = area.x;
            for tile in row {
                let rect = Rect::new(rect_x, rect_y, BlockDisplay::width(), BlockDisplay::height())
                    .intersection(area);
                BlockDisplay::from_tile(*tile, true).render(rect, buf);
                rect_x += BlockDisplay::width();
            }
            rect_y += BlockDisplay::height();
        }
    }
}

#[cfg(test)]
mod tests {
    use blockfall_engine::ShapeKind;

    use super::*;

    #[test]
    fn a_bare_board_is_exactly_the_grid() {
        let display = BoardDisplay::new(&[]);
        assert_eq!(display.width(), 20);
        assert_eq!(display.height(), 20);
    }

    #[test]
    fn a_bordered_board_gains_the_frame_margins() {
        let display = BoardDisplay::new(&[]).block(BlockWidget::bordered());
        assert_eq!(display.width(), 22);
        assert_eq!(display.height(), 22);
    }

    #[test]
    fn cells_outside_the_visible_grid_have_no_square() {
        let mut grid: TileGrid = [[Tile::Empty; COLS]; ROWS];

        assert!(slot(&mut grid, &Cell::new(4, -1, ShapeKind::O)).is_none());
        assert!(slot(&mut grid, &Cell::new(10, 0, ShapeKind::O)).is_none());
        assert!(slot(&mut grid, &Cell::new(0, 20, ShapeKind::O)).is_none());
        assert!(slot(&mut grid, &Cell::new(9, 19, ShapeKind::O)).is_some());
    }
}
