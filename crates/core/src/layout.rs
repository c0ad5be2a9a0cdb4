//! Layout module - board coordinates <-> surface pixels
//!
//! The board is centered on the surface. Cell `(x, y)` has its top-left corner
//! at `(x * (box + gap) + x_margin, y * (box + gap) + y_margin)`; boxes never
//! overlap, so every pixel maps to at most one cell.

use crate::config::GameConfig;
use crate::types::{CellPos, Point, Rect};

/// Highlight outline distance outside the box
const HIGHLIGHT_PAD: i32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    box_size: i32,
    gap_size: i32,
    x_margin: i32,
    y_margin: i32,
    board_width: u16,
    board_height: u16,
}

impl Layout {
    pub fn new(config: &GameConfig) -> Self {
        let stride = config.box_size + config.gap_size;
        // Integer division truncates toward zero, negative margins included.
        let x_margin = (config.window_width - config.board_width as i32 * stride) / 2;
        let y_margin = (config.window_height - config.board_height as i32 * stride) / 2;
        Self {
            box_size: config.box_size,
            gap_size: config.gap_size,
            x_margin,
            y_margin,
            board_width: config.board_width,
            board_height: config.board_height,
        }
    }

    pub fn box_size(&self) -> i32 {
        self.box_size
    }

    pub fn margins(&self) -> (i32, i32) {
        (self.x_margin, self.y_margin)
    }

    pub fn width(&self) -> u16 {
        self.board_width
    }

    pub fn height(&self) -> u16 {
        self.board_height
    }

    fn stride(&self) -> i32 {
        self.box_size + self.gap_size
    }

    /// Top-left pixel of a cell's box.
    pub fn cell_to_pixel(&self, cell: CellPos) -> Point {
        Point::new(
            cell.x as i32 * self.stride() + self.x_margin,
            cell.y as i32 * self.stride() + self.y_margin,
        )
    }

    pub fn box_rect(&self, cell: CellPos) -> Rect {
        let p = self.cell_to_pixel(cell);
        Rect::new(p.x, p.y, self.box_size, self.box_size)
    }

    /// Outline drawn around a hovered box.
    pub fn highlight_rect(&self, cell: CellPos) -> Rect {
        self.box_rect(cell).inflate(HIGHLIGHT_PAD)
    }

    /// The cell whose box contains `p`, or `None` for gaps and margins.
    pub fn pixel_to_cell(&self, p: Point) -> Option<CellPos> {
        let x = axis_to_index(p.x - self.x_margin, self.stride(), self.box_size, self.board_width)?;
        let y = axis_to_index(p.y - self.y_margin, self.stride(), self.box_size, self.board_height)?;
        Some(CellPos::new(x, y))
    }

    /// All cells, column by column.
    pub fn cells(&self) -> impl Iterator<Item = CellPos> {
        let h = self.board_height;
        (0..self.board_width).flat_map(move |x| (0..h).map(move |y| CellPos::new(x, y)))
    }
}

fn axis_to_index(offset: i32, stride: i32, box_size: i32, count: u16) -> Option<u16> {
    if offset < 0 {
        return None;
    }
    let index = offset / stride;
    if index >= count as i32 || offset % stride >= box_size {
        return None;
    }
    Some(index as u16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_margins_center_the_board() {
        let layout = Layout::new(&GameConfig::default());
        assert_eq!(layout.margins(), (70, 65));
        assert_eq!(layout.cell_to_pixel(CellPos::new(0, 0)), Point::new(70, 65));
        assert_eq!(layout.cell_to_pixel(CellPos::new(9, 6)), Point::new(520, 365));
    }

    #[test]
    fn highlight_surrounds_box() {
        let layout = Layout::new(&GameConfig::default());
        assert_eq!(
            layout.highlight_rect(CellPos::new(0, 0)),
            Rect::new(65, 60, 50, 50)
        );
    }

    #[test]
    fn pixel_outside_board_is_none() {
        let layout = Layout::new(&GameConfig::default());
        assert_eq!(layout.pixel_to_cell(Point::new(0, 0)), None);
        assert_eq!(layout.pixel_to_cell(Point::new(69, 65)), None);
        // One stride past the last column.
        assert_eq!(layout.pixel_to_cell(Point::new(570, 65)), None);
        assert_eq!(layout.pixel_to_cell(Point::new(-500, -500)), None);
    }

    #[test]
    fn cells_are_column_major() {
        let layout = Layout::new(&GameConfig::default());
        let cells: Vec<_> = layout.cells().take(8).collect();
        assert_eq!(cells[0], CellPos::new(0, 0));
        assert_eq!(cells[6], CellPos::new(0, 6));
        assert_eq!(cells[7], CellPos::new(1, 0));
        assert_eq!(layout.cells().count(), 70);
    }
}
