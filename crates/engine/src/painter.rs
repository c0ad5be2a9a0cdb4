//! Painter: maps board state onto [`Canvas`] primitives.
//!
//! This module is pure (no I/O). It can be unit-tested against the recording
//! canvas in [`crate::headless`].

use crate::core::{Board, GameConfig, Layout, RevealState, Theme};
use crate::platform::Canvas;
use crate::types::{CellPos, Icon, Point, Rect, Shape};

const HIGHLIGHT_THICKNESS: i32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Painter {
    layout: Layout,
    theme: Theme,
}

impl Painter {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            layout: Layout::new(config),
            theme: config.theme,
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn draw_icon<C: Canvas + ?Sized>(&self, canvas: &mut C, icon: Icon, cell: CellPos) {
        let size = self.layout.box_size();
        let quarter = size / 4;
        let half = size / 2;
        let Point { x: left, y: top } = self.layout.cell_to_pixel(cell);
        let color = icon.color;

        match icon.shape {
            Shape::Donut => {
                let center = Point::new(left + half, top + half);
                canvas.circle(color, center, half - 5);
                canvas.circle(self.theme.background, center, quarter - 5);
            }
            Shape::Square => {
                canvas.fill_rect(
                    color,
                    Rect::new(left + quarter, top + quarter, size - half, size - half),
                );
            }
            Shape::Diamond => {
                canvas.polygon(
                    color,
                    &[
                        Point::new(left + half, top),
                        Point::new(left + size - 1, top + half),
                        Point::new(left + half, top + size - 1),
                        Point::new(left, top + half),
                    ],
                );
            }
            Shape::Lines => {
                for i in (0..size).step_by(4) {
                    canvas.line(color, Point::new(left, top + i), Point::new(left + i, top));
                    canvas.line(
                        color,
                        Point::new(left + i, top + size - 1),
                        Point::new(left + size - 1, top + i),
                    );
                }
            }
            Shape::Oval => {
                canvas.ellipse(color, Rect::new(left, top + quarter, size, half));
            }
        }
    }

    /// Every cell in its covered or revealed state.
    pub fn draw_board<C: Canvas + ?Sized>(&self, canvas: &mut C, board: &Board, revealed: &RevealState) {
        for cell in self.layout.cells() {
            if revealed.is_revealed(cell) {
                if let Some(icon) = board.icon(cell) {
                    self.draw_icon(canvas, icon, cell);
                }
            } else {
                canvas.fill_rect(self.theme.box_color, self.layout.box_rect(cell));
            }
        }
    }

    /// One animation frame: each cell shows its icon under a cover `coverage` px wide.
    pub fn draw_box_covers<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        board: &Board,
        cells: &[CellPos],
        coverage: i32,
    ) {
        for &cell in cells {
            let rect = self.layout.box_rect(cell);
            canvas.fill_rect(self.theme.background, rect);
            if let Some(icon) = board.icon(cell) {
                self.draw_icon(canvas, icon, cell);
            }
            if coverage > 0 {
                canvas.fill_rect(
                    self.theme.box_color,
                    Rect::new(rect.left, rect.top, coverage, rect.height),
                );
            }
        }
    }

    pub fn draw_highlight<C: Canvas + ?Sized>(&self, canvas: &mut C, cell: CellPos) {
        canvas.rect_outline(
            self.theme.highlight,
            self.layout.highlight_rect(cell),
            HIGHLIGHT_THICKNESS,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::{DrawOp, RecordingCanvas};
    use crate::types::{BLUE, RED, WHITE};

    fn painter() -> Painter {
        Painter::new(&GameConfig::default())
    }

    #[test]
    fn donut_has_background_hole() {
        let p = painter();
        let mut canvas = RecordingCanvas::new(640, 480);
        p.draw_icon(&mut canvas, Icon::new(Shape::Donut, RED), CellPos::new(0, 0));

        let center = Point::new(90, 85);
        assert_eq!(
            canvas.ops(),
            &[
                DrawOp::Circle(RED, center, 15),
                DrawOp::Circle(p.theme().background, center, 5),
            ]
        );
    }

    #[test]
    fn lines_draw_two_strokes_every_four_pixels() {
        let p = painter();
        let mut canvas = RecordingCanvas::new(640, 480);
        p.draw_icon(&mut canvas, Icon::new(Shape::Lines, BLUE), CellPos::new(1, 1));
        assert_eq!(canvas.ops().len(), 20);
    }

    #[test]
    fn covered_cells_draw_box_color() {
        let board = Board::from_icons(
            2,
            1,
            vec![Icon::new(Shape::Oval, RED), Icon::new(Shape::Oval, RED)],
        )
        .unwrap();
        let revealed = RevealState::new(2, 1, false);

        let config = GameConfig {
            board_width: 2,
            board_height: 1,
            ..GameConfig::default()
        };
        let p = Painter::new(&config);
        let mut canvas = RecordingCanvas::new(640, 480);
        p.draw_board(&mut canvas, &board, &revealed);

        assert_eq!(canvas.ops().len(), 2);
        assert!(canvas
            .ops()
            .iter()
            .all(|op| matches!(op, DrawOp::FillRect(c, _) if *c == WHITE)));
    }

    #[test]
    fn partial_cover_is_drawn_from_the_left() {
        let config = GameConfig {
            board_width: 2,
            board_height: 1,
            ..GameConfig::default()
        };
        let p = Painter::new(&config);
        let icon = Icon::new(Shape::Square, RED);
        let board = Board::from_icons(2, 1, vec![icon, icon]).unwrap();
        let mut canvas = RecordingCanvas::new(640, 480);

        p.draw_box_covers(&mut canvas, &board, &[CellPos::new(0, 0)], 16);
        let rect = p.layout().box_rect(CellPos::new(0, 0));
        assert_eq!(
            canvas.ops().last(),
            Some(&DrawOp::FillRect(
                WHITE,
                Rect::new(rect.left, rect.top, 16, rect.height)
            ))
        );

        canvas.clear_ops();
        p.draw_box_covers(&mut canvas, &board, &[CellPos::new(0, 0)], 0);
        // Background, icon, no cover.
        assert_eq!(canvas.ops().len(), 2);
    }
}
