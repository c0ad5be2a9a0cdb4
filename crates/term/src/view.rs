//! CanvasView: downsamples a [`PixelCanvas`] onto terminal cells.
//!
//! Each terminal cell shows two vertically stacked samples using the upper
//! half block glyph (foreground = top sample, background = bottom sample).
//! A sample is the average color of a `scale × scale` block of canvas pixels,
//! with `scale` chosen so the whole canvas fits the terminal.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::canvas::PixelCanvas;
use crate::fb::{Cell, FrameBuffer};
use crate::types::{Point, Rgb};

const UPPER_HALF: char = '▀';

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Where the canvas landed on the terminal, and at what scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Projection {
    /// Top-left terminal cell of the image
    pub origin_col: u16,
    pub origin_row: u16,
    /// Canvas pixels per sample, both axes
    pub scale: i32,
    /// Image size in terminal cells
    pub cols: u16,
    pub rows: u16,
}

impl Projection {
    /// Fit a `width × height` canvas into `viewport`, centered.
    pub fn fit(width: i32, height: i32, viewport: Viewport) -> Self {
        let cols_avail = viewport.width.max(1) as i32;
        let samples_avail = 2 * viewport.height.max(1) as i32;
        let scale = div_ceil(width, cols_avail)
            .max(div_ceil(height, samples_avail))
            .max(1);

        let cols = div_ceil(width, scale).min(cols_avail) as u16;
        let rows = div_ceil(div_ceil(height, scale), 2).min(viewport.height.max(1) as i32) as u16;
        Self {
            origin_col: viewport.width.saturating_sub(cols) / 2,
            origin_row: viewport.height.saturating_sub(rows) / 2,
            scale,
            cols,
            rows,
        }
    }

    /// Canvas pixel at the middle of a terminal cell, if the cell shows the canvas.
    pub fn to_pixel(&self, col: u16, row: u16) -> Option<Point> {
        let c = col.checked_sub(self.origin_col)?;
        let r = row.checked_sub(self.origin_row)?;
        if c >= self.cols || r >= self.rows {
            return None;
        }
        Some(Point::new(
            c as i32 * self.scale + self.scale / 2,
            r as i32 * 2 * self.scale + self.scale,
        ))
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            origin_col: 0,
            origin_row: 0,
            scale: 1,
            cols: 0,
            rows: 0,
        }
    }
}

fn div_ceil(a: i32, b: i32) -> i32 {
    (a + b - 1) / b
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasView {
    /// Color of terminal cells outside the image
    border: Rgb,
}

impl Default for CanvasView {
    fn default() -> Self {
        Self {
            border: Rgb::new(0, 0, 0),
        }
    }
}

impl CanvasView {
    pub fn new(border: Rgb) -> Self {
        Self { border }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    ///
    /// Returns the projection used, for mapping mouse positions back.
    pub fn render_into(&self, canvas: &PixelCanvas, viewport: Viewport, fb: &mut FrameBuffer) -> Projection {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell {
            ch: ' ',
            fg: self.border,
            bg: self.border,
        });

        let proj = Projection::fit(canvas.width(), canvas.height(), viewport);
        for r in 0..proj.rows {
            for c in 0..proj.cols {
                let top = self.sample(canvas, proj.scale, c as i32, 2 * r as i32);
                let bottom = self.sample(canvas, proj.scale, c as i32, 2 * r as i32 + 1);
                fb.set(
                    proj.origin_col + c,
                    proj.origin_row + r,
                    Cell {
                        ch: UPPER_HALF,
                        fg: top,
                        bg: bottom,
                    },
                );
            }
        }
        proj
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, canvas: &PixelCanvas, viewport: Viewport) -> (FrameBuffer, Projection) {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        let proj = self.render_into(canvas, viewport, &mut fb);
        (fb, proj)
    }

    /// Average color of sample block (`sx`, `sy`); border color if fully off-canvas.
    fn sample(&self, canvas: &PixelCanvas, scale: i32, sx: i32, sy: i32) -> Rgb {
        let (x0, y0) = (sx * scale, sy * scale);
        let (mut r, mut g, mut b, mut n) = (0u32, 0u32, 0u32, 0u32);
        for y in y0..y0 + scale {
            for x in x0..x0 + scale {
                if let Some(p) = canvas.pixel(x, y) {
                    r += p.r as u32;
                    g += p.g as u32;
                    b += p.b as u32;
                    n += 1;
                }
            }
        }
        if n == 0 {
            return self.border;
        }
        Rgb::new((r / n) as u8, (g / n) as u8, (b / n) as u8)
    }
}
