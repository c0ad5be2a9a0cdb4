//! PixelCanvas: software rasterizer for the engine's drawing primitives.
//!
//! Pixel centers sit at `(x + 0.5, y + 0.5)`. Everything is clipped to the
//! surface; nothing here can fail.

use crate::engine::Canvas;
use crate::types::{Point, Rect, Rgb};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelCanvas {
    width: i32,
    height: i32,
    pixels: Vec<Rgb>,
}

impl PixelCanvas {
    pub fn new(width: i32, height: i32) -> Self {
        let (width, height) = (width.max(0), height.max(0));
        Self {
            width,
            height,
            pixels: vec![Rgb::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb> {
        self.idx(x, y).map(|i| self.pixels[i])
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    #[inline(always)]
    fn put(&mut self, x: i32, y: i32, color: Rgb) {
        if let Some(i) = self.idx(x, y) {
            self.pixels[i] = color;
        }
    }

    /// Horizontal run `x0..=x1` on row `y`.
    fn span(&mut self, y: i32, x0: i32, x1: i32, color: Rgb) {
        if y < 0 || y >= self.height {
            return;
        }
        let x0 = x0.max(0);
        let x1 = x1.min(self.width - 1);
        if x0 > x1 {
            return;
        }
        let row = y as usize * self.width as usize;
        self.pixels[row + x0 as usize..=row + x1 as usize].fill(color);
    }
}

impl Canvas for PixelCanvas {
    fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    fn fill_rect(&mut self, color: Rgb, rect: Rect) {
        if rect.width <= 0 || rect.height <= 0 {
            return;
        }
        for y in rect.top..rect.bottom() {
            self.span(y, rect.left, rect.right() - 1, color);
        }
    }

    fn rect_outline(&mut self, color: Rgb, rect: Rect, thickness: i32) {
        let t = thickness.min(rect.width / 2).min(rect.height / 2).max(1);
        self.fill_rect(color, Rect::new(rect.left, rect.top, rect.width, t));
        self.fill_rect(color, Rect::new(rect.left, rect.bottom() - t, rect.width, t));
        self.fill_rect(color, Rect::new(rect.left, rect.top, t, rect.height));
        self.fill_rect(color, Rect::new(rect.right() - t, rect.top, t, rect.height));
    }

    fn circle(&mut self, color: Rgb, center: Point, radius: i32) {
        if radius < 0 {
            return;
        }
        let r2 = (radius * radius) as f64;
        for dy in -radius..=radius {
            let dx = (r2 - (dy * dy) as f64).sqrt().floor() as i32;
            self.span(center.y + dy, center.x - dx, center.x + dx, color);
        }
    }

    fn polygon(&mut self, color: Rgb, points: &[Point]) {
        if points.is_empty() {
            return;
        }
        let min_y = points.iter().map(|p| p.y).min().unwrap_or(0);
        let max_y = points.iter().map(|p| p.y).max().unwrap_or(0);

        let mut crossings: Vec<f64> = Vec::with_capacity(points.len());
        for y in min_y..=max_y {
            let yc = y as f64 + 0.5;
            crossings.clear();
            for (i, a) in points.iter().enumerate() {
                let b = points[(i + 1) % points.len()];
                let (ay, by) = (a.y as f64, b.y as f64);
                if (ay <= yc && yc < by) || (by <= yc && yc < ay) {
                    let t = (yc - ay) / (by - ay);
                    crossings.push(a.x as f64 + t * (b.x - a.x) as f64);
                }
            }
            crossings.sort_by(|a, b| a.total_cmp(b));
            for pair in crossings.chunks_exact(2) {
                let x0 = (pair[0] - 0.5).ceil() as i32;
                let x1 = (pair[1] - 0.5).floor() as i32;
                self.span(y, x0, x1, color);
            }
        }

        // Edges are part of the shape.
        for (i, &a) in points.iter().enumerate() {
            self.line(color, a, points[(i + 1) % points.len()]);
        }
    }

    fn line(&mut self, color: Rgb, from: Point, to: Point) {
        // Bresenham, all octants.
        let (mut x, mut y) = (from.x, from.y);
        let dx = (to.x - from.x).abs();
        let dy = -(to.y - from.y).abs();
        let sx = if from.x < to.x { 1 } else { -1 };
        let sy = if from.y < to.y { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.put(x, y, color);
            if x == to.x && y == to.y {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn ellipse(&mut self, color: Rgb, bounds: Rect) {
        if bounds.width <= 0 || bounds.height <= 0 {
            return;
        }
        let a = bounds.width as f64 / 2.0;
        let b = bounds.height as f64 / 2.0;
        let cx = bounds.left as f64 + a;
        let cy = bounds.top as f64 + b;
        for y in bounds.top..bounds.bottom() {
            let ny = (y as f64 + 0.5 - cy) / b;
            let k = 1.0 - ny * ny;
            if k < 0.0 {
                continue;
            }
            let half = a * k.sqrt();
            let x0 = (cx - half - 0.5).ceil() as i32;
            let x1 = (cx + half - 0.5).floor() as i32;
            self.span(y, x0, x1, color);
        }
    }
}
