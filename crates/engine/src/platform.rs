//! Render/input adapter seams.
//!
//! The engine draws through [`Canvas`] and talks to the outside world through
//! [`Platform`]; neither knows about terminals, windows or event libraries.

use anyhow::Result;

use crate::types::{InputEvent, Point, Rect, Rgb};

/// Shape primitives drawn into a back buffer.
pub trait Canvas {
    /// Surface size in pixels.
    fn size(&self) -> (i32, i32);

    /// Paint the whole surface.
    fn fill(&mut self, color: Rgb);

    fn fill_rect(&mut self, color: Rgb, rect: Rect);

    /// Outline drawn inward from the edges of `rect`.
    fn rect_outline(&mut self, color: Rgb, rect: Rect, thickness: i32);

    /// Filled circle.
    fn circle(&mut self, color: Rgb, center: Point, radius: i32);

    /// Filled polygon.
    fn polygon(&mut self, color: Rgb, points: &[Point]);

    /// One pixel wide line, both endpoints included.
    fn line(&mut self, color: Rgb, from: Point, to: Point);

    /// Filled ellipse inscribed in `bounds`.
    fn ellipse(&mut self, color: Rgb, bounds: Rect);
}

/// Display, input and clock.
pub trait Platform {
    type Canvas: Canvas;

    fn canvas(&mut self) -> &mut Self::Canvas;

    /// Make the back buffer visible.
    fn present(&mut self) -> Result<()>;

    /// Non-blocking; everything that arrived since the last call.
    fn poll_events(&mut self) -> Result<Vec<InputEvent>>;

    /// Drop clicks that arrived since the last poll. Pointer position is kept.
    fn discard_clicks(&mut self);

    fn wait_ms(&mut self, ms: u32) -> Result<()>;

    /// Sleep so that successive calls are at least `1000 / fps` ms apart.
    fn tick(&mut self, fps: u32) -> Result<()>;

    /// A quit was seen while sleeping. Running animations stop at their next step.
    fn quit_requested(&self) -> bool;
}

impl<P: Platform + ?Sized> Platform for &mut P {
    type Canvas = P::Canvas;

    fn canvas(&mut self) -> &mut Self::Canvas {
        (**self).canvas()
    }

    fn present(&mut self) -> Result<()> {
        (**self).present()
    }

    fn poll_events(&mut self) -> Result<Vec<InputEvent>> {
        (**self).poll_events()
    }

    fn discard_clicks(&mut self) {
        (**self).discard_clicks()
    }

    fn wait_ms(&mut self, ms: u32) -> Result<()> {
        (**self).wait_ms(ms)
    }

    fn tick(&mut self, fps: u32) -> Result<()> {
        (**self).tick(fps)
    }

    fn quit_requested(&self) -> bool {
        (**self).quit_requested()
    }
}
