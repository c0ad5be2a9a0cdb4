//! TerminalPlatform: the engine's [`Platform`] over a crossterm terminal.
//!
//! Drawing goes into a [`PixelCanvas`]; `present` downsamples it and flushes
//! the diff. While sleeping in `tick`/`wait_ms` the platform keeps reading
//! terminal events: a quit is noticed immediately, everything else is queued
//! for the next `poll_events`.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};
use tracing::debug;

use crate::canvas::PixelCanvas;
use crate::engine::Platform;
use crate::fb::FrameBuffer;
use crate::input::map_event;
use crate::renderer::TerminalRenderer;
use crate::types::{InputEvent, Rgb};
use crate::view::{CanvasView, Projection, Viewport};

pub struct TerminalPlatform {
    renderer: TerminalRenderer,
    canvas: PixelCanvas,
    view: CanvasView,
    fb: FrameBuffer,
    projection: Projection,
    pending: Vec<InputEvent>,
    last_tick: Instant,
    quit: bool,
}

impl TerminalPlatform {
    /// `border` fills the terminal cells around the scaled image.
    pub fn new(width: i32, height: i32, border: Rgb) -> Self {
        let (cols, rows) = crossterm::terminal::size().unwrap_or((80, 24));
        Self {
            renderer: TerminalRenderer::new(),
            canvas: PixelCanvas::new(width, height),
            view: CanvasView::new(border),
            fb: FrameBuffer::new(cols, rows),
            projection: Projection::fit(width, height, Viewport::new(cols, rows)),
            pending: Vec::new(),
            last_tick: Instant::now(),
            quit: false,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }

    /// Read terminal events until `deadline`, or until a quit arrives.
    fn pump_until(&mut self, deadline: Instant) -> Result<()> {
        while !self.quit {
            let timeout = deadline.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                break;
            }
            let ev = event::read()?;
            if let Event::Resize(cols, rows) = ev {
                debug!(cols, rows, "terminal resized");
                self.renderer.invalidate();
                continue;
            }
            let projection = self.projection;
            if let Some(mapped) = map_event(&ev, |col, row| projection.to_pixel(col, row)) {
                if mapped.is_quit() {
                    self.quit = true;
                }
                self.pending.push(mapped);
            }
        }
        Ok(())
    }
}

impl Platform for TerminalPlatform {
    type Canvas = PixelCanvas;

    fn canvas(&mut self) -> &mut PixelCanvas {
        &mut self.canvas
    }

    fn present(&mut self) -> Result<()> {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        self.projection = self
            .view
            .render_into(&self.canvas, Viewport::new(w, h), &mut self.fb);
        self.renderer.draw_swap(&mut self.fb)
    }

    fn poll_events(&mut self) -> Result<Vec<InputEvent>> {
        self.pump_until(Instant::now())?;
        Ok(std::mem::take(&mut self.pending))
    }

    fn discard_clicks(&mut self) {
        for event in &mut self.pending {
            if let InputEvent::PointerUp(p) = *event {
                *event = InputEvent::PointerMove(p);
            }
        }
    }

    fn wait_ms(&mut self, ms: u32) -> Result<()> {
        self.pump_until(Instant::now() + Duration::from_millis(ms as u64))
    }

    fn tick(&mut self, fps: u32) -> Result<()> {
        let frame = Duration::from_millis(1000 / fps.max(1) as u64);
        self.pump_until(self.last_tick + frame)?;
        self.last_tick = Instant::now();
        Ok(())
    }

    fn quit_requested(&self) -> bool {
        self.quit
    }
}
