//! In-memory platform for tests and benchmarks.
//!
//! [`HeadlessPlatform`] records every draw call instead of rasterizing it,
//! feeds scripted input one batch per poll, and advances a virtual clock
//! instead of sleeping.

use std::collections::VecDeque;

use anyhow::Result;

use crate::platform::{Canvas, Platform};
use crate::types::{InputEvent, Point, Rect, Rgb};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOp {
    Fill(Rgb),
    FillRect(Rgb, Rect),
    RectOutline(Rgb, Rect, i32),
    Circle(Rgb, Point, i32),
    Polygon(Rgb, Vec<Point>),
    Line(Rgb, Point, Point),
    Ellipse(Rgb, Rect),
}

/// A canvas that only remembers what was drawn.
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    width: i32,
    height: i32,
    ops: Vec<DrawOp>,
}

impl RecordingCanvas {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    fn fill(&mut self, color: Rgb) {
        self.ops.push(DrawOp::Fill(color));
    }

    fn fill_rect(&mut self, color: Rgb, rect: Rect) {
        self.ops.push(DrawOp::FillRect(color, rect));
    }

    fn rect_outline(&mut self, color: Rgb, rect: Rect, thickness: i32) {
        self.ops.push(DrawOp::RectOutline(color, rect, thickness));
    }

    fn circle(&mut self, color: Rgb, center: Point, radius: i32) {
        self.ops.push(DrawOp::Circle(color, center, radius));
    }

    fn polygon(&mut self, color: Rgb, points: &[Point]) {
        self.ops.push(DrawOp::Polygon(color, points.to_vec()));
    }

    fn line(&mut self, color: Rgb, from: Point, to: Point) {
        self.ops.push(DrawOp::Line(color, from, to));
    }

    fn ellipse(&mut self, color: Rgb, bounds: Rect) {
        self.ops.push(DrawOp::Ellipse(color, bounds));
    }
}

#[derive(Debug, Clone)]
pub struct HeadlessPlatform {
    canvas: RecordingCanvas,
    /// One batch per `poll_events` call
    script: VecDeque<Vec<InputEvent>>,
    /// Events with the number of sleeps still to pass before they arrive
    scheduled: Vec<(usize, InputEvent)>,
    pending: Vec<InputEvent>,
    quit_when_script_ends: bool,
    quit_after_ticks: Option<usize>,
    quit: bool,
    presents: usize,
    ticks: usize,
    waits: Vec<u32>,
    elapsed_ms: u64,
}

impl HeadlessPlatform {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            canvas: RecordingCanvas::new(width, height),
            script: VecDeque::new(),
            scheduled: Vec::new(),
            pending: Vec::new(),
            quit_when_script_ends: false,
            quit_after_ticks: None,
            quit: false,
            presents: 0,
            ticks: 0,
            waits: Vec::new(),
            elapsed_ms: 0,
        }
    }

    /// Queue input batches; each `poll_events` call returns the next one.
    pub fn with_script(mut self, batches: impl IntoIterator<Item = Vec<InputEvent>>) -> Self {
        self.script.extend(batches);
        self
    }

    /// Report [`InputEvent::Quit`] once the script is exhausted.
    pub fn quit_when_script_ends(mut self) -> Self {
        self.quit_when_script_ends = true;
        self
    }

    /// Raise the quit flag on the `n`th tick, as if the user quit mid-animation.
    pub fn quit_after_ticks(mut self, n: usize) -> Self {
        self.quit_after_ticks = Some(n);
        self
    }

    /// Events that arrive while the platform next sleeps in `tick` or `wait_ms`.
    pub fn push_during_sleep(&mut self, events: impl IntoIterator<Item = InputEvent>) {
        self.push_after_sleeps(0, events);
    }

    /// Events that arrive during a later sleep, after `skip` sleeps have passed.
    pub fn push_after_sleeps(&mut self, skip: usize, events: impl IntoIterator<Item = InputEvent>) {
        self.scheduled.extend(events.into_iter().map(|e| (skip, e)));
    }

    pub fn canvas_ref(&self) -> &RecordingCanvas {
        &self.canvas
    }

    pub fn presents(&self) -> usize {
        self.presents
    }

    pub fn ticks(&self) -> usize {
        self.ticks
    }

    pub fn waits(&self) -> &[u32] {
        &self.waits
    }

    /// Virtual time spent in `tick` and `wait_ms`.
    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    fn sleep(&mut self, ms: u64) {
        self.elapsed_ms += ms;
        for (skip, event) in std::mem::take(&mut self.scheduled) {
            if skip > 0 {
                self.scheduled.push((skip - 1, event));
                continue;
            }
            if event.is_quit() {
                self.quit = true;
            }
            self.pending.push(event);
        }
    }
}

impl Platform for HeadlessPlatform {
    type Canvas = RecordingCanvas;

    fn canvas(&mut self) -> &mut RecordingCanvas {
        &mut self.canvas
    }

    fn present(&mut self) -> Result<()> {
        self.presents += 1;
        Ok(())
    }

    fn poll_events(&mut self) -> Result<Vec<InputEvent>> {
        let mut events = std::mem::take(&mut self.pending);
        match self.script.pop_front() {
            Some(batch) => events.extend(batch),
            None if self.quit_when_script_ends => events.push(InputEvent::Quit),
            None => {}
        }
        Ok(events)
    }

    fn discard_clicks(&mut self) {
        for event in &mut self.pending {
            if let InputEvent::PointerUp(p) = *event {
                *event = InputEvent::PointerMove(p);
            }
        }
    }

    fn wait_ms(&mut self, ms: u32) -> Result<()> {
        self.waits.push(ms);
        self.sleep(ms as u64);
        Ok(())
    }

    fn tick(&mut self, fps: u32) -> Result<()> {
        self.ticks += 1;
        self.sleep(1000 / fps.max(1) as u64);
        if self.quit_after_ticks.is_some_and(|n| self.ticks >= n) {
            self.quit = true;
        }
        Ok(())
    }

    fn quit_requested(&self) -> bool {
        self.quit
    }
}
