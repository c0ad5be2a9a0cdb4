//! Animation driver: sliding covers, start-of-game preview, win flash.
//!
//! Every step is blocking: draw, present, wait one tick. Input is not polled
//! while an animation runs; a quit seen by the platform while sleeping ends
//! the animation at its next step.

use anyhow::Result;
use tracing::trace;

use crate::core::{Board, GameConfig, RevealState, SimpleRng};
use crate::painter::Painter;
use crate::platform::{Canvas, Platform};
use crate::types::CellPos;

/// Cover widths for a reveal: `box_size` down to `-speed`, inclusive.
pub fn reveal_sweep(box_size: i32, speed: i32) -> impl Iterator<Item = i32> {
    (0..)
        .map(move |k| box_size - k * speed)
        .take_while(move |&c| c >= -speed)
}

/// Cover widths for a cover: `0` up to `box_size + speed`, exclusive.
pub fn cover_sweep(box_size: i32, speed: i32) -> impl Iterator<Item = i32> {
    (0..)
        .map(move |k| k * speed)
        .take_while(move |&c| c < box_size + speed)
}

#[derive(Debug, Clone, Copy)]
pub struct Animator {
    painter: Painter,
    reveal_speed: i32,
    fps: u32,
    group_size: usize,
    flash_cycles: u32,
    flash_ms: u32,
}

impl Animator {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            painter: Painter::new(config),
            reveal_speed: config.reveal_speed,
            fps: config.fps,
            group_size: config.preview_group_size,
            flash_cycles: config.win_flash_cycles,
            flash_ms: config.win_flash_ms,
        }
    }

    pub fn painter(&self) -> &Painter {
        &self.painter
    }

    /// Slide the covers of `cells` off, exposing their icons.
    pub fn reveal<P: Platform>(&self, platform: &mut P, board: &Board, cells: &[CellPos]) -> Result<()> {
        let sweep = reveal_sweep(self.painter.layout().box_size(), self.reveal_speed);
        self.sweep(platform, board, cells, sweep)
    }

    /// Slide the covers of `cells` back on.
    pub fn cover<P: Platform>(&self, platform: &mut P, board: &Board, cells: &[CellPos]) -> Result<()> {
        let sweep = cover_sweep(self.painter.layout().box_size(), self.reveal_speed);
        self.sweep(platform, board, cells, sweep)
    }

    /// One present and one tick per coverage step, zero and full width included.
    fn sweep<P: Platform>(
        &self,
        platform: &mut P,
        board: &Board,
        cells: &[CellPos],
        coverages: impl Iterator<Item = i32>,
    ) -> Result<()> {
        for coverage in coverages {
            self.painter
                .draw_box_covers(platform.canvas(), board, cells, coverage);
            platform.present()?;
            platform.tick(self.fps)?;
            if platform.quit_requested() {
                break;
            }
        }
        Ok(())
    }

    /// Preview every icon: shuffled groups are revealed and covered in turn.
    pub fn start_game<P: Platform>(&self, platform: &mut P, board: &Board, rng: &mut SimpleRng) -> Result<()> {
        let layout = self.painter.layout();
        let covered = RevealState::new(layout.width(), layout.height(), false);
        let mut cells: Vec<CellPos> = layout.cells().collect();
        rng.shuffle(&mut cells);

        self.painter.draw_board(platform.canvas(), board, &covered);
        for group in cells.chunks(self.group_size) {
            trace!(size = group.len(), "previewing group");
            self.reveal(platform, board, group)?;
            if platform.quit_requested() {
                break;
            }
            self.cover(platform, board, group)?;
            if platform.quit_requested() {
                break;
            }
        }
        Ok(())
    }

    /// Alternate the two backgrounds behind the fully revealed board.
    pub fn win_flash<P: Platform>(&self, platform: &mut P, board: &Board) -> Result<()> {
        let layout = self.painter.layout();
        let all = RevealState::new(layout.width(), layout.height(), true);
        let theme = *self.painter.theme();
        let (mut color1, mut color2) = (theme.light_background, theme.background);

        for _ in 0..self.flash_cycles {
            std::mem::swap(&mut color1, &mut color2);
            platform.canvas().fill(color1);
            self.painter.draw_board(platform.canvas(), board, &all);
            platform.present()?;
            platform.wait_ms(self.flash_ms)?;
            if platform.quit_requested() {
                break;
            }
        }
        Ok(())
    }
}
