//! Game configuration.
//!
//! [`GameConfig`] replaces process-wide constants: the game loop receives one
//! by value and everything else borrows from it.

use crate::error::ConfigError;
use crate::types::*;

/// Background and tile colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Rgb,
    /// Alternate background used by the win flash
    pub light_background: Rgb,
    /// Color of a covered tile
    pub box_color: Rgb,
    /// Hover outline color
    pub highlight: Rgb,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: NAVY_BLUE,
            light_background: GRAY,
            box_color: WHITE,
            highlight: BLUE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub window_width: i32,
    pub window_height: i32,
    pub fps: u32,
    pub reveal_speed: i32,
    pub box_size: i32,
    pub gap_size: i32,
    pub board_width: u16,
    pub board_height: u16,
    pub colors: &'static [Rgb],
    pub shapes: &'static [Shape],
    pub theme: Theme,
    pub mismatch_delay_ms: u32,
    pub win_pause_ms: u32,
    pub win_flash_cycles: u32,
    pub win_flash_ms: u32,
    pub preview_group_size: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            fps: FPS,
            reveal_speed: REVEAL_SPEED,
            box_size: BOX_SIZE,
            gap_size: GAP_SIZE,
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
            colors: &ALL_COLORS,
            shapes: &Shape::ALL,
            theme: Theme::default(),
            mismatch_delay_ms: MISMATCH_DELAY_MS,
            win_pause_ms: WIN_PAUSE_MS,
            win_flash_cycles: WIN_FLASH_CYCLES,
            win_flash_ms: WIN_FLASH_MS,
            preview_group_size: PREVIEW_GROUP_SIZE,
        }
    }
}

impl GameConfig {
    pub fn cell_count(&self) -> usize {
        self.board_width as usize * self.board_height as usize
    }

    /// Number of distinct icons a board uses (one per pair).
    pub fn pairs(&self) -> usize {
        self.cell_count() / 2
    }

    /// Size of the icon pool (every color in every shape).
    pub fn icon_pool_size(&self) -> usize {
        self.colors.len() * self.shapes.len()
    }

    /// Check the startup invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_width == 0 || self.board_height == 0 {
            return Err(ConfigError::EmptyBoard);
        }
        let cells = self.cell_count();
        if cells % 2 != 0 {
            return Err(ConfigError::OddCellCount { cells });
        }
        if self.icon_pool_size() < self.pairs() {
            return Err(ConfigError::NotEnoughIcons {
                needed: self.pairs(),
                available: self.icon_pool_size(),
            });
        }
        if self.fps == 0 {
            return Err(ConfigError::ZeroFps);
        }
        if self.reveal_speed <= 0 {
            return Err(ConfigError::ZeroRevealSpeed);
        }
        if self.box_size <= 0 {
            return Err(ConfigError::ZeroBoxSize);
        }
        if self.preview_group_size == 0 {
            return Err(ConfigError::ZeroGroupSize);
        }
        Ok(())
    }
}
