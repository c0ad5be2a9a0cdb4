//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, rendering backends, headless tests).
//!
//! # Window and Board Dimensions
//!
//! The game is laid out on a virtual pixel surface; rendering backends decide
//! how those pixels reach the screen.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `WINDOW_WIDTH` | 640 | Surface width in pixels |
//! | `WINDOW_HEIGHT` | 480 | Surface height in pixels |
//! | `BOX_SIZE` | 40 | Tile edge in pixels |
//! | `GAP_SIZE` | 10 | Gap between tiles in pixels |
//! | `BOARD_WIDTH` | 10 | Columns of tiles |
//! | `BOARD_HEIGHT` | 7 | Rows of tiles |
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FPS` | 30 | Target frame rate |
//! | `REVEAL_SPEED` | 8 | Pixels the cover slides per animation frame |
//! | `MISMATCH_DELAY_MS` | 1000 | Pause before a wrong pair is covered again |
//! | `WIN_PAUSE_MS` | 2000 | Pause after the win flash and after the reset |
//! | `WIN_FLASH_CYCLES` | 13 | Background swaps in the win flash |
//! | `WIN_FLASH_MS` | 300 | Hold time of each win flash colour |
//! | `PREVIEW_GROUP_SIZE` | 8 | Tiles revealed together by the start preview |
//!
//! # Examples
//!
//! ```
//! use memory_puzzle_types::{Icon, InputEvent, Key, Shape, ALL_COLORS, RED, BOARD_WIDTH, BOARD_HEIGHT};
//!
//! let icon = Icon::new(Shape::Donut, RED);
//! assert_eq!(icon, Icon::new(Shape::Donut, RED));
//! assert_ne!(icon, Icon::new(Shape::Square, RED));
//!
//! // The default board needs 35 distinct icons, the palette offers 35.
//! let pool = ALL_COLORS.len() * Shape::ALL.len();
//! assert!(pool >= (BOARD_WIDTH as usize * BOARD_HEIGHT as usize) / 2);
//!
//! assert!(InputEvent::KeyUp(Key::Escape).is_quit());
//! ```

/// Surface width in pixels
pub const WINDOW_WIDTH: i32 = 640;

/// Surface height in pixels
pub const WINDOW_HEIGHT: i32 = 480;

/// Target frame rate (frames per second)
pub const FPS: u32 = 30;

/// Pixels the cover slides per animation frame
pub const REVEAL_SPEED: i32 = 8;

/// Tile width and height in pixels
pub const BOX_SIZE: i32 = 40;

/// Gap between tiles in pixels
pub const GAP_SIZE: i32 = 10;

/// Number of tile columns
pub const BOARD_WIDTH: u16 = 10;

/// Number of tile rows
pub const BOARD_HEIGHT: u16 = 7;

/// Pause before a mismatched pair is covered again
pub const MISMATCH_DELAY_MS: u32 = 1000;

/// Pause after the win flash, and again after the fresh board is shown
pub const WIN_PAUSE_MS: u32 = 2000;

/// Number of background swaps in the win flash
pub const WIN_FLASH_CYCLES: u32 = 13;

/// Hold time of each win flash frame
pub const WIN_FLASH_MS: u32 = 300;

/// Tiles revealed at once by the start-of-game preview
pub const PREVIEW_GROUP_SIZE: usize = 8;


/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

pub const GRAY: Rgb = Rgb::new(100, 100, 100);
pub const NAVY_BLUE: Rgb = Rgb::new(60, 60, 100);
pub const WHITE: Rgb = Rgb::new(255, 255, 255);
pub const RED: Rgb = Rgb::new(255, 0, 0);
pub const GREEN: Rgb = Rgb::new(0, 255, 0);
pub const BLUE: Rgb = Rgb::new(0, 0, 255);
pub const YELLOW: Rgb = Rgb::new(255, 255, 0);
pub const ORANGE: Rgb = Rgb::new(255, 128, 0);
pub const PURPLE: Rgb = Rgb::new(255, 0, 255);
pub const CYAN: Rgb = Rgb::new(0, 255, 255);

/// The seven icon colors, in palette order
pub const ALL_COLORS: [Rgb; 7] = [RED, GREEN, BLUE, YELLOW, ORANGE, PURPLE, CYAN];

/// The five icon shapes
///
/// Each shape is drawn inside a tile-sized box:
/// - **Donut**: filled circle with a background-colored hole
/// - **Square**: smaller filled square centered in the box
/// - **Diamond**: filled rhombus touching the box edges
/// - **Lines**: diagonal hatching from two opposite corners
/// - **Oval**: filled ellipse, full width and half height
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    Donut,
    Square,
    Diamond,
    Lines,
    Oval,
}

impl Shape {
    /// Every shape, in palette order
    pub const ALL: [Shape; 5] = [
        Shape::Donut,
        Shape::Square,
        Shape::Diamond,
        Shape::Lines,
        Shape::Oval,
    ];

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::Donut => "donut",
            Shape::Square => "square",
            Shape::Diamond => "diamond",
            Shape::Lines => "lines",
            Shape::Oval => "oval",
        }
    }
}

/// What hides under a tile: a shape in a color.
///
/// Two icons are equal only when both shape and color match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Icon {
    pub shape: Shape,
    pub color: Rgb,
}

impl Icon {
    pub const fn new(shape: Shape, color: Rgb) -> Self {
        Self { shape, color }
    }
}

/// A board cell addressed by (column, row).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellPos {
    pub x: u16,
    pub y: u16,
}

impl CellPos {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// A pixel position on the game surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned pixel rectangle (`left`, `top`, `width`, `height`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.top + self.height
    }

    /// Whether `p` lies inside. The right and bottom edges are exclusive.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x < self.right() && p.y >= self.top && p.y < self.bottom()
    }

    /// Grow the rectangle by `by` pixels on every side.
    pub fn inflate(&self, by: i32) -> Rect {
        Rect::new(
            self.left - by,
            self.top - by,
            self.width + 2 * by,
            self.height + 2 * by,
        )
    }
}

/// Keys the game distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Char(char),
    Other,
}

/// Backend-neutral input events, already mapped to surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window closed or an explicit quit request
    Quit,
    /// A key was released
    KeyUp(Key),
    /// The pointer moved over the surface
    PointerMove(Point),
    /// A pointer button was released
    PointerUp(Point),
}

impl InputEvent {
    /// Whether this event ends the game: an explicit quit or Escape.
    pub fn is_quit(&self) -> bool {
        matches!(self, InputEvent::Quit | InputEvent::KeyUp(Key::Escape))
    }
}
