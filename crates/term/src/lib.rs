//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. The engine
//! draws shapes into a pixel canvas the size of the game window; the view
//! downsamples that canvas onto terminal cells (two samples per cell with
//! half-block glyphs) and the renderer flushes only what changed.
//!
//! Goals:
//! - Keep `core` and `engine` free of any terminal dependency
//! - Preserve the window's pixel layout so hit-testing stays exact
//! - Scale to whatever terminal size is available

pub mod canvas;
pub mod fb;
pub mod platform;
pub mod renderer;
pub mod view;

pub use memory_puzzle_engine as engine;
pub use memory_puzzle_input as input;
pub use memory_puzzle_types as types;

pub use canvas::PixelCanvas;
pub use fb::{Cell, FrameBuffer};
pub use platform::TerminalPlatform;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use view::{CanvasView, Projection, Viewport};
