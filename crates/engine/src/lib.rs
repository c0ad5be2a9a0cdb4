//! Game engine module - animation, painting and the frame loop
//!
//! Everything here is written against the [`Canvas`] and [`Platform`] traits,
//! so the same loop drives a terminal, a window, or the in-memory
//! [`HeadlessPlatform`] used by the tests.
//!
//! # Frame
//!
//! Each call to [`Game::step`]:
//!
//! 1. fills the background and draws every tile
//! 2. polls input (quit, pointer moves, clicks)
//! 3. highlights the covered tile under the pointer
//! 4. feeds a click to the turn machine and plays the resulting animations
//! 5. presents the frame and waits for the next tick
//!
//! Animations block: no input is polled until they finish, and clicks that
//! arrive meanwhile are dropped.
//!
//! # Example
//!
//! ```
//! use memory_puzzle_core::GameConfig;
//! use memory_puzzle_engine::{Flow, Game, HeadlessPlatform};
//! use memory_puzzle_types::{InputEvent, Point};
//!
//! let platform = HeadlessPlatform::new(640, 480)
//!     .with_script([vec![InputEvent::PointerUp(Point::new(75, 70))]])
//!     .quit_when_script_ends();
//! let mut game = Game::new(GameConfig::default(), platform, 7).unwrap();
//!
//! assert_eq!(game.step().unwrap(), Flow::Continue);
//! assert_eq!(game.revealed().revealed_count(), 1);
//! assert_eq!(game.step().unwrap(), Flow::Quit);
//! ```

pub mod animation;
pub mod game;
pub mod headless;
pub mod painter;
pub mod platform;

pub use memory_puzzle_core as core;
pub use memory_puzzle_types as types;

pub use animation::{cover_sweep, reveal_sweep, Animator};
pub use game::{Flow, Game};
pub use headless::{DrawOp, HeadlessPlatform, RecordingCanvas};
pub use painter::Painter;
pub use platform::{Canvas, Platform};
