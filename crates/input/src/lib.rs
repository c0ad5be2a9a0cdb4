//! Terminal input module.
//!
//! This module is independent of the game engine. It maps `crossterm` key and
//! mouse events into backend-neutral [`crate::types::InputEvent`]s; the caller
//! supplies the projection from terminal cells to surface pixels.

pub mod map;

pub use memory_puzzle_types as types;

pub use map::{map_event, map_key, should_quit};
