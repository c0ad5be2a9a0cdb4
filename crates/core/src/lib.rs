//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the board model, the reveal-state grid, the turn
//! state machine and the pixel layout math. It has **zero dependencies** on
//! rendering, input devices or timing, making it:
//!
//! - **Deterministic**: Same seed produces identical boards
//! - **Testable**: Every rule is exercised without a display
//! - **Portable**: Any backend that can draw rectangles can host the game
//!
//! # Module Structure
//!
//! - [`board`]: paired-icon grid generation
//! - [`config`]: [`GameConfig`] and its startup validation
//! - [`layout`]: cell <-> pixel mapping
//! - [`reveal`]: face-up / face-down tracking
//! - [`rng`]: seedable LCG with Fisher-Yates shuffle
//! - [`turn`]: first-pick / second-pick state machine
//!
//! # Example
//!
//! ```
//! use memory_puzzle_core::{Board, GameConfig, RevealState, SimpleRng, TurnOutcome, TurnState};
//! use memory_puzzle_types::CellPos;
//!
//! let config = GameConfig::default();
//! let board = Board::generate(&config, &mut SimpleRng::new(12345)).unwrap();
//! let mut revealed = RevealState::new(config.board_width, config.board_height, false);
//! let mut turn = TurnState::new();
//!
//! let out = turn.select(&board, &mut revealed, CellPos::new(0, 0));
//! assert_eq!(out, TurnOutcome::FirstRevealed(CellPos::new(0, 0)));
//! assert!(revealed.is_revealed(CellPos::new(0, 0)));
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod layout;
pub mod reveal;
pub mod rng;
pub mod turn;

pub use memory_puzzle_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::{GameConfig, Theme};
pub use error::{BoardError, ConfigError};
pub use layout::Layout;
pub use reveal::RevealState;
pub use rng::SimpleRng;
pub use turn::{TurnOutcome, TurnPhase, TurnState};
