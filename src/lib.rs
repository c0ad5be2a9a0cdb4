//! Memory puzzle (workspace facade crate).
//!
//! Re-exports the member crates under one name so tests, benches and the
//! binary can use `memory_puzzle::{core,engine,input,term,types}`.

pub use memory_puzzle_core as core;
pub use memory_puzzle_engine as engine;
pub use memory_puzzle_input as input;
pub use memory_puzzle_term as term;
pub use memory_puzzle_types as types;
