//! # rust-match3
//!
//! A generic match-three board engine.
//!
//! The engine owns nothing but the rules: the caller owns the `Board`, lends
//! it to each call together with a `TileGenerator`, and gets back the same
//! board plus an ordered log of `Effect`s describing what happened.
//!
//! ## Design Principles
//!
//! 1. **Value-Agnostic**: Tiles hold any `T: Clone + PartialEq`. The engine
//!    only compares values for equality.
//!
//! 2. **Synchronous and Settled**: `initial` and `make_move` run the whole
//!    cascade before returning. Boards are settled before and after every
//!    call.
//!
//! 3. **No Errors for Play**: Illegal moves return an empty effect log,
//!    off-board reads return `None`. Only board assembly and configuration
//!    can fail.
//!
//! ## Architecture
//!
//! - **Persistent Storage**: Tiles live in an `im::Vector`, so the board
//!   snapshot attached to every `Refill` effect is an O(1) clone.
//!
//! - **Deterministic Draws**: `PaletteGenerator` runs on a seeded ChaCha8
//!   stream whose position can be saved and restored.
//!
//! ## Modules
//!
//! - `core`: Positions and directions, tile generators, RNG, configuration
//! - `board`: Tiles and the grid
//! - `engine`: Run detection, removal and refill, cascades, move validation

pub mod core;
pub mod board;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    Axis, Direction, Position,
    TileGenerator, PaletteGenerator, SequenceGenerator, TileColor,
    GameRng, GameRngState,
    BoardConfig, ConfigError,
};

pub use crate::board::{Board, BoardError, Tile, TileValue};

pub use crate::engine::{
    Effect, Match, MatchResult, MoveResult,
    MatchDetector, MoveValidator, Rejection,
    create, initial, make_move, move_possible, tile_piece,
    is_settled, legal_moves,
};
