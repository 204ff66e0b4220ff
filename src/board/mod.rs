//! Board model: tiles and the grid that holds them.
//!
//! - `TileValue`: a filled domain value or the transient `Empty` marker
//! - `Tile`: a value pinned to its grid position
//! - `Board`: the grid itself, one tile per cell, row-major

mod tile;
mod grid;

pub use tile::{Tile, TileValue};
pub use grid::{Board, BoardError};
