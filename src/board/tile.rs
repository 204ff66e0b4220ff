//! Tiles and tile values.

use serde::{Deserialize, Serialize};

use crate::core::Position;

/// The content of one grid cell.
///
/// `Empty` marks a tile removed by a match. It only exists between the
/// removal and the refill of a single cascade step and is never visible
/// once an engine call returns. Keeping it as its own variant means a
/// domain type that is itself optional (`Option<U>`) can't be confused
/// with a removed tile.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileValue<T> {
    Filled(T),
    Empty,
}

impl<T> TileValue<T> {
    /// The domain value, if any.
    #[must_use]
    pub fn as_filled(&self) -> Option<&T> {
        match self {
            TileValue::Filled(value) => Some(value),
            TileValue::Empty => None,
        }
    }

    /// Check if the tile has been removed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, TileValue::Empty)
    }
}

impl<T> From<T> for TileValue<T> {
    fn from(value: T) -> Self {
        TileValue::Filled(value)
    }
}

/// One grid cell: a value and the fixed position it occupies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile<T> {
    pub value: TileValue<T>,
    pub position: Position,
}

impl<T> Tile<T> {
    /// Create a filled tile.
    pub fn new(value: T, position: Position) -> Self {
        Self {
            value: TileValue::Filled(value),
            position,
        }
    }
}
