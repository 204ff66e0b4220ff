//! Grid storage and lookup.
//!
//! Tiles live in an `im::Vector` in row-major order, so the tile for
//! `(row, col)` sits at offset `row * width + col` and always carries that
//! position. Cloning a board is O(1) thanks to structural sharing, which
//! is what makes refill snapshots in the effect log cheap.

use im::Vector;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::tile::{Tile, TileValue};
use crate::core::{Axis, Position, TileGenerator};

/// Errors raised when assembling a board from caller-supplied data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("expected {expected} tiles, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("tile at {0} lies outside the board")]
    OutOfBounds(Position),

    #[error("more than one tile at {0}")]
    DuplicatePosition(Position),

    #[error("tile at {0} is empty")]
    EmptyTile(Position),
}

/// A `width` x `height` grid holding exactly one tile per cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board<T: Clone> {
    width: usize,
    height: usize,
    tiles: Vector<Tile<T>>,
}

impl<T: Clone> Board<T> {
    /// Fill a new board row by row with values from `generator`.
    ///
    /// Runs present in the initial fill are left alone; call
    /// `engine::initial` to resolve them.
    pub fn create<G>(generator: &mut G, width: usize, height: usize) -> Self
    where
        G: TileGenerator<T> + ?Sized,
    {
        let mut tiles = Vector::new();
        for row in 0..height {
            for col in 0..width {
                tiles.push_back(Tile::new(generator.next(), Position::new(row, col)));
            }
        }
        Self { width, height, tiles }
    }

    /// Build a board from values listed in row-major order.
    pub fn from_values<I>(width: usize, height: usize, values: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = T>,
    {
        let values: Vec<T> = values.into_iter().collect();
        let expected = width * height;
        if values.len() != expected {
            return Err(BoardError::SizeMismatch {
                expected,
                actual: values.len(),
            });
        }

        let tiles = values
            .into_iter()
            .enumerate()
            .map(|(i, value)| Tile::new(value, Position::new(i / width, i % width)))
            .collect();
        Ok(Self { width, height, tiles })
    }

    /// Build a board from tiles in any order, checking the grid invariant.
    ///
    /// Every position must be in bounds, covered exactly once, and hold a
    /// filled value.
    pub fn from_tiles<I>(width: usize, height: usize, tiles: I) -> Result<Self, BoardError>
    where
        I: IntoIterator<Item = Tile<T>>,
    {
        let expected = width * height;
        let mut slots: Vec<Option<Tile<T>>> = vec![None; expected];
        let mut actual = 0;

        for tile in tiles {
            let position = tile.position;
            if position.row >= height || position.col >= width {
                return Err(BoardError::OutOfBounds(position));
            }
            if tile.value.is_empty() {
                return Err(BoardError::EmptyTile(position));
            }
            let slot = &mut slots[position.row * width + position.col];
            if slot.is_some() {
                return Err(BoardError::DuplicatePosition(position));
            }
            *slot = Some(tile);
            actual += 1;
        }

        if actual != expected {
            return Err(BoardError::SizeMismatch { expected, actual });
        }

        Ok(Self {
            width,
            height,
            tiles: slots.into_iter().flatten().collect(),
        })
    }

    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of tiles (`width * height`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Check if the board has no cells at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Check if `position` lies on the board.
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        position.row < self.height && position.col < self.width
    }

    /// Row-major offset of `position`, if it lies on the board.
    #[must_use]
    pub fn index_of(&self, position: Position) -> Option<usize> {
        self.contains(position)
            .then(|| position.row * self.width + position.col)
    }

    /// The tile at `position`.
    #[must_use]
    pub fn tile(&self, position: Position) -> Option<&Tile<T>> {
        self.index_of(position).and_then(|i| self.tiles.get(i))
    }

    /// The raw tile value at `position`, `Empty` included.
    #[must_use]
    pub fn tile_at(&self, position: Position) -> Option<&TileValue<T>> {
        self.tile(position).map(|tile| &tile.value)
    }

    /// The domain value at `position`.
    #[must_use]
    pub fn value_at(&self, position: Position) -> Option<&T> {
        self.tile_at(position).and_then(TileValue::as_filled)
    }

    /// Iterate all tiles in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile<T>> + '_ {
        self.tiles.iter()
    }

    /// Number of lines along `axis`: rows for `Axis::Row`, columns otherwise.
    #[must_use]
    pub fn line_count(&self, axis: Axis) -> usize {
        match axis {
            Axis::Row => self.height,
            Axis::Column => self.width,
        }
    }

    /// Iterate the tiles of one row or column in position order.
    ///
    /// Yields nothing when `index` is past the last line.
    pub fn line(&self, axis: Axis, index: usize) -> impl Iterator<Item = &Tile<T>> + '_ {
        let (count, start, step) = match axis {
            Axis::Row if index < self.height => (self.width, index * self.width, 1),
            Axis::Column if index < self.width => (self.height, index, self.width),
            _ => (0, 0, 1),
        };
        (0..count).filter_map(move |i| self.tiles.get(start + i * step))
    }

    /// Exchange the values at two positions. Positions stay put.
    ///
    /// Does nothing if either position is off the board.
    pub fn swap(&mut self, first: Position, second: Position) {
        if let (Some(a), Some(b)) = (self.index_of(first), self.index_of(second)) {
            self.swap_indices(a, b);
        }
    }

    /// Exchange the values at two row-major offsets.
    pub fn swap_indices(&mut self, first: usize, second: usize) {
        let len = self.tiles.len();
        if first == second || first >= len || second >= len {
            return;
        }
        let taken = std::mem::replace(&mut self.tiles[first].value, TileValue::Empty);
        let displaced = std::mem::replace(&mut self.tiles[second].value, taken);
        self.tiles[first].value = displaced;
    }

    /// Overwrite the value at `position`. Returns false when off the board.
    pub(crate) fn set_value(&mut self, position: Position, value: TileValue<T>) -> bool {
        match self.index_of(position) {
            Some(i) => {
                self.tiles[i].value = value;
                true
            }
            None => false,
        }
    }
}

impl<T: Clone + std::fmt::Display> std::fmt::Display for Board<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.height {
            let mut first = true;
            for tile in self.line(Axis::Row, row) {
                if !first {
                    f.write_str(" ")?;
                }
                first = false;
                match &tile.value {
                    TileValue::Filled(value) => write!(f, "{value}")?,
                    TileValue::Empty => f.write_str("_")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
