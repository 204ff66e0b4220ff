//! Board configuration.
//!
//! Games describe the board they want with `BoardConfig` and let it build
//! a settled board plus the generator that keeps refilling it:
//!
//! ```
//! use rust_match3::core::BoardConfig;
//! use rust_match3::engine::is_settled;
//!
//! let (board, _generator) = BoardConfig::classic().with_seed(7).build().unwrap();
//! assert_eq!(board.len(), 64);
//! assert!(is_settled(&board));
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::generator::{PaletteGenerator, TileColor};
use crate::board::{Board, BoardError};
use crate::engine;

/// Minimum number of distinct palette values for a playable board.
pub const MIN_DISTINCT_VALUES: usize = 3;

/// Errors raised while validating configuration or building a board.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("board must have non-zero dimensions, got {width}x{height}")]
    EmptyBoard { width: usize, height: usize },

    #[error("palette is empty")]
    EmptyPalette,

    #[error("palette needs at least 3 distinct values, got {distinct}")]
    PaletteTooSmall { distinct: usize },

    #[error("board error: {0}")]
    Board(#[from] BoardError),
}

/// Complete board configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BoardConfig<T> {
    /// Number of columns.
    pub width: usize,

    /// Number of rows.
    pub height: usize,

    /// Values the generator draws from.
    pub palette: Vec<T>,

    /// Generator seed.
    pub seed: u64,
}

impl<T: Clone + PartialEq> BoardConfig<T> {
    /// Create a new configuration with seed 0.
    pub fn new(width: usize, height: usize, palette: Vec<T>) -> Self {
        Self {
            width,
            height,
            palette,
            seed: 0,
        }
    }

    /// Set the generator seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Number of distinct values in the palette.
    #[must_use]
    pub fn distinct_values(&self) -> usize {
        let mut seen: Vec<&T> = Vec::with_capacity(self.palette.len());
        for value in &self.palette {
            if !seen.contains(&value) {
                seen.push(value);
            }
        }
        seen.len()
    }

    /// Check the configuration without building anything.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyBoard {
                width: self.width,
                height: self.height,
            });
        }
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        let distinct = self.distinct_values();
        if distinct < MIN_DISTINCT_VALUES {
            return Err(ConfigError::PaletteTooSmall { distinct });
        }
        Ok(())
    }

    /// Build a settled board and the generator that will refill it.
    pub fn build(&self) -> Result<(Board<T>, PaletteGenerator<T>), ConfigError> {
        self.validate()?;

        let mut generator = PaletteGenerator::new(self.palette.clone(), self.seed)?;
        let mut board = Board::create(&mut generator, self.width, self.height);
        let effects = engine::initial(&mut generator, &mut board).effects.len();
        tracing::debug!(
            width = self.width,
            height = self.height,
            seed = self.seed,
            effects,
            "board built"
        );

        Ok((board, generator))
    }
}

impl BoardConfig<TileColor> {
    /// An 8x8 board over the reference colors.
    #[must_use]
    pub fn classic() -> Self {
        Self::new(8, 8, TileColor::ALL.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_defaults() {
        let config = BoardConfig::classic();
        assert_eq!(config.width, 8);
        assert_eq!(config.height, 8);
        assert_eq!(config.seed, 0);
        assert_eq!(config.distinct_values(), 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_with_seed() {
        let config = BoardConfig::classic().with_seed(99);
        assert_eq!(config.seed, 99);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        let config = BoardConfig::new(0, 5, vec![1, 2, 3]);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyBoard { width: 0, height: 5 })
        ));
    }

    #[test]
    fn test_small_palette_rejected() {
        let config = BoardConfig::new(4, 4, vec!['x', 'y', 'x', 'y']);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PaletteTooSmall { distinct: 2 })
        ));

        let empty = BoardConfig::<char>::new(4, 4, Vec::new());
        assert!(matches!(empty.validate(), Err(ConfigError::EmptyPalette)));
    }

    #[test]
    fn test_build_is_deterministic() {
        let (board1, _) = BoardConfig::classic().with_seed(3).build().unwrap();
        let (board2, _) = BoardConfig::classic().with_seed(3).build().unwrap();
        assert_eq!(board1, board2);
    }

    #[test]
    fn test_build_produces_settled_board() {
        let (board, _) = BoardConfig::new(6, 5, vec![1u8, 2, 3]).with_seed(11).build().unwrap();
        assert_eq!(board.width(), 6);
        assert_eq!(board.height(), 5);
        assert!(engine::is_settled(&board));
    }

    #[test]
    fn test_error_messages() {
        let err = ConfigError::PaletteTooSmall { distinct: 1 };
        assert_eq!(
            err.to_string(),
            "palette needs at least 3 distinct values, got 1"
        );
    }
}
