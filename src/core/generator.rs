//! Tile value sources.
//!
//! The engine only needs one capability from a generator: hand out the
//! next tile value. It borrows the generator for the length of one call
//! and never stores it.
//!
//! - `TileGenerator`: the capability trait (closures implement it too)
//! - `PaletteGenerator`: uniform seeded draws from a fixed palette
//! - `SequenceGenerator`: cycles a fixed list, for replays and scenarios

use serde::{Deserialize, Serialize};

use super::config::ConfigError;
use super::rng::{GameRng, GameRngState};

/// Supplies new tile values on demand.
///
/// Must be able to produce at least 3 distinct values over repeated calls,
/// otherwise no run can ever form and cascades may fail to settle.
pub trait TileGenerator<T> {
    /// Produce the next tile value.
    fn next(&mut self) -> T;
}

impl<T, F> TileGenerator<T> for F
where
    F: FnMut() -> T,
{
    fn next(&mut self) -> T {
        self()
    }
}

/// The reference tile palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileColor {
    Black,
    Pink,
    Orange,
    Purple,
}

impl TileColor {
    /// Every palette color.
    pub const ALL: [TileColor; 4] = [
        TileColor::Black,
        TileColor::Pink,
        TileColor::Orange,
        TileColor::Purple,
    ];

    /// Lowercase color name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            TileColor::Black => "black",
            TileColor::Pink => "pink",
            TileColor::Orange => "orange",
            TileColor::Purple => "purple",
        }
    }
}

impl std::fmt::Display for TileColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Draws uniformly from a fixed palette.
///
/// Deterministic for a given seed. The RNG position can be captured with
/// `rng_state` and resumed with `from_state`.
#[derive(Clone, Debug)]
pub struct PaletteGenerator<T> {
    palette: Vec<T>,
    rng: GameRng,
}

impl<T: Clone> PaletteGenerator<T> {
    /// Create a generator over `palette` seeded with `seed`.
    pub fn new(palette: Vec<T>, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(palette, GameRng::new(seed))
    }

    /// Resume a generator from a captured RNG state.
    pub fn from_state(palette: Vec<T>, state: &GameRngState) -> Result<Self, ConfigError> {
        Self::with_rng(palette, GameRng::from_state(state))
    }

    fn with_rng(palette: Vec<T>, rng: GameRng) -> Result<Self, ConfigError> {
        if palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(Self { palette, rng })
    }

    /// The values this generator draws from.
    #[must_use]
    pub fn palette(&self) -> &[T] {
        &self.palette
    }

    /// Current RNG position, for checkpointing.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}

impl PaletteGenerator<TileColor> {
    /// Generator over the four reference colors.
    #[must_use]
    pub fn colors(seed: u64) -> Self {
        Self {
            palette: TileColor::ALL.to_vec(),
            rng: GameRng::new(seed),
        }
    }
}

impl<T: Clone> TileGenerator<T> for PaletteGenerator<T> {
    fn next(&mut self) -> T {
        let index = self.rng.gen_index(self.palette.len());
        self.palette[index].clone()
    }
}

/// Cycles through a fixed list of values, wrapping at the end.
#[derive(Clone, Debug)]
pub struct SequenceGenerator<T> {
    values: Vec<T>,
    cursor: usize,
}

impl<T: Clone> SequenceGenerator<T> {
    /// Create a generator that yields `values` in order, forever.
    pub fn new(values: Vec<T>) -> Result<Self, ConfigError> {
        if values.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(Self { values, cursor: 0 })
    }

    /// Number of values handed out so far.
    #[must_use]
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl<T: Clone> TileGenerator<T> for SequenceGenerator<T> {
    fn next(&mut self) -> T {
        let value = self.values[self.cursor % self.values.len()].clone();
        self.cursor += 1;
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_generator() {
        let mut counter = 0;
        let mut generator = || {
            counter += 1;
            counter
        };
        assert_eq!(TileGenerator::next(&mut generator), 1);
        assert_eq!(TileGenerator::next(&mut generator), 2);
    }

    #[test]
    fn test_palette_stays_in_palette() {
        let mut generator = PaletteGenerator::new(vec!['a', 'b', 'c'], 9).unwrap();
        for _ in 0..100 {
            let value = generator.next();
            assert!(generator.palette().contains(&value));
        }
    }

    #[test]
    fn test_palette_deterministic() {
        let mut g1 = PaletteGenerator::colors(42);
        let mut g2 = PaletteGenerator::colors(42);

        let seq1: Vec<_> = (0..20).map(|_| g1.next()).collect();
        let seq2: Vec<_> = (0..20).map(|_| g2.next()).collect();

        assert_eq!(seq1, seq2);
    }

    #[test]
    fn test_palette_uses_every_color() {
        let mut generator = PaletteGenerator::colors(1);
        let drawn: Vec<_> = (0..200).map(|_| generator.next()).collect();
        for color in TileColor::ALL {
            assert!(drawn.contains(&color), "{color} never drawn");
        }
    }

    #[test]
    fn test_palette_resume() {
        let mut generator = PaletteGenerator::colors(5);
        for _ in 0..17 {
            generator.next();
        }

        let state = generator.rng_state();
        let expected: Vec<_> = (0..10).map(|_| generator.next()).collect();

        let mut resumed = PaletteGenerator::from_state(TileColor::ALL.to_vec(), &state).unwrap();
        let actual: Vec<_> = (0..10).map(|_| resumed.next()).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_empty_palette_rejected() {
        let result = PaletteGenerator::<u8>::new(Vec::new(), 0);
        assert!(matches!(result, Err(ConfigError::EmptyPalette)));
    }

    #[test]
    fn test_sequence_wraps() {
        let mut generator = SequenceGenerator::new(vec![1, 2, 3]).unwrap();
        let drawn: Vec<_> = (0..7).map(|_| generator.next()).collect();
        assert_eq!(drawn, vec![1, 2, 3, 1, 2, 3, 1]);
        assert_eq!(generator.drawn(), 7);
    }

    #[test]
    fn test_color_names() {
        assert_eq!(TileColor::Pink.to_string(), "pink");
        assert_eq!(TileColor::ALL.len(), 4);
    }
}
