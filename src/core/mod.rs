//! Core building blocks: geometry, tile generators, RNG, configuration.
//!
//! Nothing here knows about matches or cascades. The engine builds on
//! these types.

pub mod position;
pub mod generator;
pub mod rng;
pub mod config;

pub use position::{Axis, Direction, Position};
pub use generator::{PaletteGenerator, SequenceGenerator, TileColor, TileGenerator};
pub use rng::{GameRng, GameRngState};
pub use config::{BoardConfig, ConfigError, MIN_DISTINCT_VALUES};
