//! The detect, remove, refill loop.

use tracing::debug;

use super::detector::MatchDetector;
use super::effect::Effect;
use super::gravity::{clear_matches, refill};
use crate::board::Board;
use crate::core::TileGenerator;

/// Resolve every run on the board until it settles, appending to `effects`.
///
/// Each level appends the row runs, then the column runs, then one
/// `Refill` carrying a snapshot of the repopulated board. Stops at the
/// first level that finds no run. There is no depth bound: a generator
/// that keeps producing runs keeps the loop going. Returns the number of
/// levels resolved.
pub fn auto_match<T, G>(board: &mut Board<T>, generator: &mut G, effects: &mut Vec<Effect<T>>) -> usize
where
    T: Clone + PartialEq,
    G: TileGenerator<T> + ?Sized,
{
    let mut level = 0;

    loop {
        let found = MatchDetector::scan_all(board);
        if found.is_empty() {
            debug!(levels = level, "board settled");
            return level;
        }
        level += 1;

        let runs = found.effects.len();
        effects.extend(found.effects);

        let cleared = clear_matches(board, &found.tile_matches);
        let drawn = refill(board, generator);
        effects.push(Effect::Refill {
            board: board.clone(),
        });

        debug!(level, runs, cleared, drawn, "cascade level resolved");
    }
}
