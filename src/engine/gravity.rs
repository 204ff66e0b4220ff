//! Tile removal and gravity refill.

use rustc_hash::FxHashSet;

use crate::board::{Board, TileValue};
use crate::core::{Position, TileGenerator};

/// Mark every matched position `Empty`.
///
/// A tile in both a row run and a column run is listed twice; it's
/// cleared once. Returns the number of distinct tiles cleared.
pub fn clear_matches<T: Clone>(board: &mut Board<T>, matched: &[Position]) -> usize {
    let distinct: FxHashSet<Position> = matched.iter().copied().collect();
    for &position in &distinct {
        board.set_value(position, TileValue::Empty);
    }
    distinct.len()
}

/// Let tiles fall into the holes left by `clear_matches` and top up each
/// column with fresh values.
///
/// Cells are visited row by row from the top. Each `Empty` cell is bubbled
/// to the top of its column, shifting everything above it down one row,
/// and the vacated top cell takes the generator's next value. Generator
/// calls therefore happen in that same top-down, left-to-right order.
/// Returns the number of values drawn.
pub fn refill<T, G>(board: &mut Board<T>, generator: &mut G) -> usize
where
    T: Clone,
    G: TileGenerator<T> + ?Sized,
{
    let mut drawn = 0;

    for row in 0..board.height() {
        for col in 0..board.width() {
            let position = Position::new(row, col);
            if board.tile_at(position).is_some_and(TileValue::is_empty) {
                drop_column_above(board, position);
                board.set_value(Position::new(0, col), TileValue::Filled(generator.next()));
                drawn += 1;
            }
        }
    }

    drawn
}

/// Shift every tile above `hole` down one row; the hole ends up on top.
fn drop_column_above<T: Clone>(board: &mut Board<T>, hole: Position) {
    for row in (1..=hole.row).rev() {
        board.swap(Position::new(row, hole.col), Position::new(row - 1, hole.col));
    }
}
