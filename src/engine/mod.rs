//! Match-three engine: detection, removal, refill and move handling.
//!
//! A board is either settled (no run anywhere) or being resolved inside a
//! single call. Callers only ever see settled boards plus the effect log
//! describing how the call got there:
//!
//! ```
//! use rust_match3::core::{Position, SequenceGenerator};
//! use rust_match3::engine;
//! use rust_match3::Board;
//!
//! // a b a
//! // b a b
//! // c d c
//! let mut board = Board::from_values(3, 3, "abababcdc".chars()).unwrap();
//! let mut generator = SequenceGenerator::new(vec!['x', 'y', 'z']).unwrap();
//!
//! assert!(engine::move_possible(&mut board, Position::new(1, 1), Position::new(0, 1)));
//! let result = engine::make_move(&mut generator, &mut board, Position::new(1, 1), Position::new(0, 1));
//! assert_eq!(result.cascade_depth(), 1);
//! assert!(engine::is_settled(result.board));
//! ```
//!
//! ## Modules
//!
//! - `detector`: row/column run scanner
//! - `gravity`: clearing matched tiles and refilling the grid
//! - `cascade`: the detect/remove/refill loop
//! - `validator`: the simulate-and-revert legality gate
//! - `effect`: effect log entries and result bundles

mod effect;
mod detector;
mod gravity;
mod cascade;
mod validator;

pub use effect::{Effect, Match, MatchResult, MoveResult};
pub use detector::{MatchDetector, MIN_RUN};
pub use gravity::{clear_matches, refill};
pub use cascade::auto_match;
pub use validator::{MoveValidator, Rejection};

use tracing::{debug, trace};

use crate::board::Board;
use crate::core::{Direction, Position, TileGenerator};

/// Allocate a `width` x `height` board filled row by row from `generator`.
///
/// Runs in the initial fill are not resolved; follow up with `initial`.
pub fn create<T, G>(generator: &mut G, width: usize, height: usize) -> Board<T>
where
    T: Clone,
    G: TileGenerator<T> + ?Sized,
{
    Board::create(generator, width, height)
}

/// Resolve whatever runs a freshly filled board already contains.
pub fn initial<'a, T, G>(generator: &mut G, board: &'a mut Board<T>) -> MoveResult<'a, T>
where
    T: Clone + PartialEq,
    G: TileGenerator<T> + ?Sized,
{
    let mut effects = Vec::new();
    auto_match(board, generator, &mut effects);
    MoveResult { board, effects }
}

/// Swap two tiles and resolve the resulting cascade.
///
/// An illegal move leaves the board untouched and returns no effects.
pub fn make_move<'a, T, G>(
    generator: &mut G,
    board: &'a mut Board<T>,
    from: Position,
    to: Position,
) -> MoveResult<'a, T>
where
    T: Clone + PartialEq,
    G: TileGenerator<T> + ?Sized,
{
    if let Err(reason) = MoveValidator::check(board, from, to) {
        trace!(%from, %to, %reason, "move rejected");
        return MoveResult {
            board,
            effects: Vec::new(),
        };
    }

    board.swap(from, to);
    debug!(%from, %to, "move committed");

    let mut effects = Vec::new();
    auto_match(board, generator, &mut effects);
    MoveResult { board, effects }
}

/// Check if swapping `from` and `to` is a legal move.
///
/// Agrees exactly with the gate inside `make_move`. The board is swapped
/// and swapped back during the check, hence `&mut`; it is unchanged on
/// return.
pub fn move_possible<T: Clone + PartialEq>(board: &mut Board<T>, from: Position, to: Position) -> bool {
    MoveValidator::is_legal(board, from, to)
}

/// The value at `position`, or `None` off the board.
pub fn tile_piece<T: Clone>(board: &Board<T>, position: Position) -> Option<&T> {
    board.value_at(position)
}

/// Check if the detector finds no run anywhere.
pub fn is_settled<T: Clone + PartialEq>(board: &Board<T>) -> bool {
    !MatchDetector::has_match(board)
}

/// Every legal swap of a tile with its right or lower neighbor.
///
/// Ordered by the first position in row-major order, right before down.
/// An empty result means the board is stuck.
pub fn legal_moves<T: Clone + PartialEq>(board: &mut Board<T>) -> Vec<(Position, Position)> {
    let mut moves = Vec::new();

    for row in 0..board.height() {
        for col in 0..board.width() {
            let from = Position::new(row, col);
            for direction in [Direction::Right, Direction::Down] {
                let Some(to) = from.offset(direction) else {
                    continue;
                };
                if board.contains(to) && MoveValidator::is_legal(board, from, to) {
                    moves.push((from, to));
                }
            }
        }
    }

    moves
}
