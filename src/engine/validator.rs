//! Move legality.
//!
//! A swap is legal when both positions are on the board, distinct, share a
//! row or column, and swapping them would create at least one run. The last
//! check swaps for real, scans, and swaps back, so the board is identical
//! afterwards whatever the outcome.

use super::detector::MatchDetector;
use crate::board::Board;
use crate::core::Position;

/// Why a candidate swap was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// One of the positions is off the board.
    OutOfBounds,
    /// Both positions are the same cell.
    SamePosition,
    /// The positions differ in both row and column.
    NotAligned,
    /// The swap would not create a run.
    NoMatch,
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            Rejection::OutOfBounds => "position off the board",
            Rejection::SamePosition => "positions are identical",
            Rejection::NotAligned => "positions share neither row nor column",
            Rejection::NoMatch => "swap creates no run",
        };
        f.write_str(reason)
    }
}

/// The gate in front of every committed move.
pub struct MoveValidator;

impl MoveValidator {
    /// Check a candidate swap.
    ///
    /// Only same-row or same-column is enforced, not adjacency; callers
    /// offer adjacent cells.
    pub fn check<T: Clone + PartialEq>(
        board: &mut Board<T>,
        from: Position,
        to: Position,
    ) -> Result<(), Rejection> {
        if !board.contains(from) || !board.contains(to) {
            return Err(Rejection::OutOfBounds);
        }
        if from == to {
            return Err(Rejection::SamePosition);
        }
        if !from.is_aligned_with(to) {
            return Err(Rejection::NotAligned);
        }

        board.swap(from, to);
        let creates_run = MatchDetector::has_match(board);
        board.swap(from, to);

        if creates_run {
            Ok(())
        } else {
            Err(Rejection::NoMatch)
        }
    }

    /// Check if a candidate swap is legal.
    pub fn is_legal<T: Clone + PartialEq>(board: &mut Board<T>, from: Position, to: Position) -> bool {
        Self::check(board, from, to).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // a b a
    // b a b
    // c d c
    fn board() -> Board<char> {
        Board::from_values(3, 3, "abababcdc".chars()).unwrap()
    }

    #[test]
    fn test_legal_swap() {
        let mut b = board();
        let before = b.clone();

        // Moving the centre 'a' up completes the top row.
        assert_eq!(MoveValidator::check(&mut b, Position::new(1, 1), Position::new(0, 1)), Ok(()));
        assert_eq!(b, before);
    }

    #[test]
    fn test_rejections() {
        let mut b = board();
        let before = b.clone();

        assert_eq!(
            MoveValidator::check(&mut b, Position::new(0, 0), Position::new(3, 0)),
            Err(Rejection::OutOfBounds)
        );
        assert_eq!(
            MoveValidator::check(&mut b, Position::new(1, 1), Position::new(1, 1)),
            Err(Rejection::SamePosition)
        );
        assert_eq!(
            MoveValidator::check(&mut b, Position::new(0, 0), Position::new(1, 1)),
            Err(Rejection::NotAligned)
        );
        assert_eq!(
            MoveValidator::check(&mut b, Position::new(2, 0), Position::new(2, 1)),
            Err(Rejection::NoMatch)
        );
        assert_eq!(b, before);
    }

    #[test]
    fn test_distant_aligned_swap_allowed() {
        // q r s a
        // a b c d
        // a e f g
        let mut b = Board::from_values(4, 3, "qrsaabcdaefg".chars()).unwrap();

        // Bringing the far 'a' to the corner completes column 0.
        assert!(MoveValidator::is_legal(&mut b, Position::new(0, 0), Position::new(0, 3)));
        assert!(!MoveValidator::is_legal(&mut b, Position::new(0, 1), Position::new(0, 3)));
    }

    #[test]
    fn test_rejection_display() {
        assert_eq!(Rejection::NoMatch.to_string(), "swap creates no run");
    }
}
