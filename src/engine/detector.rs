//! Row and column run detection.
//!
//! Each line is scanned in position order. The first tile of each distinct
//! value is the start of a walk in both directions along the line; if the
//! walk plus the start tile reaches `MIN_RUN` tiles, that's a run.
//!
//! A value is only evaluated once per line. A second, disjoint run of a
//! value that already appeared earlier in the same line (`A A B A A A`) is
//! therefore not reported by that line's scan.

use smallvec::SmallVec;
use tracing::trace;

use super::effect::{Match, MatchResult};
use crate::board::Board;
use crate::core::{Axis, Direction, Position};

/// Shortest run that counts as a match.
pub const MIN_RUN: usize = 3;

/// Scans a board for runs. Stateless; never mutates the board.
pub struct MatchDetector;

impl MatchDetector {
    /// Scan rows, then columns, and combine the results in that order.
    pub fn scan_all<T: Clone + PartialEq>(board: &Board<T>) -> MatchResult<T> {
        let mut result = Self::scan(board, Axis::Row);
        result.append(Self::scan(board, Axis::Column));
        result
    }

    /// Scan every line along `axis`, lines in ascending order.
    pub fn scan<T: Clone + PartialEq>(board: &Board<T>, axis: Axis) -> MatchResult<T> {
        let mut result = MatchResult::new();
        for line in 0..board.line_count(axis) {
            result.append(Self::scan_line(board, axis, line));
        }
        result
    }

    /// Check if any row or column holds a run.
    pub fn has_match<T: Clone + PartialEq>(board: &Board<T>) -> bool {
        !Self::scan_all(board).is_empty()
    }

    fn scan_line<T: Clone + PartialEq>(board: &Board<T>, axis: Axis, line: usize) -> MatchResult<T> {
        let mut result = MatchResult::new();
        let mut evaluated: SmallVec<[&T; 8]> = SmallVec::new();

        for tile in board.line(axis, line) {
            let Some(value) = tile.value.as_filled() else {
                continue;
            };
            if evaluated.contains(&value) {
                continue;
            }
            evaluated.push(value);

            if let Some(run) = Self::run_through(board, tile.position, axis) {
                trace!(?axis, line, start = %tile.position, len = run.len(), "run detected");
                result.push(run);
            }
        }

        result
    }

    /// The run along `axis` that contains `start`, if it is long enough.
    ///
    /// Positions come back as `[...backward walk, start, ...forward walk]`,
    /// each walk nearest-first.
    pub fn run_through<T: Clone + PartialEq>(
        board: &Board<T>,
        start: Position,
        axis: Axis,
    ) -> Option<Match<T>> {
        let value = board.value_at(start)?;
        let (backward, forward) = axis.directions();
        let behind = Self::walk(board, start, value, backward);
        let ahead = Self::walk(board, start, value, forward);

        if behind.len() + 1 + ahead.len() < MIN_RUN {
            return None;
        }

        let mut positions = SmallVec::with_capacity(behind.len() + 1 + ahead.len());
        positions.extend(behind);
        positions.push(start);
        positions.extend(ahead);

        Some(Match {
            matched: value.clone(),
            positions,
        })
    }

    /// Consecutive positions past `start` in `direction` that hold `value`.
    ///
    /// Stops at the first differing value or the board edge. `start` itself
    /// is not included.
    pub fn walk<T: Clone + PartialEq>(
        board: &Board<T>,
        start: Position,
        value: &T,
        direction: Direction,
    ) -> SmallVec<[Position; 4]> {
        let mut found = SmallVec::new();
        let mut cursor = start.offset(direction);

        while let Some(position) = cursor {
            match board.value_at(position) {
                Some(candidate) if candidate == value => {
                    found.push(position);
                    cursor = position.offset(direction);
                }
                _ => break,
            }
        }

        found
    }
}
