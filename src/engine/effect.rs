//! Effect log entries and result bundles.
//!
//! Effects are an append-only record of what one engine call did, in the
//! order it happened. They carry only the data a caller needs to animate
//! or report a step, never pointers back into engine state.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::Board;
use crate::core::Position;

/// One run of three or more equal values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match<T> {
    /// The value every tile in the run shares.
    pub matched: T,

    /// Run positions in walk order: backward walk, start tile, forward walk.
    /// Runs of up to five tiles stay inline.
    pub positions: SmallVec<[Position; 5]>,
}

impl<T> Match<T> {
    /// Number of tiles in the run.
    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Check if the run has no positions. Never true for a detected run.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// A single step in the effect log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect<T: Clone> {
    /// A run was found and will be removed.
    Match(Match<T>),

    /// Gravity and refill finished; the board is fully populated again.
    /// The snapshot shares structure with the live board, so it's cheap.
    Refill { board: Board<T> },
}

impl<T: Clone> Effect<T> {
    /// The run, if this is a match effect.
    #[must_use]
    pub fn as_match(&self) -> Option<&Match<T>> {
        match self {
            Effect::Match(run) => Some(run),
            Effect::Refill { .. } => None,
        }
    }

    /// The board snapshot, if this is a refill effect.
    #[must_use]
    pub fn snapshot(&self) -> Option<&Board<T>> {
        match self {
            Effect::Refill { board } => Some(board),
            Effect::Match(_) => None,
        }
    }

    /// Check if this is a match effect.
    #[must_use]
    pub fn is_match(&self) -> bool {
        matches!(self, Effect::Match(_))
    }

    /// Check if this is a refill effect.
    #[must_use]
    pub fn is_refill(&self) -> bool {
        matches!(self, Effect::Refill { .. })
    }
}

/// Output of one detector pass.
///
/// `tile_matches` lists every position that belongs to a run; a position
/// appears once per run it's part of.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchResult<T: Clone> {
    pub tile_matches: Vec<Position>,
    pub effects: Vec<Effect<T>>,
}

impl<T: Clone> MatchResult<T> {
    /// A result with no runs.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tile_matches: Vec::new(),
            effects: Vec::new(),
        }
    }

    /// Record one run.
    pub fn push(&mut self, run: Match<T>) {
        self.tile_matches.extend(run.positions.iter().copied());
        self.effects.push(Effect::Match(run));
    }

    /// Append another pass's results after this one's.
    pub fn append(&mut self, other: MatchResult<T>) {
        self.tile_matches.extend(other.tile_matches);
        self.effects.extend(other.effects);
    }

    /// Check if no run was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tile_matches.is_empty()
    }
}

impl<T: Clone> Default for MatchResult<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// What `initial` and `make_move` hand back.
///
/// `board` is the caller's own board, mutated in place, not a copy.
#[derive(Debug)]
pub struct MoveResult<'a, T: Clone> {
    pub board: &'a Board<T>,
    pub effects: Vec<Effect<T>>,
}

impl<'a, T: Clone> MoveResult<'a, T> {
    /// Check if nothing happened (rejected move or already settled board).
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.effects.is_empty()
    }

    /// Iterate the runs in log order.
    pub fn matches(&self) -> impl Iterator<Item = &Match<T>> + '_ {
        self.effects.iter().filter_map(Effect::as_match)
    }

    /// Number of cascade levels, one per refill.
    #[must_use]
    pub fn cascade_depth(&self) -> usize {
        self.effects.iter().filter(|e| e.is_refill()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn run(value: char, positions: &[Position]) -> Match<char> {
        Match {
            matched: value,
            positions: SmallVec::from_slice(positions),
        }
    }

    #[test]
    fn test_match_result_push() {
        let mut result = MatchResult::new();
        assert!(result.is_empty());

        result.push(run('a', &[Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)]));

        assert!(!result.is_empty());
        assert_eq!(result.tile_matches.len(), 3);
        assert_eq!(result.effects.len(), 1);
        assert!(result.effects[0].is_match());
    }

    #[test]
    fn test_match_result_append_keeps_order() {
        let mut rows = MatchResult::new();
        rows.push(run('a', &[Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)]));
        let mut columns = MatchResult::new();
        columns.push(run('b', &[Position::new(0, 3), Position::new(1, 3), Position::new(2, 3)]));

        rows.append(columns);

        let values: Vec<_> = rows
            .effects
            .iter()
            .filter_map(Effect::as_match)
            .map(|m| m.matched)
            .collect();
        assert_eq!(values, vec!['a', 'b']);
        assert_eq!(rows.tile_matches.len(), 6);
    }

    #[test]
    fn test_effect_accessors() {
        let board = Board::from_values(1, 1, vec!['z']).unwrap();
        let refill = Effect::Refill { board: board.clone() };
        assert!(refill.is_refill());
        assert_eq!(refill.snapshot(), Some(&board));
        assert!(refill.as_match().is_none());

        let matched = Effect::Match(Match {
            matched: 'z',
            positions: smallvec![Position::new(0, 0); 3],
        });
        assert_eq!(matched.as_match().map(Match::len), Some(3));
        assert!(matched.snapshot().is_none());
    }

    #[test]
    fn test_move_result_summary() {
        let board = Board::from_values(1, 1, vec!['z']).unwrap();
        let result = MoveResult {
            board: &board,
            effects: vec![
                Effect::Match(run('z', &[Position::new(0, 0); 3])),
                Effect::Refill { board: board.clone() },
                Effect::Match(run('z', &[Position::new(0, 0); 3])),
                Effect::Refill { board: board.clone() },
            ],
        };

        assert!(!result.is_noop());
        assert_eq!(result.matches().count(), 2);
        assert_eq!(result.cascade_depth(), 2);
    }

    #[test]
    fn test_effect_serialization() {
        let effect: Effect<char> = Effect::Match(run('q', &[Position::new(1, 0), Position::new(1, 1), Position::new(1, 2)]));
        let json = serde_json::to_string(&effect).unwrap();
        let deserialized: Effect<char> = serde_json::from_str(&json).unwrap();
        assert_eq!(effect, deserialized);
    }
}
