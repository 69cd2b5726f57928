//! First-class action types for Tower of Hanoi.
//!
//! A move names a source and a destination peg. The block that travels is
//! always the source's top block, so the move carries no block of its own.

use super::phases::GameStatus;
use super::types::PegId;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Take the top block of `from` and put it on `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Peg the block leaves.
    pub from: PegId,
    /// Peg the block lands on.
    pub to: PegId,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(from: PegId, to: PegId) -> Self {
        Self { from, to }
    }

    /// Builds a move from board indices.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidPeg`] for an index outside 0-2.
    #[instrument]
    pub fn from_indices(from: usize, to: usize) -> Result<Self, GameError> {
        let from = PegId::from_index(from).ok_or(GameError::InvalidPeg(from))?;
        let to = PegId::from_index(to).ok_or(GameError::InvalidPeg(to))?;
        Ok(Self { from, to })
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// What a successful move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Move count after this move.
    pub move_count: u32,
    /// Size of the block that moved.
    pub block_moved: u8,
    /// True if this move solved the puzzle.
    pub finished: bool,
}

/// Errors raised by the game engine.
///
/// None of these are fatal. See [`GameError::is_rejected_move`] for the
/// split between ordinary illegal moves and API misuse.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// Block size outside 1..=10.
    #[display("Block size {} is outside 1..=10", _0)]
    InvalidSize(u8),

    /// Block count outside 3..=10.
    #[display("Block count {} is outside 3..=10", _0)]
    InvalidBlockCount(u8),

    /// Operation not allowed in the current phase.
    #[display("Cannot {} while the game is {}", operation, status)]
    InvalidState {
        /// What was attempted.
        operation: &'static str,
        /// Phase at the time.
        status: GameStatus,
    },

    /// Peg index outside 0-2.
    #[display("Peg index {} is out of range", _0)]
    InvalidPeg(usize),

    /// Source and destination are the same peg.
    #[display("Source and destination are both peg {}", _0)]
    SamePeg(PegId),

    /// Source peg holds no blocks.
    #[display("Peg {} is empty", _0)]
    EmptyPeg(PegId),

    /// Block is already on the destination peg.
    #[display("Block {} is already on this peg", _0)]
    Duplicate(u8),

    /// Larger block would land on a smaller one.
    #[display("Cannot place block {} on smaller block {}", block, onto)]
    IllegalMove {
        /// Size of the block being placed.
        block: u8,
        /// Size of the destination's top block.
        onto: u8,
    },

    /// A postcondition failed after a move.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl GameError {
    /// Returns true for errors a player triggers by trying an illegal move.
    ///
    /// Front ends treat these as a no-op. Everything else means the caller
    /// used the engine wrongly.
    pub fn is_rejected_move(&self) -> bool {
        matches!(
            self,
            GameError::SamePeg(_)
                | GameError::EmptyPeg(_)
                | GameError::Duplicate(_)
                | GameError::IllegalMove { .. }
        )
    }
}

impl std::error::Error for GameError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_display() {
        assert_eq!(Move::new(PegId::A, PegId::C).to_string(), "A -> C");
    }

    #[test]
    fn test_from_indices_rejects_out_of_range() {
        assert_eq!(
            Move::from_indices(0, 2),
            Ok(Move::new(PegId::A, PegId::C))
        );
        assert_eq!(Move::from_indices(3, 0), Err(GameError::InvalidPeg(3)));
        assert_eq!(Move::from_indices(1, 7), Err(GameError::InvalidPeg(7)));
    }

    #[test]
    fn test_rejected_move_classification() {
        assert!(GameError::SamePeg(PegId::A).is_rejected_move());
        assert!(GameError::EmptyPeg(PegId::B).is_rejected_move());
        assert!(GameError::IllegalMove { block: 3, onto: 1 }.is_rejected_move());
        assert!(!GameError::InvalidSize(0).is_rejected_move());
        assert!(
            !GameError::InvalidState {
                operation: "move",
                status: GameStatus::Idle,
            }
            .is_rejected_move()
        );
    }

    #[test]
    fn test_error_messages() {
        let err = GameError::InvalidState {
            operation: "configure",
            status: GameStatus::Running,
        };
        assert_eq!(err.to_string(), "Cannot configure while the game is Running");
        assert_eq!(
            GameError::IllegalMove { block: 3, onto: 2 }.to_string(),
            "Cannot place block 3 on smaller block 2"
        );
    }
}
