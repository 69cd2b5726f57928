//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{GameError, Move};
use super::game::Game;
use super::invariants::{HanoiInvariants, InvariantSet};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), GameError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), GameError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game must be accepting moves.
pub struct GameRunning;

impl GameRunning {
    /// Fails with [`GameError::InvalidState`] unless running.
    #[instrument(skip(game))]
    pub fn check(game: &Game) -> Result<(), GameError> {
        if game.status().is_running() {
            Ok(())
        } else {
            Err(GameError::InvalidState {
                operation: "move",
                status: game.status(),
            })
        }
    }
}

/// Precondition: source and destination differ.
pub struct DistinctPegs;

impl DistinctPegs {
    /// Fails with [`GameError::SamePeg`] if `from == to`.
    #[instrument]
    pub fn check(mov: &Move) -> Result<(), GameError> {
        if mov.from == mov.to {
            Err(GameError::SamePeg(mov.from))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the source peg has a block to move.
pub struct SourceNotEmpty;

impl SourceNotEmpty {
    /// Fails with [`GameError::EmptyPeg`] if the source is empty.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &Game) -> Result<(), GameError> {
        if game.peg(mov.from).is_empty() {
            Err(GameError::EmptyPeg(mov.from))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the destination accepts the source's top block.
///
/// The destination peg's own rule decides.
pub struct DestinationAccepts;

impl DestinationAccepts {
    /// Fails with whatever [`Peg::check_place`](crate::Peg::check_place) returns.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &Game) -> Result<(), GameError> {
        let block = game
            .peg(mov.from)
            .top_block()
            .ok_or(GameError::EmptyPeg(mov.from))?;
        game.peg(mov.to).check_place(block)
    }
}

/// Composite precondition for a legal move, checked in order.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &Game) -> Result<(), GameError> {
        GameRunning::check(game)?;
        DistinctPegs::check(mov)?;
        SourceNotEmpty::check(mov, game)?;
        DestinationAccepts::check(mov, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Game is running
/// - Pegs differ
/// - Source is not empty
/// - Destination accepts the block
///
/// Postconditions:
/// - Move count went up by exactly one
/// - Every block is still in play exactly once
/// - Every peg is still smallest-on-top
/// - Placement ranks are still unique
pub struct MoveContract;

impl Contract<Game, Move> for MoveContract {
    fn pre(game: &Game, action: &Move) -> Result<(), GameError> {
        LegalMove::check(action, game)
    }

    fn post(before: &Game, after: &Game) -> Result<(), GameError> {
        if after.move_count() != before.move_count() + 1 {
            warn!(
                before = before.move_count(),
                after = after.move_count(),
                "Move count did not advance by one"
            );
            return Err(GameError::InvariantViolation(
                "Postcondition failed: move count did not advance by one".to_string(),
            ));
        }

        HanoiInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Postcondition failed");
            GameError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
