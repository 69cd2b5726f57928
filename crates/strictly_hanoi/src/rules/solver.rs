//! Optimal solutions and hints.
//!
//! The optimal solution for `n` blocks takes `2^n - 1` moves. `next_optimal_move`
//! also works from positions the player reached by wandering off that path.

use super::super::action::Move;
use super::super::game::Game;
use super::super::types::PegId;
use tracing::{debug, instrument};

/// Fewest moves that solve `block_count` blocks.
pub fn minimal_moves(block_count: u8) -> u64 {
    (1u64 << block_count) - 1
}

/// The optimal move sequence from a fresh game: everything from A to C.
#[instrument]
pub fn optimal_moves(block_count: u8) -> Vec<Move> {
    let capacity = usize::try_from(minimal_moves(block_count)).unwrap_or(0);
    let mut moves = Vec::with_capacity(capacity);
    transfer(block_count, PegId::A, PegId::C, PegId::B, &mut moves);
    moves
}

fn transfer(count: u8, from: PegId, to: PegId, via: PegId, moves: &mut Vec<Move>) {
    if count == 0 {
        return;
    }
    transfer(count - 1, from, via, to, moves);
    moves.push(Move::new(from, to));
    transfer(count - 1, via, to, from, moves);
}

/// The next move on the shortest path from the current position to a
/// solved board.
///
/// Walks from the largest block down: a block already on its target leaves
/// the target alone for the smaller ones; a block that must move sends the
/// smaller ones to the spare peg. The smallest block that must move is the
/// answer, since everything above it is already out of the way.
///
/// Returns `None` unless the game is running.
#[instrument(skip(game), fields(status = %game.status()))]
pub fn next_optimal_move(game: &Game) -> Option<Move> {
    if !game.status().is_running() {
        return None;
    }

    let mut target = PegId::C;
    let mut next = None;
    for size in (1..=game.block_count()).rev() {
        let at = game.peg_of(size)?;
        if at != target {
            next = Some(Move::new(at, target));
            target = PegId::other(at, target);
        }
    }
    debug!(?next, "Hint computed");
    next
}
