//! Win detection for Tower of Hanoi.

use super::super::Peg;
use super::super::types::{PEG_COUNT, PegId};
use tracing::instrument;

/// Returns true once every block sits on the goal peg.
#[instrument(skip(pegs))]
pub fn is_solved(pegs: &[Peg; PEG_COUNT], block_count: u8) -> bool {
    pegs[PegId::C.index()].len() == usize::from(block_count)
}
