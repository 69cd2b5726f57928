//! Block conservation: every block is in play exactly once.

use super::super::Game;
use super::Invariant;

/// Invariant: sizes `1..=block_count` each appear on exactly one peg, once.
pub struct BlockConservationInvariant;

impl Invariant<Game> for BlockConservationInvariant {
    fn holds(game: &Game) -> bool {
        let mut sizes: Vec<u8> = game
            .pegs()
            .iter()
            .flat_map(|peg| peg.contents.iter().map(|block| block.size()))
            .collect();
        sizes.sort_unstable();
        sizes.into_iter().eq(1..=game.block_count())
    }

    fn description() -> &'static str {
        "Each block size 1..=N is on exactly one peg"
    }
}
