//! Stack ordering: no block ever sits on a smaller one.

use super::super::Game;
use super::Invariant;

/// Invariant: read top first, every peg's sizes strictly increase.
pub struct StackOrderingInvariant;

impl Invariant<Game> for StackOrderingInvariant {
    fn holds(game: &Game) -> bool {
        game.pegs().iter().all(|peg| {
            peg.sizes_top_first()
                .windows(2)
                .all(|pair| pair[0] < pair[1])
        })
    }

    fn description() -> &'static str {
        "Every peg is smallest-on-top"
    }
}
