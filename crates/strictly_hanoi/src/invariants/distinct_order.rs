//! Distinct placement ranks across the whole game.

use super::super::Game;
use super::Invariant;
use std::collections::HashSet;

/// Invariant: ranks are pairwise distinct and all below the counter.
///
/// This is what makes "highest rank is on top" well defined.
pub struct DistinctOrderInvariant;

impl Invariant<Game> for DistinctOrderInvariant {
    fn holds(game: &Game) -> bool {
        let next = game.next_global_order();
        let mut seen = HashSet::new();
        game.pegs()
            .iter()
            .flat_map(|peg| peg.contents.iter())
            .all(|block| block.order() < next && seen.insert(block.order()))
    }

    fn description() -> &'static str {
        "Placement ranks are unique and below the next rank"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_holds() {
        let game = Game::new(10).unwrap();
        assert!(DistinctOrderInvariant::holds(&game));
    }

    #[test]
    fn test_rank_from_the_future_violates() {
        let mut game = Game::new(3).unwrap();
        let future = game.next_global_order() + 5;
        game.pegs[0].contents[1].bump_order(future);
        assert!(!DistinctOrderInvariant::holds(&game));
    }

    #[test]
    fn test_repeated_rank_violates() {
        let mut game = Game::new(3).unwrap();
        let order = game.pegs[0].contents[0].order();
        game.pegs[0].contents[1].bump_order(order);
        assert!(!DistinctOrderInvariant::holds(&game));
    }
}
