//! Core domain types for Tower of Hanoi.

use super::action::GameError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Largest block size a game can use.
pub const MAX_BLOCKS: u8 = 10;

/// Smallest block count a game can be configured with.
pub const MIN_BLOCKS: u8 = 3;

/// Number of pegs on the board.
pub const PEG_COUNT: usize = 3;

/// A numbered disk.
///
/// `size` is the identity of the block within a game and never changes.
/// `order` is the placement rank: the block with the highest rank on a peg
/// is the one on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Block {
    size: u8,
    order: u64,
}

impl Block {
    /// Creates a block with the given size and a zero placement rank.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidSize`] unless `1 <= size <= MAX_BLOCKS`.
    #[instrument]
    pub fn new(size: u8) -> Result<Self, GameError> {
        if !(1..=MAX_BLOCKS).contains(&size) {
            return Err(GameError::InvalidSize(size));
        }
        Ok(Self { size, order: 0 })
    }

    /// Diameter rank, 1 is the smallest.
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Placement rank.
    pub fn order(&self) -> u64 {
        self.order
    }

    /// Sets the placement rank. Callers hand out ranks from the game's
    /// [`OrderCounter`](crate::OrderCounter) so they stay unique.
    pub fn bump_order(&mut self, next_order: u64) {
        self.order = next_order;
    }
}

impl std::fmt::Display for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "block {}", self.size)
    }
}

/// One of the three pegs.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
pub enum PegId {
    /// Starting peg (index 0).
    A,
    /// Spare peg (index 1).
    B,
    /// Goal peg (index 2).
    C,
}

impl PegId {
    /// All pegs in board order.
    pub const ALL: [PegId; PEG_COUNT] = [PegId::A, PegId::B, PegId::C];

    /// Converts to a board index (0-2).
    pub fn index(self) -> usize {
        match self {
            PegId::A => 0,
            PegId::B => 1,
            PegId::C => 2,
        }
    }

    /// Creates a peg id from a board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Default display label.
    pub fn label(self) -> &'static str {
        match self {
            PegId::A => "A",
            PegId::B => "B",
            PegId::C => "C",
        }
    }

    /// Returns the peg that is neither `a` nor `b`.
    ///
    /// When `a == b` the result is the first peg different from `a`.
    pub fn other(a: PegId, b: PegId) -> PegId {
        <PegId as strum::IntoEnumIterator>::iter()
            .find(|p| *p != a && *p != b)
            .unwrap_or(PegId::B)
    }
}

impl std::fmt::Display for PegId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Monotonic source of placement ranks, one per game.
///
/// `peek` shows the rank the next placement will receive; `advance` hands
/// it out. Ranks are only consumed by successful placements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderCounter {
    next: u64,
}

impl OrderCounter {
    /// Creates a counter whose first rank is `start`.
    pub fn new(start: u64) -> Self {
        Self { next: start }
    }

    /// The rank the next placement will receive.
    pub fn peek(&self) -> u64 {
        self.next
    }

    /// Consumes and returns the next rank.
    pub fn advance(&mut self) -> u64 {
        let current = self.next;
        self.next += 1;
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_size_bounds() {
        assert!(Block::new(1).is_ok());
        assert!(Block::new(MAX_BLOCKS).is_ok());
        assert_eq!(Block::new(0), Err(GameError::InvalidSize(0)));
        assert_eq!(Block::new(11), Err(GameError::InvalidSize(11)));
    }

    #[test]
    fn test_bump_order_only_changes_rank() {
        let mut block = Block::new(4).unwrap();
        block.bump_order(17);
        assert_eq!(block.size(), 4);
        assert_eq!(block.order(), 17);
    }

    #[test]
    fn test_peg_id_index_roundtrip() {
        for peg in PegId::ALL {
            assert_eq!(PegId::from_index(peg.index()), Some(peg));
        }
        assert_eq!(PegId::from_index(3), None);
    }

    #[test]
    fn test_other_peg() {
        assert_eq!(PegId::other(PegId::A, PegId::C), PegId::B);
        assert_eq!(PegId::other(PegId::C, PegId::B), PegId::A);
        assert_eq!(PegId::other(PegId::B, PegId::A), PegId::C);
    }

    #[test]
    fn test_order_counter_peek_does_not_consume() {
        let mut counter = OrderCounter::new(4);
        assert_eq!(counter.peek(), 4);
        assert_eq!(counter.peek(), 4);
        assert_eq!(counter.advance(), 4);
        assert_eq!(counter.peek(), 5);
    }
}
