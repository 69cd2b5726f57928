//! A single peg and its one legality rule.
//!
//! Contents are a membership set. Physical order is never stored: the top
//! block is whichever member carries the highest placement rank.

use super::action::GameError;
use super::types::{Block, PegId};
use serde::Serialize;
use tracing::{debug, instrument, warn};

/// A peg holding zero or more blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Peg {
    id: PegId,
    label: String,
    pub(crate) contents: Vec<Block>,
}

impl Peg {
    /// Creates an empty peg.
    #[instrument(skip(label))]
    pub fn new(id: PegId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            contents: Vec::new(),
        }
    }

    /// Which peg this is.
    pub fn id(&self) -> PegId {
        self.id
    }

    /// Display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the block with the highest placement rank, if any.
    pub fn top_block(&self) -> Option<&Block> {
        self.contents.iter().max_by_key(|block| block.order())
    }

    /// Checks whether `block` could be placed here without placing it.
    ///
    /// # Errors
    ///
    /// - [`GameError::Duplicate`] if a block of that size is already here.
    /// - [`GameError::IllegalMove`] if the current top block is smaller.
    #[instrument(skip(self), fields(peg = %self.id, size = block.size()))]
    pub fn check_place(&self, block: &Block) -> Result<(), GameError> {
        if self.contains_size(block.size()) {
            return Err(GameError::Duplicate(block.size()));
        }
        if let Some(top) = self.top_block() {
            if top.size() < block.size() {
                warn!(onto = top.size(), "Larger block rejected");
                return Err(GameError::IllegalMove {
                    block: block.size(),
                    onto: top.size(),
                });
            }
        }
        Ok(())
    }

    /// Places `block` on top, stamping it with `next_order`.
    ///
    /// On error the peg is unchanged.
    #[instrument(skip(self), fields(peg = %self.id, size = block.size()))]
    pub fn try_place(&mut self, mut block: Block, next_order: u64) -> Result<(), GameError> {
        self.check_place(&block)?;
        block.bump_order(next_order);
        self.contents.push(block);
        debug!(next_order, len = self.contents.len(), "Block placed");
        Ok(())
    }

    /// Removes and returns the top block.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::EmptyPeg`] if there is nothing to remove.
    #[instrument(skip(self), fields(peg = %self.id))]
    pub fn remove_top(&mut self) -> Result<Block, GameError> {
        let index = self
            .contents
            .iter()
            .enumerate()
            .max_by_key(|(_, block)| block.order())
            .map(|(index, _)| index)
            .ok_or(GameError::EmptyPeg(self.id))?;
        let block = self.contents.remove(index);
        debug!(size = block.size(), "Block removed");
        Ok(block)
    }

    /// Puts a block back exactly as it was, rank included.
    pub(crate) fn restore(&mut self, block: Block) {
        self.contents.push(block);
    }

    /// Replaces the contents with pre-ranked blocks.
    pub(crate) fn seed(&mut self, blocks: Vec<Block>) {
        self.contents = blocks;
    }

    /// Number of blocks on the peg.
    pub fn len(&self) -> usize {
        self.contents.len()
    }

    /// Returns true if the peg holds no blocks.
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// Returns true if a block of this size is on the peg.
    pub fn contains_size(&self, size: u8) -> bool {
        self.contents.iter().any(|block| block.size() == size)
    }

    /// Removes every block.
    #[instrument(skip(self), fields(peg = %self.id))]
    pub fn clear(&mut self) {
        self.contents.clear();
    }

    /// Blocks ordered top first.
    pub fn contents_top_first(&self) -> Vec<Block> {
        let mut blocks = self.contents.clone();
        blocks.sort_by(|a, b| b.order().cmp(&a.order()));
        blocks
    }

    /// Block sizes ordered top first.
    pub fn sizes_top_first(&self) -> Vec<u8> {
        self.contents_top_first()
            .iter()
            .map(|block| block.size())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(size: u8, order: u64) -> Block {
        let mut block = Block::new(size).unwrap();
        block.bump_order(order);
        block
    }

    #[test]
    fn test_empty_peg_has_no_top() {
        let peg = Peg::new(PegId::A, "A");
        assert!(peg.top_block().is_none());
        assert!(peg.is_empty());
    }

    #[test]
    fn test_top_is_highest_rank_not_last_pushed() {
        let mut peg = Peg::new(PegId::A, "A");
        peg.seed(vec![block(1, 9), block(2, 8), block(3, 7)]);
        assert_eq!(peg.top_block().map(Block::size), Some(1));
        assert_eq!(peg.sizes_top_first(), vec![1, 2, 3]);
    }

    #[test]
    fn test_place_smaller_on_larger() {
        let mut peg = Peg::new(PegId::B, "B");
        peg.try_place(block(3, 0), 1).unwrap();
        peg.try_place(block(1, 0), 2).unwrap();
        assert_eq!(peg.top_block().map(Block::size), Some(1));
        assert_eq!(peg.top_block().map(Block::order), Some(2));
    }

    #[test]
    fn test_place_larger_on_smaller_leaves_peg_unchanged() {
        let mut peg = Peg::new(PegId::B, "B");
        peg.try_place(block(2, 0), 5).unwrap();
        let before = peg.clone();

        let result = peg.try_place(block(4, 0), 6);
        assert_eq!(result, Err(GameError::IllegalMove { block: 4, onto: 2 }));
        assert_eq!(peg, before);
    }

    #[test]
    fn test_duplicate_size_rejected() {
        let mut peg = Peg::new(PegId::C, "C");
        peg.try_place(block(2, 0), 1).unwrap();
        assert_eq!(peg.try_place(block(2, 0), 2), Err(GameError::Duplicate(2)));
        assert_eq!(peg.len(), 1);
    }

    #[test]
    fn test_remove_top() {
        let mut peg = Peg::new(PegId::A, "A");
        peg.seed(vec![block(1, 3), block(2, 2), block(3, 1)]);
        assert_eq!(peg.remove_top().map(|b| b.size()), Ok(1));
        assert_eq!(peg.remove_top().map(|b| b.size()), Ok(2));
        assert_eq!(peg.sizes_top_first(), vec![3]);
    }

    #[test]
    fn test_remove_top_empty() {
        let mut peg = Peg::new(PegId::C, "C");
        assert_eq!(peg.remove_top(), Err(GameError::EmptyPeg(PegId::C)));
    }

    #[test]
    fn test_clear() {
        let mut peg = Peg::new(PegId::A, "A");
        peg.seed(vec![block(1, 2), block(2, 1)]);
        peg.clear();
        assert!(peg.is_empty());
    }
}
