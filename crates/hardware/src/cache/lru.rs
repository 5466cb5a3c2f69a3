//! Least Recently Used (LRU) Recency Labels.
//!
//! Recency is tracked by a rank stored in each line rather than a separate
//! usage stack. Within a set, the labels of valid lines always form a
//! permutation of `0..k` where `k` is the number of valid lines; label 0 is
//! the most recently used line and the largest label is the LRU victim.
//!
//! # Performance
//!
//! - **Time Complexity:** `touch()`, `insert()` and `select_victim()` are O(W)
//!   where W is the associativity
//! - **Space Complexity:** one counter per line, no per-set structure
//! - **Equivalence:** eviction order is identical to a true LRU stack

use super::store::BlockStore;

impl BlockStore {
    /// Marks a resident line as most recently used.
    ///
    /// Valid lines more recent than the touched one age by one rank; lines
    /// older than it keep their ranks.
    pub fn touch(&mut self, set: usize, slot: usize) {
        let blocks = self.set_blocks_mut(set);
        let current = blocks[slot].label;
        for block in blocks.iter_mut().filter(|b| b.valid && b.label < current) {
            block.label += 1;
        }
        blocks[slot].label = 0;
    }

    /// Ranks a newly filled line as most recently used.
    ///
    /// Every other valid line in the set ages by one rank.
    pub fn insert(&mut self, set: usize, slot: usize) {
        let blocks = self.set_blocks_mut(set);
        for (i, block) in blocks.iter_mut().enumerate() {
            if i != slot && block.valid {
                block.label += 1;
            }
        }
        blocks[slot].label = 0;
    }

    /// Selects the least recently used slot of a full set.
    ///
    /// Ties go to the lowest slot index.
    pub fn select_victim(&self, set: usize) -> usize {
        self.set_blocks(set)
            .iter()
            .enumerate()
            .fold((0, 0), |(victim, max), (slot, block)| {
                if block.label > max {
                    (slot, block.label)
                } else {
                    (victim, max)
                }
            })
            .0
    }
}
