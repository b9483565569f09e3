//! Merge rule management for BPE.
//!
//! This module provides data structures for storing and accessing BPE merge rules.
//! Merge rules are stored using token IDs rather than byte strings for fast comparison.

use ahash::AHashMap;

/// A pair of token IDs that can be merged.
pub type Pair = (u32, u32);

/// Number of base tokens: one per byte value.
pub const BASE_VOCAB_SIZE: usize = 256;

/// Merge rule lookup: pair -> new token ID.
///
/// Token IDs are handed out in learning order, so the ID doubles as the
/// merge rank (lower ID = learned earlier = higher priority).
pub type MergeMap = AHashMap<Pair, u32>;

/// Collection of BPE merge rules in the order they were learned.
#[derive(Debug, Clone, Default)]
pub struct MergeRules {
    /// Learned pairs; the pair at index `i` produced token `256 + i`
    ordered: Vec<Pair>,
    /// Pair -> token ID
    merges: MergeMap,
}

impl MergeRules {
    /// Create a new empty collection of merge rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new collection with capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ordered: Vec::with_capacity(capacity),
            merges: MergeMap::with_capacity(capacity),
        }
    }

    /// ID the next learned merge will receive.
    #[inline]
    pub fn next_id(&self) -> u32 {
        (BASE_VOCAB_SIZE + self.ordered.len()) as u32
    }

    /// Add a merge rule and return the token ID it produces.
    ///
    /// A pair that is already known keeps its existing ID.
    pub fn add_merge(&mut self, pair: Pair) -> u32 {
        if let Some(&id) = self.merges.get(&pair) {
            return id;
        }

        let id = self.next_id();
        self.ordered.push(pair);
        self.merges.insert(pair, id);
        id
    }

    /// Get the token ID produced by merging `pair`, if it is a learned rule.
    #[inline]
    pub fn get(&self, pair: Pair) -> Option<u32> {
        self.merges.get(&pair).copied()
    }

    /// Check whether `pair` is a learned rule.
    #[inline]
    pub fn contains(&self, pair: Pair) -> bool {
        self.merges.contains_key(&pair)
    }

    /// Find the learned pair in `tokens` that was learned first.
    ///
    /// Looks at every adjacent pair and returns the one with the lowest merge
    /// ID along with that ID, or `None` if no adjacent pair is a rule.
    pub fn next_merge(&self, tokens: &[u32]) -> Option<(Pair, u32)> {
        tokens
            .windows(2)
            .filter_map(|window| {
                let pair = (window[0], window[1]);
                self.get(pair).map(|id| (id, pair))
            })
            .min()
            .map(|(id, pair)| (pair, id))
    }

    /// Iterate over `(pair, id)` in learning order.
    pub fn iter(&self) -> impl Iterator<Item = (Pair, u32)> + '_ {
        self.ordered
            .iter()
            .enumerate()
            .map(|(idx, &pair)| (pair, (BASE_VOCAB_SIZE + idx) as u32))
    }

    /// Get the number of merge rules.
    #[inline]
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    /// Check if there are no merge rules.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}
