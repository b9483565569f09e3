//! Pair counting and pair merging over token sequences.
//!
//! These are the two primitives shared by training and encoding. Both are
//! pure functions of their inputs.

use crate::core::merges::Pair;
use ahash::AHashMap;

/// Pair -> number of occurrences.
pub type PairCounts = AHashMap<Pair, u64>;

/// Count every adjacent pair in `tokens`.
///
/// Windows overlap, so `[a, a, a]` yields `(a, a)` twice.
pub fn count_pairs(tokens: &[u32]) -> PairCounts {
    let mut counts = PairCounts::with_capacity(tokens.len().saturating_sub(1));
    count_pairs_into(tokens, 1, &mut counts);
    counts
}

/// Add the adjacent pairs of `tokens` to `counts`, each weighted by `weight`.
pub fn count_pairs_into(tokens: &[u32], weight: u64, counts: &mut PairCounts) {
    for window in tokens.windows(2) {
        *counts.entry((window[0], window[1])).or_insert(0) += weight;
    }
}

/// Replace occurrences of `pair` in `tokens` with `new_id`.
///
/// Single left-to-right pass: a match consumes both tokens and the output is
/// never rescanned, so `[a, a, a]` under `(a, a)` becomes `[new, a]`.
pub fn merge_pair(tokens: &[u32], pair: Pair, new_id: u32) -> Vec<u32> {
    let mut merged = Vec::with_capacity(tokens.len());
    let mut i = 0;

    while i < tokens.len() {
        if i + 1 < tokens.len() && tokens[i] == pair.0 && tokens[i + 1] == pair.1 {
            merged.push(new_id);
            i += 2;
        } else {
            merged.push(tokens[i]);
            i += 1;
        }
    }

    merged
}
