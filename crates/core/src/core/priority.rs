//! Merge candidate ordering for BPE training.
//!
//! The next merge is the pair with the highest count. Ties go to the
//! lexicographically greater pair (first ID, then second ID), which keeps
//! training reproducible no matter how the counts were gathered.

use crate::core::merges::Pair;
use crate::core::pairs::PairCounts;

/// A merge candidate during BPE training.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeCandidate {
    /// The pair of token IDs to merge
    pub pair: Pair,
    /// The frequency/count of this pair
    pub count: u64,
}

impl MergeCandidate {
    /// Create a new merge candidate.
    pub fn new(pair: Pair, count: u64) -> Self {
        Self { pair, count }
    }
}

// Higher count wins, then the greater pair
impl Ord for MergeCandidate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.count
            .cmp(&other.count)
            .then_with(|| self.pair.cmp(&other.pair))
    }
}

impl PartialOrd for MergeCandidate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Pick the winning candidate from aggregated pair counts.
///
/// Returns None when there are no pairs left to merge.
pub fn best_candidate(counts: &PairCounts) -> Option<MergeCandidate> {
    counts
        .iter()
        .map(|(&pair, &count)| MergeCandidate::new(pair, count))
        .max()
}
