//! Pair counting over a training corpus.
//!
//! Each corpus string becomes one token sequence over its UTF-8 bytes.
//! Identical strings are stored once with an occurrence count, which leaves
//! every pair statistic unchanged while skipping repeated work.

use ahash::AHashMap;
use naivebpe_core::{count_pairs_into, merge_pair, MergeRules, Pair, PairCounts};

/// Counter for BPE pair frequencies across a corpus.
#[derive(Debug, Clone, Default)]
pub struct PairCounter {
    /// Distinct corpus strings as token sequences, in first-seen order
    sequences: Vec<Vec<u32>>,
    /// Occurrences of each sequence in the corpus
    sequence_counts: Vec<u64>,
    /// Original bytes -> index into `sequences`
    index: AHashMap<Vec<u8>, usize>,
}

impl PairCounter {
    /// Create a new pair counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a counter from a corpus of strings.
    pub fn from_corpus<S: AsRef<str>>(corpus: &[S]) -> Self {
        let mut counter = Self::new();
        for text in corpus {
            counter.add_text(text.as_ref());
        }
        counter
    }

    /// Add one corpus string.
    pub fn add_text(&mut self, text: &str) {
        let bytes = text.as_bytes();

        if let Some(&pos) = self.index.get(bytes) {
            self.sequence_counts[pos] += 1;
            return;
        }

        self.index.insert(bytes.to_vec(), self.sequences.len());
        self.sequences.push(bytes.iter().map(|&b| u32::from(b)).collect());
        self.sequence_counts.push(1);
    }

    /// Count all pairs in parallel.
    ///
    /// Per-sequence counts are summed in the reduction, so the result is the
    /// same map the sequential count produces.
    pub fn count_pairs_parallel(&self) -> PairCounts {
        use rayon::prelude::*;

        self.sequences
            .par_iter()
            .zip(self.sequence_counts.par_iter())
            .fold(PairCounts::new, |mut acc, (sequence, &count)| {
                count_pairs_into(sequence, count, &mut acc);
                acc
            })
            .reduce(PairCounts::new, |mut acc, pair_counts| {
                for (pair, count) in pair_counts {
                    *acc.entry(pair).or_insert(0) += count;
                }
                acc
            })
    }

    /// Count all pairs sequentially.
    pub fn count_pairs_sequential(&self) -> PairCounts {
        let mut pair_counts = PairCounts::new();

        for (sequence, &count) in self.sequences.iter().zip(self.sequence_counts.iter()) {
            count_pairs_into(sequence, count, &mut pair_counts);
        }

        pair_counts
    }

    /// Merge a pair in every sequence.
    pub fn merge_pair_in_sequences(&mut self, pair: Pair, new_token_id: u32) {
        for sequence in &mut self.sequences {
            if sequence.len() >= 2 {
                *sequence = merge_pair(sequence, pair, new_token_id);
            }
        }
    }

    /// Apply already learned merges, in learning order, to every sequence.
    ///
    /// Leaves the sequences exactly as training with those merges would have.
    pub fn apply_merges(&mut self, merges: &MergeRules) {
        for (pair, id) in merges.iter() {
            self.merge_pair_in_sequences(pair, id);
        }
    }

    /// Get the number of distinct sequences.
    pub fn sequence_count(&self) -> usize {
        self.sequences.len()
    }

    /// Get the number of corpus strings added, duplicates included.
    pub fn total_occurrences(&self) -> u64 {
        self.sequence_counts.iter().sum()
    }

    /// Get the number of tokens across the corpus, duplicates included.
    pub fn total_tokens(&self) -> u64 {
        self.sequences
            .iter()
            .zip(self.sequence_counts.iter())
            .map(|(sequence, &count)| sequence.len() as u64 * count)
            .sum()
    }

    /// Get a reference to the sequences.
    pub fn sequences(&self) -> &[Vec<u32>] {
        &self.sequences
    }

    /// Get a reference to the sequence counts.
    pub fn sequence_counts(&self) -> &[u64] {
        &self.sequence_counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_text() {
        let mut counter = PairCounter::new();
        counter.add_text("abc");

        assert_eq!(counter.sequence_count(), 1);
        assert_eq!(counter.sequences()[0].as_slice(), &[97, 98, 99]);
    }

    #[test]
    fn test_add_text_multibyte() {
        let mut counter = PairCounter::new();
        counter.add_text("é");

        assert_eq!(counter.sequences()[0].as_slice(), &[0xc3, 0xa9]);
    }

    #[test]
    fn test_duplicate_texts_share_a_sequence() {
        let counter = PairCounter::from_corpus(&["ab", "cd", "ab", "ab"]);

        assert_eq!(counter.sequence_count(), 2);
        assert_eq!(counter.sequence_counts(), &[3, 1]);
        assert_eq!(counter.total_occurrences(), 4);
        assert_eq!(counter.total_tokens(), 8);
    }

    #[test]
    fn test_count_pairs_sequential() {
        let counter = PairCounter::from_corpus(&["ab", "bc"]);

        let pairs = counter.count_pairs_sequential();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs.get(&(97, 98)), Some(&1));
        assert_eq!(pairs.get(&(98, 99)), Some(&1));
    }

    #[test]
    fn test_count_pairs_with_frequency() {
        let counter = PairCounter::from_corpus(&["ab", "ab", "ab"]);

        let pairs = counter.count_pairs_sequential();
        assert_eq!(pairs.get(&(97, 98)), Some(&3));
    }

    #[test]
    fn test_count_pairs_overlapping() {
        let counter = PairCounter::from_corpus(&["aaab"]);

        let pairs = counter.count_pairs_sequential();
        assert_eq!(pairs.get(&(97, 97)), Some(&2));
        assert_eq!(pairs.get(&(97, 98)), Some(&1));
    }

    #[test]
    fn test_count_pairs_parallel_matches_sequential() {
        let counter = PairCounter::from_corpus(&["abc", "bcd", "cde", "abc", "x", ""]);

        let parallel = counter.count_pairs_parallel();
        let sequential = counter.count_pairs_sequential();
        assert_eq!(parallel, sequential);
        // (a,b):2, (b,c):3, (c,d):2, (d,e):1
        assert_eq!(parallel.get(&(97, 98)), Some(&2));
        assert_eq!(parallel.get(&(98, 99)), Some(&3));
        assert_eq!(parallel.get(&(99, 100)), Some(&2));
        assert_eq!(parallel.get(&(100, 101)), Some(&1));
    }

    #[test]
    fn test_merge_pair_in_sequences() {
        let mut counter = PairCounter::from_corpus(&["aaab", "ba", "a"]);
        counter.merge_pair_in_sequences((97, 97), 256);

        assert_eq!(counter.sequences()[0].as_slice(), &[256, 97, 98]);
        assert_eq!(counter.sequences()[1].as_slice(), &[98, 97]);
        assert_eq!(counter.sequences()[2].as_slice(), &[97]);
    }

    #[test]
    fn test_duplicate_after_merge_keeps_original_key() {
        let mut counter = PairCounter::from_corpus(&["aa"]);
        counter.merge_pair_in_sequences((97, 97), 256);
        counter.add_text("aa");

        assert_eq!(counter.sequence_count(), 1);
        assert_eq!(counter.sequence_counts(), &[2]);
    }

    #[test]
    fn test_apply_merges() {
        let mut merges = MergeRules::new();
        merges.add_merge((97, 97));
        merges.add_merge((256, 98));

        let mut counter = PairCounter::from_corpus(&["aabaab", "xab"]);
        counter.apply_merges(&merges);

        assert_eq!(counter.sequences()[0].as_slice(), &[257, 257]);
        assert_eq!(counter.sequences()[1].as_slice(), &[120, 97, 98]);
    }
}
