//! BPE trainer implementation.
//!
//! Greedy byte-level training: count every adjacent pair over the whole
//! corpus, merge the winner everywhere, repeat until the vocabulary reaches
//! its target size or no pairs are left.

use super::counter::PairCounter;
use naivebpe_core::{best_candidate, Vocabulary, BASE_VOCAB_SIZE};

/// Configuration for BPE training.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainingConfig {
    /// Target vocabulary size, base bytes included
    pub vocab_size: usize,
    /// Whether to count pairs with rayon
    pub parallel: bool,
}

impl TrainingConfig {
    /// Target size, never below the 256 base tokens.
    pub fn target_size(&self) -> usize {
        self.vocab_size.max(BASE_VOCAB_SIZE)
    }
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            vocab_size: BASE_VOCAB_SIZE + 1,
            parallel: false,
        }
    }
}

/// What a training run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainingSummary {
    /// Merges learned during this run
    pub merges_learned: usize,
    /// Vocabulary size after the run
    pub vocab_size: usize,
    /// True if training stopped because no pairs were left
    pub exhausted: bool,
}

/// BPE trainer.
///
/// Learns merge rules into an existing [`Vocabulary`]. A vocabulary that
/// already holds merges is extended rather than reset: the corpus is first
/// brought up to date with the known merges, then training continues.
#[derive(Debug, Clone, Default)]
pub struct BpeTrainer {
    /// Configuration
    config: TrainingConfig,
}

impl BpeTrainer {
    /// Create a new BPE trainer with the given configuration.
    pub fn new(config: TrainingConfig) -> Self {
        Self { config }
    }

    /// Create a new BPE trainer with a target vocabulary size.
    pub fn with_vocab_size(vocab_size: usize) -> Self {
        Self::new(TrainingConfig {
            vocab_size,
            ..Default::default()
        })
    }

    /// Get the configuration.
    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// Train on a corpus, adding merges to `vocab`.
    ///
    /// Never fails. An empty corpus, or one made only of strings shorter than
    /// two bytes, leaves the vocabulary untouched.
    pub fn train<S: AsRef<str>>(&self, vocab: &mut Vocabulary, corpus: &[S]) -> TrainingSummary {
        let target = self.config.target_size();
        let start_size = vocab.len();

        let mut counter = PairCounter::from_corpus(corpus);
        if !vocab.merges().is_empty() {
            log::debug!(
                "Replaying {} known merges over {} sequences",
                vocab.num_merges(),
                counter.sequence_count()
            );
            counter.apply_merges(vocab.merges());
        }

        log::info!(
            "Training on {} strings ({} distinct, {} tokens), vocab {} -> target {}",
            counter.total_occurrences(),
            counter.sequence_count(),
            counter.total_tokens(),
            start_size,
            target
        );

        let mut exhausted = false;

        // Main training loop: iteratively merge most frequent pairs
        while vocab.len() < target {
            let pair_counts = if self.config.parallel {
                counter.count_pairs_parallel()
            } else {
                counter.count_pairs_sequential()
            };

            let candidate = match best_candidate(&pair_counts) {
                Some(c) => c,
                None => {
                    exhausted = true;
                    break;
                }
            };

            if vocab.merges().contains(candidate.pair) {
                log::warn!(
                    "Pair {:?} is already a learned merge, stopping",
                    candidate.pair
                );
                break;
            }

            let new_token_id = match vocab.add_merge(candidate.pair) {
                Ok(id) => id,
                Err(err) => {
                    log::warn!("Stopping training: {}", err);
                    break;
                }
            };

            log::debug!(
                "Merge {:?} -> {} (count {})",
                candidate.pair,
                new_token_id,
                candidate.count
            );

            counter.merge_pair_in_sequences(candidate.pair, new_token_id);
        }

        let summary = TrainingSummary {
            merges_learned: vocab.len() - start_size,
            vocab_size: vocab.len(),
            exhausted,
        };

        log::info!(
            "Training finished: {} merges learned, vocab size {}{}",
            summary.merges_learned,
            summary.vocab_size,
            if exhausted { " (no pairs left)" } else { "" }
        );

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn learned(vocab: &Vocabulary) -> Vec<((u32, u32), u32)> {
        vocab.merges().iter().collect()
    }

    #[test]
    fn test_single_merge() {
        let mut vocab = Vocabulary::new();
        let summary = BpeTrainer::with_vocab_size(257).train(&mut vocab, &["aaab"]);

        assert_eq!(learned(&vocab), vec![((97, 97), 256)]);
        assert_eq!(vocab.token_bytes(256), Some(&b"aa"[..]));
        assert_eq!(
            summary,
            TrainingSummary {
                merges_learned: 1,
                vocab_size: 257,
                exhausted: false,
            }
        );
    }

    #[test]
    fn test_tie_break_prefers_greater_pair() {
        // (97,98) and (99,100) both occur once: (99,100) wins.
        let mut vocab = Vocabulary::new();
        BpeTrainer::with_vocab_size(257).train(&mut vocab, &["ab", "cd"]);

        assert_eq!(learned(&vocab), vec![((99, 100), 256)]);
    }

    #[test]
    fn test_tie_break_on_second_id() {
        // (97,98) and (97,99) tie on count and first id.
        let mut vocab = Vocabulary::new();
        BpeTrainer::with_vocab_size(257).train(&mut vocab, &["ab", "ac"]);

        assert_eq!(learned(&vocab), vec![((97, 99), 256)]);
    }

    #[test]
    fn test_counts_aggregate_across_corpus() {
        // (120,121) is the only pair seen in both strings.
        let mut vocab = Vocabulary::new();
        BpeTrainer::with_vocab_size(257).train(&mut vocab, &["xyaa", "xybb"]);

        assert_eq!(learned(&vocab), vec![((120, 121), 256)]);
    }

    #[test]
    fn test_merges_build_on_each_other() {
        let mut vocab = Vocabulary::new();
        let summary = BpeTrainer::with_vocab_size(1000).train(&mut vocab, &["aaaa"]);

        // "aaaa" -> [aa, aa] -> [aaaa], then nothing is left to pair.
        assert_eq!(learned(&vocab), vec![((97, 97), 256), ((256, 256), 257)]);
        assert_eq!(vocab.token_bytes(257), Some(&b"aaaa"[..]));
        assert!(summary.exhausted);
        assert_eq!(summary.vocab_size, 258);
    }

    #[test]
    fn test_empty_corpus() {
        let mut vocab = Vocabulary::new();
        let empty: [&str; 0] = [];
        let summary = BpeTrainer::with_vocab_size(300).train(&mut vocab, &empty);

        assert_eq!(vocab.len(), 256);
        assert!(summary.exhausted);
        assert_eq!(summary.merges_learned, 0);
    }

    #[test]
    fn test_short_strings_contribute_nothing() {
        let mut vocab = Vocabulary::new();
        BpeTrainer::with_vocab_size(300).train(&mut vocab, &["", "a", "b"]);

        assert_eq!(vocab.len(), 256);
    }

    #[test]
    fn test_target_below_base_is_clamped() {
        let config = TrainingConfig {
            vocab_size: 10,
            parallel: false,
        };
        assert_eq!(config.target_size(), 256);

        let mut vocab = Vocabulary::new();
        let summary = BpeTrainer::new(config).train(&mut vocab, &["aaaa"]);
        assert_eq!(vocab.len(), 256);
        assert!(!summary.exhausted);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let corpus = [
            "the quick brown fox",
            "jumps over the lazy dog",
            "the the the",
            "你好啊，你好世界",
        ];

        let mut sequential = Vocabulary::new();
        BpeTrainer::new(TrainingConfig {
            vocab_size: 300,
            parallel: false,
        })
        .train(&mut sequential, &corpus);

        let mut parallel = Vocabulary::new();
        BpeTrainer::new(TrainingConfig {
            vocab_size: 300,
            parallel: true,
        })
        .train(&mut parallel, &corpus);

        assert_eq!(learned(&sequential), learned(&parallel));
    }

    #[test]
    fn test_retrain_continues_from_current_state() {
        let corpus = ["hello hello world", "low lower lowest"];

        let mut once = Vocabulary::new();
        BpeTrainer::with_vocab_size(270).train(&mut once, &corpus);

        let mut twice = Vocabulary::new();
        BpeTrainer::with_vocab_size(262).train(&mut twice, &corpus);
        let summary = BpeTrainer::with_vocab_size(270).train(&mut twice, &corpus);

        assert_eq!(learned(&once), learned(&twice));
        assert_eq!(summary.merges_learned, twice.len() - 262);
    }

    #[test]
    fn test_retrain_never_duplicates_pairs() {
        let mut vocab = Vocabulary::new();
        BpeTrainer::with_vocab_size(258).train(&mut vocab, &["abab"]);
        BpeTrainer::with_vocab_size(262).train(&mut vocab, &["ababab", "abc"]);

        let mut seen = std::collections::HashSet::new();
        for (pair, _) in vocab.merges().iter() {
            assert!(seen.insert(pair), "pair {pair:?} learned twice");
        }
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn train(corpus: &[String], vocab_size: usize) -> (Vocabulary, TrainingSummary) {
        let mut vocab = Vocabulary::new();
        let summary = BpeTrainer::with_vocab_size(vocab_size).train(&mut vocab, corpus);
        (vocab, summary)
    }

    proptest! {
        /// Vocabulary size is min(target, 256 + merges available).
        #[test]
        fn prop_vocab_size_bound(
            corpus in prop::collection::vec("[a-d]{0,12}", 0..6),
            vocab_size in 0_usize..300
        ) {
            let (vocab, summary) = train(&corpus, vocab_size);
            let (unbounded, _) = train(&corpus, 10_000);

            prop_assert_eq!(vocab.len(), vocab_size.max(256).min(unbounded.len()));
            prop_assert_eq!(summary.vocab_size, vocab.len());
        }

        /// A larger target never yields a smaller vocabulary, and the smaller
        /// run's merges are a prefix of the larger run's.
        #[test]
        fn prop_vocab_size_monotonic(
            corpus in prop::collection::vec("[a-c ]{0,16}", 1..5),
            small in 256_usize..270,
            extra in 0_usize..10
        ) {
            let (a, _) = train(&corpus, small);
            let (b, _) = train(&corpus, small + extra);

            prop_assert!(a.len() <= b.len());
            let a_merges: Vec<_> = a.merges().iter().collect();
            let b_merges: Vec<_> = b.merges().iter().take(a_merges.len()).collect();
            prop_assert_eq!(a_merges, b_merges);
        }

        /// Every merge's bytes are the concatenation of its constituents'.
        #[test]
        fn prop_byte_table_consistent(corpus in prop::collection::vec("\\PC{0,10}", 0..4)) {
            let (vocab, _) = train(&corpus, 320);

            for (pair, id) in vocab.merges().iter() {
                prop_assert!(pair.0 < id && pair.1 < id);
                let mut expected = vocab.token_bytes(pair.0).unwrap().to_vec();
                expected.extend_from_slice(vocab.token_bytes(pair.1).unwrap());
                prop_assert_eq!(vocab.token_bytes(id).unwrap(), expected.as_slice());
            }
        }
    }
}
