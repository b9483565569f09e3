//! Core BPE algorithm implementation.
//!
//! This module contains the fundamental data structures and algorithms
//! for byte-pair encoding, independent of training or the tokenizer API.

pub mod merges;
pub mod pairs;
pub mod priority;
pub mod vocab;

pub use merges::{MergeMap, MergeRules, Pair, BASE_VOCAB_SIZE};
pub use pairs::{count_pairs, count_pairs_into, merge_pair, PairCounts};
pub use priority::{best_candidate, MergeCandidate};
pub use vocab::{ByteTable, Vocabulary};
