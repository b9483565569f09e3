//! Naivebpe-core - Core byte-level BPE algorithm implementation
//!
//! This crate provides the fundamental data structures and algorithms for
//! byte-level byte-pair encoding (BPE), independent of how a vocabulary is
//! trained or stored.
//!
//! # Features
//!
//! - Vocabulary made of a merge table (pair -> ID) and a byte table (ID -> bytes)
//! - Pair counting and single-pass, non-overlapping pair merging
//! - Deterministic merge selection (count, then greatest pair)
//! - Priority-ordered encoding and decoding with selectable UTF-8 error handling
//!
//! # Example
//!
//! ```rust
//! use naivebpe_core::{ByteLevelEncoder, ErrorMode, Vocabulary};
//!
//! let mut vocab = Vocabulary::new();
//! let aa = vocab.add_merge((b'a' as u32, b'a' as u32))?;
//!
//! let encoder = ByteLevelEncoder::new(&vocab);
//! let ids = encoder.encode("aaab");
//! assert_eq!(ids, vec![aa, 97, 98]);
//! assert_eq!(encoder.decode(&ids, ErrorMode::Strict)?, "aaab");
//! # Ok::<(), naivebpe_core::TokenizerError>(())
//! ```

pub mod error;
pub use error::{Result, TokenizerError};

// Core BPE algorithm modules
pub mod core;
pub use self::core::{
    best_candidate, count_pairs, count_pairs_into, merge_pair, ByteTable, MergeCandidate,
    MergeMap, MergeRules, Pair, PairCounts, Vocabulary, BASE_VOCAB_SIZE,
};

// Encoding and decoding
pub mod encoding;
pub use encoding::{ByteLevelEncoder, ErrorMode};
