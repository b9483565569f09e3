//! Naivebpe-training - BPE training infrastructure
//!
//! This crate learns byte-level BPE merge rules from a corpus of strings.
//!
//! # Features
//!
//! - Corpus-wide pair counting, sequential or parallel with rayon
//! - Deterministic merge selection: highest count, ties to the greater pair
//! - Training that extends an existing vocabulary instead of restarting
//!
//! # Example
//!
//! ```rust
//! use naivebpe_core::Vocabulary;
//! use naivebpe_training::{BpeTrainer, TrainingConfig};
//!
//! let trainer = BpeTrainer::new(TrainingConfig {
//!     vocab_size: 257,
//!     ..Default::default()
//! });
//!
//! let mut vocab = Vocabulary::new();
//! let summary = trainer.train(&mut vocab, &["aaab"]);
//! assert_eq!(summary.merges_learned, 1);
//! assert_eq!(vocab.merge_id((97, 97)), Some(256));
//! ```

pub use naivebpe_core::{Result, TokenizerError};

// Training infrastructure
pub mod training;
pub use training::{BpeTrainer, PairCounter, TrainingConfig, TrainingSummary};
