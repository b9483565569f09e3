//! Naivebpe-tokenizer - High-level tokenizer API
//!
//! This crate ties the vocabulary, the trainer and the byte-level encoder
//! into a single `Tokenizer`.
//!
//! # Features
//!
//! - Builder for tokenizer configuration
//! - `fit` on a corpus of strings, continuing if called again
//! - Priority-ordered `encode` and `decode` with strict/ignore/replace handling
//! - Saving and loading the merge list as JSON
//!
//! # Example
//!
//! ```rust
//! use naivebpe_tokenizer::{ErrorMode, Tokenizer};
//!
//! let mut tokenizer = Tokenizer::builder().max_vocab_num(257).build();
//! tokenizer.fit(&["aaab"]);
//!
//! let ids = tokenizer.encode("aaab");
//! assert_eq!(ids, vec![256, 97, 98]);
//!
//! let text = tokenizer.decode(&ids, ErrorMode::Strict)?;
//! assert_eq!(text, "aaab");
//! # Ok::<(), naivebpe_tokenizer::TokenizerError>(())
//! ```

// Re-export core types
pub use naivebpe_core::{ErrorMode, Result, TokenizerError, Vocabulary};
pub use naivebpe_training::TrainingSummary;

// Tokenizer API
pub mod tokenizer;
pub use tokenizer::{Tokenizer, TokenizerBuilder, TokenizerConfig, DEFAULT_MAX_VOCAB_NUM};

// IO/Serialization
pub mod io;
pub use io::{TokenizerLoader, TokenizerSaver};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
