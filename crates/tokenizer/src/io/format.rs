//! Format definitions for tokenizer serialization.
//!
//! Only the merge list is stored, in learning order. The byte table is a
//! function of the merges and is rebuilt on load.

use serde::{Deserialize, Serialize};

/// File name used inside a tokenizer directory.
pub const TOKENIZER_FILE: &str = "tokenizer.json";

/// A single learned merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedMerge {
    /// The pair of token IDs being merged
    pub pair: [u32; 2],
    /// The token ID created by this merge
    pub id: u32,
}

/// Tokenizer configuration in serialized format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedConfig {
    pub max_vocab_num: usize,
}

/// Complete tokenizer serialization format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializedTokenizer {
    /// Format version
    pub version: String,
    /// Configuration
    pub config: SerializedConfig,
    /// Merge rules, in the order they were learned
    pub merges: Vec<SerializedMerge>,
}
