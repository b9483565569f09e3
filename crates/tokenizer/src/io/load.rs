//! Load functionality for saved tokenizers.

use super::format::{SerializedTokenizer, TOKENIZER_FILE};
use naivebpe_core::{Result, TokenizerError, Vocabulary};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Tokenizer loader - handles loading trained models.
pub struct TokenizerLoader;

impl TokenizerLoader {
    /// Load a tokenizer from `path/tokenizer.json`.
    ///
    /// Returns the rebuilt vocabulary and the saved `max_vocab_num`.
    pub fn load(path: &Path) -> Result<(Vocabulary, usize)> {
        let file_path = path.join(TOKENIZER_FILE);
        let file = File::open(&file_path).map_err(|e| TokenizerError::io(&file_path, e))?;

        let reader = BufReader::new(file);
        let serialized: SerializedTokenizer = serde_json::from_reader(reader)
            .map_err(|e| TokenizerError::Load(format!("Failed to deserialize tokenizer: {}", e)))?;

        let loaded = Self::deserialize(serialized)?;
        log::info!(
            "Loaded {} merges from {}",
            loaded.0.num_merges(),
            file_path.display()
        );

        Ok(loaded)
    }

    /// Load a tokenizer from a JSON string.
    pub fn from_json(json: &str) -> Result<(Vocabulary, usize)> {
        let serialized: SerializedTokenizer = serde_json::from_str(json)
            .map_err(|e| TokenizerError::Load(format!("Failed to deserialize tokenizer: {}", e)))?;

        Self::deserialize(serialized)
    }

    /// Rebuild the vocabulary by replaying merges in order.
    ///
    /// IDs must run 256, 257, ... and each pair must refer to earlier tokens.
    fn deserialize(data: SerializedTokenizer) -> Result<(Vocabulary, usize)> {
        let mut vocab = Vocabulary::with_capacity(256 + data.merges.len());

        for (index, merge) in data.merges.iter().enumerate() {
            let expected = vocab.len() as u32;
            if merge.id != expected {
                return Err(TokenizerError::InvalidMerge(format!(
                    "merge #{} has id {}, expected {}",
                    index, merge.id, expected
                )));
            }

            let pair = (merge.pair[0], merge.pair[1]);
            if vocab.merges().contains(pair) {
                return Err(TokenizerError::InvalidMerge(format!(
                    "pair ({}, {}) appears more than once",
                    pair.0, pair.1
                )));
            }

            vocab.add_merge(pair)?;
        }

        Ok((vocab, data.config.max_vocab_num))
    }
}
