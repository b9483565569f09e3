//! Save functionality for trained tokenizers.

use super::format::{SerializedConfig, SerializedMerge, SerializedTokenizer, TOKENIZER_FILE};
use naivebpe_core::{Result, TokenizerError, Vocabulary};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Tokenizer saver - handles saving trained models.
pub struct TokenizerSaver<'a> {
    /// Vocabulary reference
    vocab: &'a Vocabulary,
    /// Target vocabulary size
    max_vocab_num: usize,
}

impl<'a> TokenizerSaver<'a> {
    /// Create a new tokenizer saver.
    pub fn new(vocab: &'a Vocabulary, max_vocab_num: usize) -> Self {
        Self {
            vocab,
            max_vocab_num,
        }
    }

    /// Save the tokenizer to `path/tokenizer.json`, creating `path` if needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::create_dir_all(path).map_err(|e| TokenizerError::io(path, e))?;

        let file_path = path.join(TOKENIZER_FILE);
        let file = File::create(&file_path).map_err(|e| TokenizerError::io(&file_path, e))?;

        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &self.serialize())?;
        writer
            .flush()
            .map_err(|e| TokenizerError::io(&file_path, e))?;

        log::info!(
            "Saved {} merges to {}",
            self.vocab.num_merges(),
            file_path.display()
        );

        Ok(())
    }

    /// Serialize to a pretty-printed JSON string.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.serialize())
            .map_err(|e| TokenizerError::Save(format!("Failed to serialize tokenizer: {}", e)))
    }

    /// Serialize the tokenizer to a structure.
    pub(crate) fn serialize(&self) -> SerializedTokenizer {
        let merges = self
            .vocab
            .merges()
            .iter()
            .map(|(pair, id)| SerializedMerge {
                pair: [pair.0, pair.1],
                id,
            })
            .collect();

        SerializedTokenizer {
            version: env!("CARGO_PKG_VERSION").to_string(),
            config: SerializedConfig {
                max_vocab_num: self.max_vocab_num,
            },
            merges,
        }
    }
}
