//! Byte-level BPE encoding.
//!
//! Text is turned into its UTF-8 bytes, one base token per byte, and learned
//! merges are applied in the order they were learned until no adjacent pair
//! matches a rule.

use super::mode::ErrorMode;
use crate::core::pairs::merge_pair;
use crate::core::vocab::Vocabulary;
use crate::{Result, TokenizerError};

/// Byte-level BPE encoder and decoder.
///
/// Borrows the vocabulary read-only, so any number of encoders can share a
/// trained vocabulary while nothing is allowed to modify it.
#[derive(Debug, Clone, Copy)]
pub struct ByteLevelEncoder<'a> {
    vocab: &'a Vocabulary,
}

impl<'a> ByteLevelEncoder<'a> {
    /// Create an encoder over a vocabulary.
    pub fn new(vocab: &'a Vocabulary) -> Self {
        Self { vocab }
    }

    /// Encode text to token IDs.
    ///
    /// Never fails: every byte has a base token. On each step the adjacent
    /// pair with the lowest merge ID is merged everywhere it occurs, which
    /// replays merges in training order rather than by frequency in `text`.
    pub fn encode(&self, text: &str) -> Vec<u32> {
        let mut tokens: Vec<u32> = text.bytes().map(u32::from).collect();

        let merges = self.vocab.merges();
        if merges.is_empty() {
            return tokens;
        }

        while let Some((pair, id)) = merges.next_merge(&tokens) {
            tokens = merge_pair(&tokens, pair, id);
        }

        tokens
    }

    /// Concatenate the raw bytes of every token in `ids`.
    pub fn decode_bytes(&self, ids: &[u32]) -> Result<Vec<u8>> {
        let mut bytes = Vec::with_capacity(ids.len() * 2);

        for &id in ids {
            let token = self
                .vocab
                .token_bytes(id)
                .ok_or(TokenizerError::UnknownTokenId(id))?;
            bytes.extend_from_slice(token);
        }

        Ok(bytes)
    }

    /// Decode token IDs back to text, handling invalid UTF-8 per `mode`.
    pub fn decode(&self, ids: &[u32], mode: ErrorMode) -> Result<String> {
        let bytes = self.decode_bytes(ids)?;

        let text = match mode {
            ErrorMode::Strict => String::from_utf8(bytes)?,
            ErrorMode::Replace => String::from_utf8_lossy(&bytes).into_owned(),
            ErrorMode::Ignore => bytes.utf8_chunks().map(|chunk| chunk.valid()).collect(),
        };

        Ok(text)
    }
}
