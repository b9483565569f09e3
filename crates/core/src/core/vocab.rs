//! Vocabulary storage and lookup.
//!
//! A vocabulary is two coupled tables that always grow together: the merge
//! table (pair -> token ID) and the byte table (token ID -> raw bytes). The
//! 256 single-byte tokens are present from construction.

use crate::core::merges::{MergeRules, Pair, BASE_VOCAB_SIZE};
use crate::error::{Result, TokenizerError};

/// Reverse mapping: token ID -> the raw bytes it stands for.
pub type ByteTable = Vec<Vec<u8>>;

/// Vocabulary with the merge table and the byte table.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    /// Learned merge rules
    merges: MergeRules,
    /// Byte table, indexed by token ID
    bytes: ByteTable,
}

impl Vocabulary {
    /// Create a vocabulary holding only the 256 base byte tokens.
    pub fn new() -> Self {
        Self::with_capacity(BASE_VOCAB_SIZE)
    }

    /// Create a base vocabulary with room for `capacity` tokens in total.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(BASE_VOCAB_SIZE);
        let mut bytes = ByteTable::with_capacity(capacity);
        bytes.extend((0..=u8::MAX).map(|b| vec![b]));

        Self {
            merges: MergeRules::with_capacity(capacity - BASE_VOCAB_SIZE),
            bytes,
        }
    }

    /// Learn a merge of `pair` and return the new token ID.
    ///
    /// The byte string of the new token is computed right away from its two
    /// constituents. A pair that is already learned keeps its ID. Fails with
    /// [`TokenizerError::InvalidMerge`] if either constituent is not a token yet.
    pub fn add_merge(&mut self, pair: Pair) -> Result<u32> {
        if let Some(id) = self.merges.get(pair) {
            return Ok(id);
        }

        let merged = match (self.token_bytes(pair.0), self.token_bytes(pair.1)) {
            (Some(left), Some(right)) => [left, right].concat(),
            _ => {
                return Err(TokenizerError::InvalidMerge(format!(
                    "pair ({}, {}) refers to a token that does not exist (vocabulary size {})",
                    pair.0,
                    pair.1,
                    self.len()
                )))
            }
        };

        let id = self.merges.add_merge(pair);
        debug_assert_eq!(id as usize, self.bytes.len());
        self.bytes.push(merged);

        Ok(id)
    }

    /// Get the token ID produced by merging `pair`.
    #[inline]
    pub fn merge_id(&self, pair: Pair) -> Option<u32> {
        self.merges.get(pair)
    }

    /// Get the raw bytes of a token.
    #[inline]
    pub fn token_bytes(&self, id: u32) -> Option<&[u8]> {
        self.bytes.get(id as usize).map(Vec::as_slice)
    }

    /// Get the learned merge rules.
    #[inline]
    pub fn merges(&self) -> &MergeRules {
        &self.merges
    }

    /// Number of learned merges.
    #[inline]
    pub fn num_merges(&self) -> usize {
        self.merges.len()
    }

    /// Get the size of the vocabulary, base bytes included.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false: the base bytes are present from construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_vocab() {
        let vocab = Vocabulary::new();

        assert_eq!(vocab.len(), 256);
        assert_eq!(vocab.num_merges(), 0);
        assert!(!vocab.is_empty());
        assert_eq!(vocab.token_bytes(0), Some(&[0u8][..]));
        assert_eq!(vocab.token_bytes(97), Some(&b"a"[..]));
        assert_eq!(vocab.token_bytes(255), Some(&[255u8][..]));
        assert_eq!(vocab.token_bytes(256), None);
    }

    #[test]
    fn test_add_merge_builds_bytes() {
        let mut vocab = Vocabulary::new();
        let aa = vocab.add_merge((97, 97)).unwrap();
        let aab = vocab.add_merge((aa, 98)).unwrap();
        let aabaa = vocab.add_merge((aab, aa)).unwrap();

        assert_eq!((aa, aab, aabaa), (256, 257, 258));
        assert_eq!(vocab.token_bytes(aa), Some(&b"aa"[..]));
        assert_eq!(vocab.token_bytes(aab), Some(&b"aab"[..]));
        assert_eq!(vocab.token_bytes(aabaa), Some(&b"aabaa"[..]));
        assert_eq!(vocab.len(), 259);
        assert_eq!(vocab.merge_id((aa, 98)), Some(257));
    }

    #[test]
    fn test_add_duplicate_merge() {
        let mut vocab = Vocabulary::new();
        let id1 = vocab.add_merge((1, 2)).unwrap();
        let id2 = vocab.add_merge((1, 2)).unwrap();

        assert_eq!(id1, id2);
        assert_eq!(vocab.len(), 257);
    }

    #[test]
    fn test_add_merge_unknown_constituent() {
        let mut vocab = Vocabulary::new();
        let err = vocab.add_merge((97, 256)).unwrap_err();

        assert!(matches!(err, TokenizerError::InvalidMerge(_)));
        assert_eq!(vocab.len(), 256);
        assert!(vocab.merges().is_empty());
    }

    #[test]
    fn test_with_capacity_never_below_base() {
        let vocab = Vocabulary::with_capacity(10);
        assert_eq!(vocab.len(), 256);
    }
}
