//! Main tokenizer implementation.
//!
//! This module provides the high-level `Tokenizer` struct that owns a
//! vocabulary, trains it with `fit`, and encodes/decodes with it.

use naivebpe_core::{
    ByteLevelEncoder, ErrorMode, Result, TokenizerError, Vocabulary, BASE_VOCAB_SIZE,
};
use naivebpe_training::{BpeTrainer, TrainingConfig, TrainingSummary};
use std::path::Path;
use std::str::FromStr;

/// Default target vocabulary size: the base bytes plus one merge.
pub const DEFAULT_MAX_VOCAB_NUM: usize = BASE_VOCAB_SIZE + 1;

/// Configuration for building a tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenizerConfig {
    /// Target vocabulary size; values below 256 are raised to 256
    pub max_vocab_num: usize,
    /// Count pairs in parallel during `fit`
    pub parallel: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            max_vocab_num: DEFAULT_MAX_VOCAB_NUM,
            parallel: false,
        }
    }
}

/// Builder for creating a tokenizer.
#[derive(Debug, Clone, Default)]
pub struct TokenizerBuilder {
    config: TokenizerConfig,
}

impl TokenizerBuilder {
    /// Create a new tokenizer builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target vocabulary size.
    pub fn max_vocab_num(mut self, size: usize) -> Self {
        self.config.max_vocab_num = size;
        self
    }

    /// Count pairs in parallel during training.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.config.parallel = parallel;
        self
    }

    /// Build the tokenizer.
    pub fn build(self) -> Tokenizer {
        Tokenizer::new(self.config)
    }
}

/// Byte-level BPE tokenizer.
///
/// Owns its vocabulary: [`Tokenizer::fit`] needs `&mut self`, while encoding
/// and decoding only borrow it.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    /// Vocabulary
    vocab: Vocabulary,
    /// Configuration
    config: TokenizerConfig,
}

impl Tokenizer {
    /// Create a new, untrained tokenizer.
    pub fn new(config: TokenizerConfig) -> Self {
        Self {
            vocab: Vocabulary::new(),
            config: Self::clamp_config(config),
        }
    }

    fn clamp_config(mut config: TokenizerConfig) -> TokenizerConfig {
        if config.max_vocab_num < BASE_VOCAB_SIZE {
            log::debug!(
                "max_vocab_num {} is below the {} base tokens, using {}",
                config.max_vocab_num,
                BASE_VOCAB_SIZE,
                BASE_VOCAB_SIZE
            );
            config.max_vocab_num = BASE_VOCAB_SIZE;
        }
        config
    }

    /// Create an untrained tokenizer with a target vocabulary size.
    pub fn with_max_vocab_num(max_vocab_num: usize) -> Self {
        Self::new(TokenizerConfig {
            max_vocab_num,
            ..Default::default()
        })
    }

    /// Create a tokenizer from an already built vocabulary.
    pub fn from_vocab(vocab: Vocabulary, max_vocab_num: usize) -> Self {
        let config = Self::clamp_config(TokenizerConfig {
            max_vocab_num,
            ..Default::default()
        });
        if vocab.len() > config.max_vocab_num {
            log::warn!(
                "Vocabulary has {} tokens, more than max_vocab_num {}",
                vocab.len(),
                config.max_vocab_num
            );
        }

        Self { vocab, config }
    }

    /// Create a tokenizer builder.
    pub fn builder() -> TokenizerBuilder {
        TokenizerBuilder::new()
    }

    /// Learn merges from a corpus until the vocabulary reaches
    /// `max_vocab_num` or no pairs are left.
    ///
    /// Never fails. Calling `fit` again keeps the merges already learned and
    /// continues from there.
    pub fn fit<S: AsRef<str>>(&mut self, corpus: &[S]) -> TrainingSummary {
        let trainer = BpeTrainer::new(TrainingConfig {
            vocab_size: self.config.max_vocab_num,
            parallel: self.config.parallel,
        });

        trainer.train(&mut self.vocab, corpus)
    }

    /// Get an encoder borrowing this tokenizer's vocabulary.
    pub fn encoder(&self) -> ByteLevelEncoder<'_> {
        ByteLevelEncoder::new(&self.vocab)
    }

    /// Encode text to token IDs.
    pub fn encode(&self, text: &str) -> Vec<u32> {
        self.encoder().encode(text)
    }

    /// Decode token IDs back to text.
    ///
    /// Fails with [`TokenizerError::UnknownTokenId`] for an ID outside the
    /// vocabulary, and with [`TokenizerError::Decode`] for invalid UTF-8 in
    /// [`ErrorMode::Strict`].
    pub fn decode(&self, ids: &[u32], mode: ErrorMode) -> Result<String> {
        self.encoder().decode(ids, mode)
    }

    /// Decode with the error mode given by name (`strict`, `ignore`, `replace`).
    pub fn decode_with(&self, ids: &[u32], mode: &str) -> Result<String> {
        let mode = ErrorMode::from_str(mode)?;
        self.decode(ids, mode)
    }

    /// Get the raw bytes of a token.
    pub fn token_bytes(&self, id: u32) -> Option<&[u8]> {
        self.vocab.token_bytes(id)
    }

    /// Get the vocabulary size.
    pub fn vocab_size(&self) -> usize {
        self.vocab.len()
    }

    /// Get the target vocabulary size.
    pub fn max_vocab_num(&self) -> usize {
        self.config.max_vocab_num
    }

    /// Get the configuration.
    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Get a reference to the vocabulary.
    pub fn vocab(&self) -> &Vocabulary {
        &self.vocab
    }

    /// Save the tokenizer to a directory.
    ///
    /// # Arguments
    /// * `path` - Directory path to save to
    pub fn save(&self, path: &Path) -> Result<()> {
        use crate::io::save::TokenizerSaver;

        TokenizerSaver::new(&self.vocab, self.config.max_vocab_num).save(path)
    }

    /// Serialize the tokenizer to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        use crate::io::save::TokenizerSaver;

        TokenizerSaver::new(&self.vocab, self.config.max_vocab_num).to_json()
    }

    /// Load a tokenizer from a directory.
    ///
    /// # Arguments
    /// * `path` - Directory path to load from
    pub fn load(path: &Path) -> Result<Self> {
        use crate::io::load::TokenizerLoader;

        let (vocab, max_vocab_num) = TokenizerLoader::load(path)?;
        Ok(Self::from_vocab(vocab, max_vocab_num))
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(TokenizerConfig::default())
    }
}

impl FromStr for Tokenizer {
    type Err = TokenizerError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        use crate::io::load::TokenizerLoader;

        let (vocab, max_vocab_num) = TokenizerLoader::from_json(s)?;
        Ok(Self::from_vocab(vocab, max_vocab_num))
    }
}
