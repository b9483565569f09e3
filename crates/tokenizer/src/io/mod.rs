//! Serialization and deserialization for trained tokenizers.
//!
//! A tokenizer is stored as its merge list in learning order, as JSON.

pub mod format;
pub mod load;
pub mod save;

pub use format::{SerializedTokenizer, TOKENIZER_FILE};
pub use load::TokenizerLoader;
pub use save::TokenizerSaver;
