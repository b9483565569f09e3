//! Encoding and decoding with a trained vocabulary.
//!
//! - Byte-level: every UTF-8 byte is a base token, learned merges on top
//! - Error modes: how decoding treats invalid UTF-8

pub mod byte_level;
pub mod mode;

pub use byte_level::ByteLevelEncoder;
pub use mode::ErrorMode;
