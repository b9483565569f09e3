//! Training infrastructure for BPE tokenizers.
//!
//! This module provides the training loop and the corpus-wide pair
//! counting it is built on.

pub mod counter;
pub mod trainer;

pub use counter::PairCounter;
pub use trainer::{BpeTrainer, TrainingConfig, TrainingSummary};
