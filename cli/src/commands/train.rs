//! Train command implementation.

use clap::Parser;

/// Train command arguments.
#[derive(Parser)]
pub struct TrainCommand {
    /// Path to the training data file
    #[arg(short, long)]
    pub input: String,

    /// Output directory for the trained model
    #[arg(short, long)]
    pub output: String,

    /// Target vocabulary size (values below 256 are raised to 256)
    #[arg(short, long, default_value_t = 512)]
    pub vocab_size: usize,

    /// Count pairs in parallel
    #[arg(short, long, default_value_t = false)]
    pub parallel: bool,

    /// Treat the whole file as one document instead of one per line
    #[arg(short, long, default_value_t = false)]
    pub whole_file: bool,
}

use anyhow::{Context, Result as AnyhowResult};
use naivebpe_tokenizer::Tokenizer;
use std::fs;
use std::path::Path;
use std::time::Instant;

/// Split file contents into corpus documents.
fn corpus_from(data: &str, whole_file: bool) -> Vec<&str> {
    if whole_file {
        vec![data]
    } else {
        data.lines().filter(|line| !line.is_empty()).collect()
    }
}

pub fn run(cmd: TrainCommand) -> AnyhowResult<()> {
    println!("Training tokenizer...");
    println!("  Input: {}", cmd.input);
    println!("  Output: {}", cmd.output);
    println!("  Vocab size: {}", cmd.vocab_size);
    println!("  Parallel: {}", cmd.parallel);
    println!();

    // Read training data
    let start = Instant::now();
    let data = fs::read_to_string(&cmd.input)
        .with_context(|| format!("failed to read training data from {}", cmd.input))?;
    let corpus = corpus_from(&data, cmd.whole_file);
    println!(
        "Read {} bytes ({} documents) in {:.2}s",
        data.len(),
        corpus.len(),
        start.elapsed().as_secs_f64()
    );
    println!();

    let mut tokenizer = Tokenizer::builder()
        .max_vocab_num(cmd.vocab_size)
        .parallel(cmd.parallel)
        .build();

    // Train
    let start = Instant::now();
    let summary = tokenizer.fit(&corpus);
    println!("Training completed in {:.2}s", start.elapsed().as_secs_f64());
    println!("Merges learned: {}", summary.merges_learned);
    println!("Final vocab size: {}", summary.vocab_size);
    if summary.exhausted {
        println!("Stopped early: no mergeable pairs left");
    }
    println!();

    // Save model
    let output_path = Path::new(&cmd.output);
    tokenizer.save(output_path)?;
    println!("Model saved to {}", cmd.output);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corpus_per_line() {
        let corpus = corpus_from("aaab\n\nhello\r\nworld", false);
        assert_eq!(corpus, vec!["aaab", "hello", "world"]);
    }

    #[test]
    fn test_corpus_whole_file() {
        let corpus = corpus_from("a\nb\n", true);
        assert_eq!(corpus, vec!["a\nb\n"]);
    }
}
