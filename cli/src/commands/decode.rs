//! Decode command implementation.

use clap::Parser;
use naivebpe_core::ErrorMode;

/// Decode command arguments.
#[derive(Parser)]
pub struct DecodeCommand {
    /// Path to the trained tokenizer model
    #[arg(short, long)]
    pub tokenizer: String,

    /// Token IDs to decode (comma-separated)
    #[arg(short = 'k', long)]
    pub tokens: String,

    /// How to handle invalid UTF-8: strict, ignore or replace
    #[arg(short, long, default_value_t = ErrorMode::Strict)]
    pub errors: ErrorMode,
}

use anyhow::{Context, Result as AnyhowResult};
use naivebpe_tokenizer::Tokenizer;
use std::path::Path;

/// Parse a comma-separated list of token IDs.
fn parse_ids(tokens: &str) -> AnyhowResult<Vec<u32>> {
    tokens
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<u32>()
                .with_context(|| format!("invalid token id {:?}", s))
        })
        .collect()
}

pub fn run(cmd: DecodeCommand) -> AnyhowResult<()> {
    // Load tokenizer
    let tokenizer_path = Path::new(&cmd.tokenizer);
    let tokenizer = Tokenizer::load(tokenizer_path)?;

    let ids = parse_ids(&cmd.tokens)?;
    let text = tokenizer.decode(&ids, cmd.errors)?;

    println!("{}", text);

    Ok(())
}
