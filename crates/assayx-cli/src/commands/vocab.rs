//! Vocabulary commands
//!
//! Usage:
//! - assayx vocab check <PATH>
//! - assayx vocab convert <INPUT> <OUTPUT>

use assayx_engine::commands::vocabulary::{convert_vocabulary, load_vocabulary};
use chrono::SecondsFormat;
use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct VocabArgs {
    #[command(subcommand)]
    pub command: VocabCommand,
}

#[derive(Debug, Subcommand)]
pub enum VocabCommand {
    /// Parse and validate a vocabulary file
    Check(CheckArgs),
    /// Re-encode a vocabulary between YAML and JSON
    Convert(ConvertArgs),
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Vocabulary file (.yaml, .yml or .json)
    pub path: PathBuf,
}

#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Source vocabulary file
    pub input: PathBuf,

    /// Destination; the extension picks the encoding
    pub output: PathBuf,
}

/// Execute vocab command
pub fn execute(args: VocabArgs) -> Result<(), Box<dyn std::error::Error>> {
    match args.command {
        VocabCommand::Check(check_args) => execute_check(check_args),
        VocabCommand::Convert(convert_args) => execute_convert(convert_args),
    }
}

fn execute_check(args: CheckArgs) -> Result<(), Box<dyn std::error::Error>> {
    let loaded = load_vocabulary(&args.path)?;
    let counts = loaded.rule_counts;

    println!(
        "✓ {} is valid",
        loaded
            .name
            .clone()
            .unwrap_or_else(|| args.path.display().to_string())
    );
    println!(
        "Rules: {} (limit {}, exclude {}, exclusive {}, keyword {})",
        loaded.vocabulary.len(),
        counts.limit,
        counts.exclude,
        counts.exclusive,
        counts.keyword_rules
    );
    println!("Digest: {}", loaded.digest);
    println!(
        "Loaded at: {}",
        loaded.loaded_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    );
    Ok(())
}

fn execute_convert(args: ConvertArgs) -> Result<(), Box<dyn std::error::Error>> {
    let loaded = convert_vocabulary(&args.input, &args.output)?;
    println!(
        "✓ Converted {} rules to {}",
        loaded.vocabulary.len(),
        args.output.display()
    );
    println!("Digest: {}", loaded.digest);
    Ok(())
}
