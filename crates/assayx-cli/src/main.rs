//! AssayX CLI
//!
//! Command-line interface for checking axiom vocabularies and assessing
//! assay records against them.

use assayx_core::logging_facility;
use assayx_store::AssayxConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "assayx")]
#[command(about = "AssayX - Axiom checks for assay annotation", long_about = None)]
struct Cli {
    /// TOML configuration supplying default paths and the log profile
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Vocabulary operations
    Vocab(commands::vocab::VocabArgs),
    /// Assess a record against the axioms
    Assess(commands::assess::AssessArgs),
}

fn load_config(path: Option<&PathBuf>) -> Result<AssayxConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(AssayxConfig::load(path)?),
        None => Ok(AssayxConfig::default()),
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(cli.config.as_ref())?;
    logging_facility::init(config.log_profile);

    match cli.command {
        Commands::Vocab(args) => commands::vocab::execute(args),
        Commands::Assess(args) => commands::assess::execute(args, &config),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
