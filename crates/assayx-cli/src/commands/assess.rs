//! Record assessment command
//!
//! Usage: assayx assess --record <PATH> [--vocab <PATH>] [--schema <PATH>]
//!
//! `--vocab` and `--schema` fall back to the configuration file.

use assayx_core_types::RequestContext;
use assayx_engine::commands::assess::{assess_record, load_record, load_schema};
use assayx_engine::commands::vocabulary::load_vocabulary;
use assayx_store::AssayxConfig;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct AssessArgs {
    /// Vocabulary file
    #[arg(long)]
    pub vocab: Option<PathBuf>,

    /// Schema tree file
    #[arg(long)]
    pub schema: Option<PathBuf>,

    /// Record file to assess
    #[arg(long)]
    pub record: PathBuf,
}

fn resolve(
    flag: Option<PathBuf>,
    configured: Option<&PathBuf>,
    name: &str,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    flag.or_else(|| configured.cloned())
        .ok_or_else(|| format!("no {} given: pass --{} or set it in the config file", name, name).into())
}

/// Execute assess command; prints the report as JSON
pub fn execute(args: AssessArgs, config: &AssayxConfig) -> Result<(), Box<dyn std::error::Error>> {
    let vocab_path = resolve(args.vocab, config.vocabulary.as_ref(), "vocab")?;
    let schema_path = resolve(args.schema, config.schema.as_ref(), "schema")?;

    let loaded = load_vocabulary(&vocab_path)?;
    let schema = load_schema(&schema_path)?;
    let record = load_record(&args.record)?;

    let mut ctx = RequestContext::new();
    if let Some(record_id) = &record.record_id {
        ctx = ctx.with_record_id(record_id.clone());
    }

    let report = assess_record(&ctx, &loaded.vocabulary, &schema, &record)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
