use super::load_document;
use crate::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use curriculum_editor::{EditOutcome, EditSession, Mutation};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub struct ApplyArgs {
    /// Course JSON file to edit
    pub input: PathBuf,

    /// JSON array of edits to replay
    #[arg(short, long)]
    pub edits: PathBuf,

    /// Where to write the edited document (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Counts from replaying an edit script
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ApplySummary {
    pub applied: usize,
    pub refused: usize,
}

pub fn apply(args: ApplyArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let document = load_document(&args.input)?;
    let source = fs::read_to_string(&args.edits)
        .with_context(|| format!("Failed to read {}", args.edits.display()))?;
    let mutations: Vec<Mutation> = serde_json::from_str(&source)
        .with_context(|| format!("Failed to parse edits in {}", args.edits.display()))?;

    let mut session = EditSession::with_options("local", document, config.editor_options());
    let summary = replay(&mut session, mutations)?;

    let json = session.document().to_json_pretty()?;
    match &args.output {
        Some(path) => {
            fs::write(path, json)?;
            eprintln!("  {} Wrote {}", "✓".green(), path.display());
        }
        None => println!("{}", json),
    }

    eprintln!(
        "   {} applied, {} refused",
        summary.applied.to_string().green(),
        summary.refused.to_string().yellow()
    );

    Ok(())
}

/// Apply each edit in order; refusals are reported and skipped
pub fn replay(session: &mut EditSession, mutations: Vec<Mutation>) -> Result<ApplySummary> {
    let mut summary = ApplySummary::default();

    for (i, mutation) in mutations.into_iter().enumerate() {
        let name = mutation.name();
        match session
            .apply(mutation)
            .with_context(|| format!("Edit #{} ({}) failed", i + 1, name))?
        {
            EditOutcome::Applied { .. } => summary.applied += 1,
            EditOutcome::Refused { reason } => {
                eprintln!("  {} #{} {}: {}", "⚠️".yellow(), i + 1, name, reason);
                summary.refused += 1;
            }
        }
    }

    Ok(summary)
}
