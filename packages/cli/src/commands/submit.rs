use super::load_document;
use crate::config::Config;
use crate::gateway::FileGateway;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use curriculum_editor::{CurriculumDocument, EditSession, EditorError, SubmitAck};
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub struct SubmitArgs {
    /// Course JSON file to submit
    pub input: PathBuf,

    /// Generation id the document belongs to
    #[arg(long)]
    pub id: String,

    /// Override the configured output directory
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
}

pub async fn submit(args: SubmitArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let out_dir = args
        .out_dir
        .clone()
        .unwrap_or_else(|| config.get_out_dir(cwd));

    println!("📤 {} {}", "Submitting".green().bold(), args.input.display());

    let document = load_document(&args.input)?;
    match submit_document(document, &args.id, &out_dir, &config).await {
        Ok(ack) => {
            println!(
                "  {} Generation {} accepted at {}",
                "✓".green(),
                ack.generation_id.to_string().bright_white(),
                ack.accepted_at.to_rfc3339()
            );
            Ok(())
        }
        Err(EditorError::Validation(violations)) => {
            for violation in &violations {
                println!("  {} {}", "✗".red(), violation.message);
            }
            Err(anyhow::anyhow!(
                "Document has {} validation error(s); nothing was submitted",
                violations.len()
            ))
        }
        Err(err) => Err(err.into()),
    }
}

pub async fn submit_document(
    document: CurriculumDocument,
    generation_id: &str,
    out_dir: &Path,
    config: &Config,
) -> Result<SubmitAck, EditorError> {
    let mut session = EditSession::with_options(generation_id, document, config.editor_options());
    let gateway = FileGateway::new(out_dir);
    session.submit(&gateway).await
}
