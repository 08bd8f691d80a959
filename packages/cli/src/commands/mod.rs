pub mod apply;
pub mod init;
pub mod submit;
pub mod validate;

pub use apply::{apply, ApplyArgs};
pub use init::{init, InitArgs};
pub use submit::{submit, SubmitArgs};
pub use validate::{validate, ValidateArgs};

use anyhow::{Context, Result};
use curriculum_model::CurriculumDocument;
use std::path::Path;

/// Read a curriculum document from disk
pub fn load_document(path: &Path) -> Result<CurriculumDocument> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    CurriculumDocument::from_json(&source)
        .with_context(|| format!("Failed to parse {}", path.display()))
}
