//! Local stand-in for the backend: writes submitted documents to disk

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use curriculum_editor::{GatewayError, GenerationId, PersistenceGateway, SubmitAck};
use curriculum_model::CurriculumDocument;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// What the file gateway writes for each submit
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmittedRecord {
    pub generation_id: GenerationId,
    pub status: String,
    pub submitted_at: DateTime<Utc>,
    pub document: CurriculumDocument,
}

pub struct FileGateway {
    out_dir: PathBuf,
}

impl FileGateway {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    pub fn record_path(&self, generation_id: &GenerationId) -> PathBuf {
        self.out_dir.join(format!("{}.json", generation_id))
    }
}

fn is_safe_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[async_trait]
impl PersistenceGateway for FileGateway {
    async fn submit(
        &self,
        generation_id: &GenerationId,
        document: &CurriculumDocument,
    ) -> Result<SubmitAck, GatewayError> {
        if !is_safe_id(generation_id.as_str()) {
            return Err(GatewayError::Rejected {
                status: 400,
                message: format!("invalid generation id '{}'", generation_id),
            });
        }

        let ack = SubmitAck::now(generation_id.clone());
        let record = SubmittedRecord {
            generation_id: generation_id.clone(),
            status: "updated".to_string(),
            submitted_at: ack.accepted_at,
            document: document.clone(),
        };
        let json = serde_json::to_string_pretty(&record)
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        write_record(&self.out_dir, &self.record_path(generation_id), json)
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        tracing::debug!(path = %self.record_path(generation_id).display(), "record written");
        Ok(ack)
    }
}

async fn write_record(dir: &Path, path: &Path, json: String) -> std::io::Result<()> {
    tokio::fs::create_dir_all(dir).await?;
    tokio::fs::write(path, json).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use curriculum_model::Level;

    #[tokio::test]
    async fn test_writes_record_named_after_generation() {
        let dir = tempfile::tempdir().unwrap();
        let gateway = FileGateway::new(dir.path().join("out"));
        let doc = CurriculumDocument::new("Tennis", "Basics", Level::Beginner);
        let id = GenerationId::new("gen-42");

        let ack = gateway.submit(&id, &doc).await.unwrap();
        assert_eq!(ack.generation_id, id);

        let written = std::fs::read_to_string(gateway.record_path(&id)).unwrap();
        let record: SubmittedRecord = serde_json::from_str(&written).unwrap();
        assert_eq!(record.status, "updated");
        assert_eq!(record.document, doc);
    }

    #[tokio::test]
    async fn test_rejects_path_like_ids() {
        let dir = tempfile::tempdir().unwrap();
        let gateway = FileGateway::new(dir.path());
        let doc = CurriculumDocument::default();

        let err = gateway
            .submit(&GenerationId::new("../escape"), &doc)
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::Rejected { status: 400, .. }));
    }
}
