//! # Persistence Gateway
//!
//! Boundary to the backend that takes ownership of an edited document.
//! Transport, authentication and retry policy live behind this trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use curriculum_model::CurriculumDocument;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Opaque identifier of the AI-generation record a document was loaded from
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GenerationId(String);

impl GenerationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GenerationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GenerationId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for GenerationId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Backend acknowledgement of a submitted document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAck {
    pub generation_id: GenerationId,
    pub accepted_at: DateTime<Utc>,
}

impl SubmitAck {
    pub fn now(generation_id: GenerationId) -> Self {
        Self {
            generation_id,
            accepted_at: Utc::now(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Rejected by backend ({status}): {message}")]
    Rejected { status: u16, message: String },
}

/// Sends a validated document to the backend
#[async_trait]
pub trait PersistenceGateway: Send + Sync {
    async fn submit(
        &self,
        generation_id: &GenerationId,
        document: &CurriculumDocument,
    ) -> Result<SubmitAck, GatewayError>;
}
