//! Error types for the editor

use curriculum_validator::Violation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Load error: {0}")]
    Load(#[from] curriculum_model::LoadError),

    #[error("Mutation error: {0}")]
    Mutation(#[from] crate::mutations::MutationError),

    #[error("Validation failed with {} violation(s)", .0.len())]
    Validation(Vec<Violation>),

    #[error("Persistence error: {0}")]
    Persistence(#[from] crate::gateway::GatewayError),

    #[error("A submit is already in progress")]
    SubmitInFlight,

    #[error("No submit is pending")]
    NoSubmitPending,
}
