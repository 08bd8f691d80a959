//! # Curriculum Editor
//!
//! Editing core for AI-generated course material.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: CurriculumDocument (load from JSON)  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: EditSession + EditEngine            │
//! │  - Apply mutations (copy-on-write)          │
//! │  - Post-effects: renumbering, single answer │
//! │  - Guard the submit boundary                │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ validator: violations or Valid              │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ PersistenceGateway (backend, external)      │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Documents are values**: an edit returns a new document, the old one
//!    is never modified
//! 2. **Named operations only**: every change is a `Mutation`, so every path
//!    goes through the invariant-keeping post-effects
//! 3. **Validate on submit**: structure is checked once, before the gateway
//!    is called
//!
//! ## Usage
//!
//! ```rust,ignore
//! use curriculum_editor::{EditSession, OptionField};
//!
//! let mut session = EditSession::from_json("gen-42", &json)?;
//!
//! session.add_question(0)?;
//! session.update_option(0, 0, 1, OptionField::IsCorrect(true))?;
//!
//! // Validates, then hands the document to the backend
//! let ack = session.submit(&gateway).await?;
//! ```

mod engine;
mod errors;
mod gateway;
mod mutations;
mod post_effects;
mod session;

pub use engine::{EditEngine, EditorOptions};
pub use errors::EditorError;
pub use gateway::{GatewayError, GenerationId, PersistenceGateway, SubmitAck};
pub use mutations::{
    DocumentField, LessonField, Mutation, MutationError, MutationOutcome, OptionField,
    QuestionField, QuizField, Refusal, VideoField,
};
pub use post_effects::{
    renumber_lessons, ExclusiveCorrectAnswer, PostEffect, PostEffectEngine, RenumberLessons,
};
pub use session::{EditOutcome, EditSession, SubmitTicket};

// Re-export common types for convenience
pub use curriculum_model::{CurriculumDocument, Level};
pub use curriculum_validator::{ValidationReport, Violation};
