//! # Edit Session Management
//!
//! An EditSession owns the document a coach is reviewing, keyed by the
//! generation record it was loaded from. Every edit goes through the
//! `EditEngine`; the held document is replaced, never modified in place.
//!
//! ## Submit
//!
//! ```text
//! Idle ──begin_submit──▶ Submitting ──finish_submit──▶ Idle
//!        (validates)      edits refused     (ok: clean, err: document kept)
//! ```

use crate::engine::{EditEngine, EditorOptions};
use crate::gateway::{GenerationId, PersistenceGateway, SubmitAck, GatewayError};
use crate::mutations::{
    DocumentField, LessonField, Mutation, MutationOutcome, OptionField, QuestionField, QuizField,
    Refusal, VideoField,
};
use crate::EditorError;
use curriculum_model::CurriculumDocument;
use curriculum_validator::{validate_document, ValidationReport};
use tracing::{debug, info, warn};

/// Single-owner editing session for one generated course
#[derive(Debug)]
pub struct EditSession {
    generation_id: GenerationId,
    document: CurriculumDocument,
    engine: EditEngine,
    /// Increments on every applied mutation
    version: u64,
    dirty: bool,
    state: SubmitState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SubmitState {
    Idle,
    Submitting,
}

/// What happened to an edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    Applied { version: u64 },
    Refused { reason: Refusal },
}

/// Snapshot handed to the gateway while a submit is pending
#[derive(Debug, Clone)]
pub struct SubmitTicket {
    pub generation_id: GenerationId,
    pub document: CurriculumDocument,
    pub version: u64,
}

impl EditSession {
    /// Start a session on a freshly loaded document
    pub fn load(generation_id: impl Into<GenerationId>, document: CurriculumDocument) -> Self {
        Self::with_options(generation_id, document, EditorOptions::default())
    }

    /// Lesson numbers of `document` are normalized to 1..=n on the way in
    pub fn with_options(
        generation_id: impl Into<GenerationId>,
        mut document: CurriculumDocument,
        options: EditorOptions,
    ) -> Self {
        document.renumber_lessons();
        Self {
            generation_id: generation_id.into(),
            document,
            engine: EditEngine::new(options),
            version: 0,
            dirty: false,
            state: SubmitState::Idle,
        }
    }

    /// Start a session from the JSON of a generation record
    pub fn from_json(
        generation_id: impl Into<GenerationId>,
        source: &str,
    ) -> Result<Self, EditorError> {
        Ok(Self::load(generation_id, CurriculumDocument::from_json(source)?))
    }

    pub fn generation_id(&self) -> &GenerationId {
        &self.generation_id
    }

    pub fn document(&self) -> &CurriculumDocument {
        &self.document
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// True when there are edits that have not been submitted
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmitState::Submitting
    }

    /// End the session, handing the document to the caller
    pub fn into_document(self) -> CurriculumDocument {
        self.document
    }

    /// Apply one edit
    pub fn apply(&mut self, mutation: Mutation) -> Result<EditOutcome, EditorError> {
        if self.is_submitting() {
            return Err(EditorError::SubmitInFlight);
        }

        match self.engine.apply(&self.document, &mutation)? {
            MutationOutcome::Applied(next) => {
                self.document = next;
                self.version += 1;
                self.dirty = true;
                debug!(
                    generation_id = %self.generation_id,
                    version = self.version,
                    mutation = mutation.name(),
                    "document updated"
                );
                Ok(EditOutcome::Applied {
                    version: self.version,
                })
            }
            MutationOutcome::Refused(reason) => Ok(EditOutcome::Refused { reason }),
        }
    }

    pub fn update_document(&mut self, field: DocumentField) -> Result<EditOutcome, EditorError> {
        self.apply(Mutation::UpdateDocument { field })
    }

    pub fn update_lesson(
        &mut self,
        lesson_index: usize,
        field: LessonField,
    ) -> Result<EditOutcome, EditorError> {
        self.apply(Mutation::UpdateLesson {
            lesson_index,
            field,
        })
    }

    pub fn update_video(
        &mut self,
        lesson_index: usize,
        field: VideoField,
    ) -> Result<EditOutcome, EditorError> {
        self.apply(Mutation::UpdateVideo {
            lesson_index,
            field,
        })
    }

    pub fn update_quiz(
        &mut self,
        lesson_index: usize,
        field: QuizField,
    ) -> Result<EditOutcome, EditorError> {
        self.apply(Mutation::UpdateQuiz {
            lesson_index,
            field,
        })
    }

    pub fn add_lesson(&mut self) -> Result<EditOutcome, EditorError> {
        self.apply(Mutation::AddLesson)
    }

    pub fn remove_lesson(&mut self, lesson_index: usize) -> Result<EditOutcome, EditorError> {
        self.apply(Mutation::RemoveLesson { lesson_index })
    }

    pub fn add_question(&mut self, lesson_index: usize) -> Result<EditOutcome, EditorError> {
        self.apply(Mutation::AddQuestion { lesson_index })
    }

    pub fn remove_question(
        &mut self,
        lesson_index: usize,
        question_index: usize,
    ) -> Result<EditOutcome, EditorError> {
        self.apply(Mutation::RemoveQuestion {
            lesson_index,
            question_index,
        })
    }

    pub fn update_question(
        &mut self,
        lesson_index: usize,
        question_index: usize,
        field: QuestionField,
    ) -> Result<EditOutcome, EditorError> {
        self.apply(Mutation::UpdateQuestion {
            lesson_index,
            question_index,
            field,
        })
    }

    pub fn add_option(
        &mut self,
        lesson_index: usize,
        question_index: usize,
    ) -> Result<EditOutcome, EditorError> {
        self.apply(Mutation::AddOption {
            lesson_index,
            question_index,
        })
    }

    pub fn remove_option(
        &mut self,
        lesson_index: usize,
        question_index: usize,
        option_index: usize,
    ) -> Result<EditOutcome, EditorError> {
        self.apply(Mutation::RemoveOption {
            lesson_index,
            question_index,
            option_index,
        })
    }

    pub fn update_option(
        &mut self,
        lesson_index: usize,
        question_index: usize,
        option_index: usize,
        field: OptionField,
    ) -> Result<EditOutcome, EditorError> {
        self.apply(Mutation::UpdateOption {
            lesson_index,
            question_index,
            option_index,
            field,
        })
    }

    /// Run the pre-submit validation pipeline on the current document
    pub fn validate(&self) -> ValidationReport {
        validate_document(&self.document)
    }

    /// Validate and lock the session for submit.
    ///
    /// On validation failure nothing changes and the violations are returned.
    pub fn begin_submit(&mut self) -> Result<SubmitTicket, EditorError> {
        if self.is_submitting() {
            return Err(EditorError::SubmitInFlight);
        }

        if let ValidationReport::Invalid(violations) = self.validate() {
            warn!(
                generation_id = %self.generation_id,
                violations = violations.len(),
                "submit blocked by validation"
            );
            return Err(EditorError::Validation(violations));
        }

        self.state = SubmitState::Submitting;
        info!(generation_id = %self.generation_id, version = self.version, "submit started");

        Ok(SubmitTicket {
            generation_id: self.generation_id.clone(),
            document: self.document.clone(),
            version: self.version,
        })
    }

    /// Unlock the session with the gateway's answer
    pub fn finish_submit(
        &mut self,
        result: Result<SubmitAck, GatewayError>,
    ) -> Result<SubmitAck, EditorError> {
        if !self.is_submitting() {
            return Err(EditorError::NoSubmitPending);
        }
        self.state = SubmitState::Idle;

        match result {
            Ok(ack) => {
                self.dirty = false;
                info!(generation_id = %self.generation_id, "submit accepted");
                Ok(ack)
            }
            Err(err) => {
                warn!(generation_id = %self.generation_id, error = %err, "submit failed");
                Err(EditorError::Persistence(err))
            }
        }
    }

    /// Unlock the session without an answer from the gateway. The document
    /// stays as it was and stays dirty.
    pub fn cancel_submit(&mut self) -> Result<(), EditorError> {
        if !self.is_submitting() {
            return Err(EditorError::NoSubmitPending);
        }
        self.state = SubmitState::Idle;
        warn!(generation_id = %self.generation_id, "submit cancelled");
        Ok(())
    }

    /// Validate, then hand the document to `gateway`.
    ///
    /// Dropping the returned future before the gateway answers cancels the
    /// submit and re-enables editing.
    pub async fn submit(
        &mut self,
        gateway: &dyn PersistenceGateway,
    ) -> Result<SubmitAck, EditorError> {
        let ticket = self.begin_submit()?;
        let guard = PendingSubmit { session: self };
        let result = gateway
            .submit(&ticket.generation_id, &ticket.document)
            .await;
        guard.session.finish_submit(result)
    }
}

/// Cancels the submit if it is still pending when dropped
struct PendingSubmit<'a> {
    session: &'a mut EditSession,
}

impl Drop for PendingSubmit<'_> {
    fn drop(&mut self) {
        if self.session.is_submitting() {
            let _ = self.session.cancel_submit();
        }
    }
}
