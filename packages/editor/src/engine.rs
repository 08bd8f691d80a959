//! # Edit Engine
//!
//! Pure transformation `(document, mutation) → next document`.
//!
//! ```text
//! validate indices → refusal check → copy → primary change → post-effects
//! ```
//!
//! The input document is never touched. The copy is shallow (lessons and
//! questions are `Arc`s), and only the nodes on the edited path are deep-copied.

use crate::mutations::{Mutation, MutationError, MutationOutcome};
use crate::post_effects::PostEffectEngine;
use curriculum_model::{CurriculumDocument, DEFAULT_LESSON_NAME_TEMPLATE};
use tracing::{debug, info};

/// Editor behaviour that is not part of the document itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorOptions {
    /// Name given to new lessons; `{n}` is replaced with the lesson number
    pub lesson_name_template: String,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            lesson_name_template: DEFAULT_LESSON_NAME_TEMPLATE.to_string(),
        }
    }
}

#[derive(Debug, Default)]
pub struct EditEngine {
    options: EditorOptions,
    post_effects: PostEffectEngine,
}

impl EditEngine {
    pub fn new(options: EditorOptions) -> Self {
        Self {
            options,
            post_effects: PostEffectEngine::new(),
        }
    }

    pub fn with_post_effects(options: EditorOptions, post_effects: PostEffectEngine) -> Self {
        Self {
            options,
            post_effects,
        }
    }

    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    /// Produce the document that results from applying `mutation` to `doc`
    pub fn apply(
        &self,
        doc: &CurriculumDocument,
        mutation: &Mutation,
    ) -> Result<MutationOutcome, MutationError> {
        mutation.validate(doc)?;

        if let Some(refusal) = mutation.refusal(doc) {
            info!(mutation = mutation.name(), %refusal, "mutation refused");
            return Ok(MutationOutcome::Refused(refusal));
        }

        let mut next = doc.clone();
        mutation.apply_to(&mut next, &self.options.lesson_name_template)?;
        self.post_effects.run(mutation, &mut next);

        debug!(
            mutation = mutation.name(),
            lessons = next.lessons.len(),
            "mutation applied"
        );

        Ok(MutationOutcome::Applied(next))
    }
}
