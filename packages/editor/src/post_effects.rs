//! # Post-Effect System
//!
//! Mutations trigger cascading effects to keep the document consistent:
//! - Adding or removing a lesson → lessons renumbered 1..=n
//! - Marking an option correct → sibling options cleared
//!
//! Effects run on the engine's private copy of the document, after the
//! primary change and before the new document is handed back, so callers
//! never observe the intermediate state.
//!
//! Post-effects are:
//! - **Deterministic**: Same mutation always produces same effects
//! - **Minimal**: Only nodes that actually change are copied

use crate::mutations::{Mutation, OptionField};
use curriculum_model::CurriculumDocument;
use std::sync::Arc;

/// Post-effect that can be triggered by a mutation
pub trait PostEffect: std::fmt::Debug + Send + Sync {
    fn name(&self) -> &'static str;

    /// Restore the invariant this effect owns after `mutation` was applied
    fn apply(&self, mutation: &Mutation, doc: &mut CurriculumDocument);
}

/// Keep `lesson_number` equal to position + 1
#[derive(Debug)]
pub struct RenumberLessons;

impl PostEffect for RenumberLessons {
    fn name(&self) -> &'static str {
        "RenumberLessons"
    }

    fn apply(&self, mutation: &Mutation, doc: &mut CurriculumDocument) {
        match mutation {
            Mutation::AddLesson | Mutation::RemoveLesson { .. } => renumber_lessons(doc),
            _ => {}
        }
    }
}

/// Renumber lessons to their 1-based positions, copying only the ones whose
/// number changes
pub fn renumber_lessons(doc: &mut CurriculumDocument) {
    doc.renumber_lessons();
}

/// Radio-button semantics for correct answers
#[derive(Debug)]
pub struct ExclusiveCorrectAnswer;

impl PostEffect for ExclusiveCorrectAnswer {
    fn name(&self) -> &'static str {
        "ExclusiveCorrectAnswer"
    }

    fn apply(&self, mutation: &Mutation, doc: &mut CurriculumDocument) {
        if let Mutation::UpdateOption {
            lesson_index,
            question_index,
            option_index,
            field: OptionField::IsCorrect(true),
        } = mutation
        {
            let Some(lesson) = doc.lessons.get_mut(*lesson_index) else {
                return;
            };
            let Some(question) = Arc::make_mut(lesson).quiz.questions.get_mut(*question_index)
            else {
                return;
            };

            for (index, option) in Arc::make_mut(question).options.iter_mut().enumerate() {
                if index != *option_index {
                    option.is_correct = false;
                }
            }
        }
    }
}

/// Post-effect engine that applies all registered effects
#[derive(Debug)]
pub struct PostEffectEngine {
    effects: Vec<Box<dyn PostEffect>>,
}

impl PostEffectEngine {
    /// Create engine with default effects
    pub fn new() -> Self {
        Self {
            effects: vec![Box::new(RenumberLessons), Box::new(ExclusiveCorrectAnswer)],
        }
    }

    /// Create engine without any effects
    pub fn empty() -> Self {
        Self {
            effects: Vec::new(),
        }
    }

    pub fn add_effect(&mut self, effect: Box<dyn PostEffect>) {
        self.effects.push(effect);
    }

    /// Run every effect, in registration order
    pub fn run(&self, mutation: &Mutation, doc: &mut CurriculumDocument) {
        for effect in &self.effects {
            effect.apply(mutation, doc);
        }
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}

impl Default for PostEffectEngine {
    fn default() -> Self {
        Self::new()
    }
}
