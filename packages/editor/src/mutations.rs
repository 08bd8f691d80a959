//! # Document Mutations
//!
//! Discrete edit intents on a curriculum document.
//!
//! ## Design Principles
//!
//! 1. **Intent-preserving**: one mutation per user edit (field change, add, remove)
//! 2. **Typed fields**: each field variant carries a value of the right type,
//!    so a mutation can never put a tag list into a title
//! 3. **Validated**: indices are checked before anything is copied
//!
//! ## Mutation Semantics
//!
//! ### Field updates
//! - Atomic replacement of a single leaf value
//! - Ancestors on the path are copied, siblings stay shared
//!
//! ### RemoveLesson
//! - Remaining lessons are renumbered 1..=n (see `post_effects`)
//!
//! ### RemoveOption
//! - Refused when it would remove the last option of a question
//!
//! ### UpdateOption with `IsCorrect(true)`
//! - Radio semantics: every sibling option is cleared in the same update

use curriculum_model::{AnswerOption, CurriculumDocument, Lesson, Level, Question};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Semantic mutations (intent-preserving operations)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Mutation {
    /// Replace a course-level field
    UpdateDocument { field: DocumentField },

    UpdateLesson {
        lesson_index: usize,
        field: LessonField,
    },

    UpdateVideo {
        lesson_index: usize,
        field: VideoField,
    },

    UpdateQuiz {
        lesson_index: usize,
        field: QuizField,
    },

    /// Append an empty placeholder lesson
    AddLesson,

    RemoveLesson { lesson_index: usize },

    /// Append a question with two empty options
    AddQuestion { lesson_index: usize },

    RemoveQuestion {
        lesson_index: usize,
        question_index: usize,
    },

    UpdateQuestion {
        lesson_index: usize,
        question_index: usize,
        field: QuestionField,
    },

    /// Append an empty, non-correct option
    AddOption {
        lesson_index: usize,
        question_index: usize,
    },

    RemoveOption {
        lesson_index: usize,
        question_index: usize,
        option_index: usize,
    },

    UpdateOption {
        lesson_index: usize,
        question_index: usize,
        option_index: usize,
        field: OptionField,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DocumentField {
    Name(String),
    Description(String),
    Level(Level),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LessonField {
    Name(String),
    Description(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VideoField {
    Title(String),
    Description(String),
    Tags(Vec<String>),
    DrillName(Option<String>),
    DrillDescription(Option<String>),
    DrillPracticeSets(Option<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuizField {
    Title(String),
    Description(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuestionField {
    Title(String),
    Explanation(Option<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OptionField {
    Content(String),
    IsCorrect(bool),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MutationError {
    #[error("Lesson index {index} out of range ({count} lessons)")]
    LessonOutOfRange { index: usize, count: usize },

    #[error("Question index {index} out of range in lesson {lesson_index} ({count} questions)")]
    QuestionOutOfRange {
        lesson_index: usize,
        index: usize,
        count: usize,
    },

    #[error(
        "Option index {index} out of range in lesson {lesson_index}, \
         question {question_index} ({count} options)"
    )]
    OptionOutOfRange {
        lesson_index: usize,
        question_index: usize,
        index: usize,
        count: usize,
    },
}

/// An edit the engine declined to make. The document is left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Refusal {
    /// Removing the option would leave the question without options
    LastOption {
        lesson_index: usize,
        question_index: usize,
    },
}

impl Refusal {
    /// User-facing explanation
    pub fn message(&self) -> &'static str {
        match self {
            Refusal::LastOption { .. } => "A question must keep at least one answer option.",
        }
    }
}

impl fmt::Display for Refusal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Result of running a mutation through the engine
#[derive(Debug, Clone, PartialEq)]
pub enum MutationOutcome {
    /// The next document
    Applied(CurriculumDocument),
    Refused(Refusal),
}

impl MutationOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, MutationOutcome::Applied(_))
    }

    /// The next document, or `None` if the edit was refused
    pub fn into_document(self) -> Option<CurriculumDocument> {
        match self {
            MutationOutcome::Applied(doc) => Some(doc),
            MutationOutcome::Refused(_) => None,
        }
    }
}

impl Mutation {
    /// Apply with default editor options, returning the next document
    pub fn apply(&self, doc: &CurriculumDocument) -> Result<MutationOutcome, MutationError> {
        crate::EditEngine::default().apply(doc, self)
    }

    /// Apply with explicit editor options
    pub fn apply_with(
        &self,
        options: &crate::EditorOptions,
        doc: &CurriculumDocument,
    ) -> Result<MutationOutcome, MutationError> {
        crate::EditEngine::new(options.clone()).apply(doc, self)
    }

    /// Debug name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::UpdateDocument { .. } => "UpdateDocument",
            Mutation::UpdateLesson { .. } => "UpdateLesson",
            Mutation::UpdateVideo { .. } => "UpdateVideo",
            Mutation::UpdateQuiz { .. } => "UpdateQuiz",
            Mutation::AddLesson => "AddLesson",
            Mutation::RemoveLesson { .. } => "RemoveLesson",
            Mutation::AddQuestion { .. } => "AddQuestion",
            Mutation::RemoveQuestion { .. } => "RemoveQuestion",
            Mutation::UpdateQuestion { .. } => "UpdateQuestion",
            Mutation::AddOption { .. } => "AddOption",
            Mutation::RemoveOption { .. } => "RemoveOption",
            Mutation::UpdateOption { .. } => "UpdateOption",
        }
    }

    /// Validate indices without applying
    pub fn validate(&self, doc: &CurriculumDocument) -> Result<(), MutationError> {
        match self {
            Mutation::UpdateDocument { .. } | Mutation::AddLesson => Ok(()),

            Mutation::UpdateLesson { lesson_index, .. }
            | Mutation::UpdateVideo { lesson_index, .. }
            | Mutation::UpdateQuiz { lesson_index, .. }
            | Mutation::RemoveLesson { lesson_index }
            | Mutation::AddQuestion { lesson_index } => {
                find_lesson(doc, *lesson_index)?;
                Ok(())
            }

            Mutation::RemoveQuestion {
                lesson_index,
                question_index,
            }
            | Mutation::UpdateQuestion {
                lesson_index,
                question_index,
                ..
            }
            | Mutation::AddOption {
                lesson_index,
                question_index,
            } => {
                find_question(doc, *lesson_index, *question_index)?;
                Ok(())
            }

            Mutation::RemoveOption {
                lesson_index,
                question_index,
                option_index,
            }
            | Mutation::UpdateOption {
                lesson_index,
                question_index,
                option_index,
                ..
            } => {
                let question = find_question(doc, *lesson_index, *question_index)?;
                if *option_index >= question.options.len() {
                    return Err(MutationError::OptionOutOfRange {
                        lesson_index: *lesson_index,
                        question_index: *question_index,
                        index: *option_index,
                        count: question.options.len(),
                    });
                }
                Ok(())
            }
        }
    }

    /// Check whether this edit must be refused on `doc`
    pub fn refusal(&self, doc: &CurriculumDocument) -> Option<Refusal> {
        match self {
            Mutation::RemoveOption {
                lesson_index,
                question_index,
                ..
            } => {
                let question = doc.question(*lesson_index, *question_index)?;
                if question.options.len() < 2 {
                    Some(Refusal::LastOption {
                        lesson_index: *lesson_index,
                        question_index: *question_index,
                    })
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    /// Apply the primary change to `doc` in place.
    ///
    /// `doc` must be the engine's private copy: `Arc::make_mut` copies every
    /// lesson and question on the path, leaving shared siblings alone.
    pub(crate) fn apply_to(
        &self,
        doc: &mut CurriculumDocument,
        lesson_name_template: &str,
    ) -> Result<(), MutationError> {
        match self {
            Mutation::UpdateDocument { field } => {
                match field {
                    DocumentField::Name(value) => doc.name = value.clone(),
                    DocumentField::Description(value) => doc.description = value.clone(),
                    DocumentField::Level(level) => doc.level = *level,
                }
                Ok(())
            }

            Mutation::UpdateLesson {
                lesson_index,
                field,
            } => {
                let lesson = lesson_mut(doc, *lesson_index)?;
                match field {
                    LessonField::Name(value) => lesson.name = value.clone(),
                    LessonField::Description(value) => lesson.description = value.clone(),
                }
                Ok(())
            }

            Mutation::UpdateVideo {
                lesson_index,
                field,
            } => {
                let video = &mut lesson_mut(doc, *lesson_index)?.video;
                match field {
                    VideoField::Title(value) => video.title = value.clone(),
                    VideoField::Description(value) => video.description = value.clone(),
                    VideoField::Tags(tags) => video.tags = tags.clone(),
                    VideoField::DrillName(value) => video.drill_name = value.clone(),
                    VideoField::DrillDescription(value) => video.drill_description = value.clone(),
                    VideoField::DrillPracticeSets(value) => {
                        video.drill_practice_sets = value.clone()
                    }
                }
                Ok(())
            }

            Mutation::UpdateQuiz {
                lesson_index,
                field,
            } => {
                let quiz = &mut lesson_mut(doc, *lesson_index)?.quiz;
                match field {
                    QuizField::Title(value) => quiz.title = value.clone(),
                    QuizField::Description(value) => quiz.description = value.clone(),
                }
                Ok(())
            }

            Mutation::AddLesson => {
                let number = doc.lessons.len() as u32 + 1;
                doc.lessons
                    .push(Arc::new(Lesson::placeholder(number, lesson_name_template)));
                Ok(())
            }

            Mutation::RemoveLesson { lesson_index } => {
                find_lesson(doc, *lesson_index)?;
                doc.lessons.remove(*lesson_index);
                Ok(())
            }

            Mutation::AddQuestion { lesson_index } => {
                let lesson = lesson_mut(doc, *lesson_index)?;
                lesson.quiz.questions.push(Arc::new(Question::blank()));
                Ok(())
            }

            Mutation::RemoveQuestion {
                lesson_index,
                question_index,
            } => {
                find_question(doc, *lesson_index, *question_index)?;
                let lesson = lesson_mut(doc, *lesson_index)?;
                lesson.quiz.questions.remove(*question_index);
                Ok(())
            }

            Mutation::UpdateQuestion {
                lesson_index,
                question_index,
                field,
            } => {
                let question = question_mut(doc, *lesson_index, *question_index)?;
                match field {
                    QuestionField::Title(value) => question.title = value.clone(),
                    QuestionField::Explanation(value) => question.explanation = value.clone(),
                }
                Ok(())
            }

            Mutation::AddOption {
                lesson_index,
                question_index,
            } => {
                let question = question_mut(doc, *lesson_index, *question_index)?;
                question.options.push(AnswerOption::blank());
                Ok(())
            }

            Mutation::RemoveOption {
                lesson_index,
                question_index,
                option_index,
            } => {
                let question = question_mut(doc, *lesson_index, *question_index)?;
                if *option_index >= question.options.len() {
                    return Err(MutationError::OptionOutOfRange {
                        lesson_index: *lesson_index,
                        question_index: *question_index,
                        index: *option_index,
                        count: question.options.len(),
                    });
                }
                question.options.remove(*option_index);
                Ok(())
            }

            Mutation::UpdateOption {
                lesson_index,
                question_index,
                option_index,
                field,
            } => {
                let option = option_mut(doc, *lesson_index, *question_index, *option_index)?;
                match field {
                    OptionField::Content(value) => option.content = value.clone(),
                    OptionField::IsCorrect(value) => option.is_correct = *value,
                }
                Ok(())
            }
        }
    }
}

fn find_lesson(doc: &CurriculumDocument, index: usize) -> Result<&Lesson, MutationError> {
    doc.lesson(index).ok_or(MutationError::LessonOutOfRange {
        index,
        count: doc.lessons.len(),
    })
}

fn find_question(
    doc: &CurriculumDocument,
    lesson_index: usize,
    question_index: usize,
) -> Result<&Question, MutationError> {
    let lesson = find_lesson(doc, lesson_index)?;
    lesson
        .question(question_index)
        .ok_or(MutationError::QuestionOutOfRange {
            lesson_index,
            index: question_index,
            count: lesson.quiz.questions.len(),
        })
}

fn lesson_mut(doc: &mut CurriculumDocument, index: usize) -> Result<&mut Lesson, MutationError> {
    let count = doc.lessons.len();
    doc.lessons
        .get_mut(index)
        .map(Arc::make_mut)
        .ok_or(MutationError::LessonOutOfRange { index, count })
}

fn question_mut(
    doc: &mut CurriculumDocument,
    lesson_index: usize,
    question_index: usize,
) -> Result<&mut Question, MutationError> {
    let lesson = lesson_mut(doc, lesson_index)?;
    let count = lesson.quiz.questions.len();
    lesson
        .quiz
        .questions
        .get_mut(question_index)
        .map(Arc::make_mut)
        .ok_or(MutationError::QuestionOutOfRange {
            lesson_index,
            index: question_index,
            count,
        })
}

fn option_mut(
    doc: &mut CurriculumDocument,
    lesson_index: usize,
    question_index: usize,
    option_index: usize,
) -> Result<&mut AnswerOption, MutationError> {
    let question = question_mut(doc, lesson_index, question_index)?;
    let count = question.options.len();
    question
        .options
        .get_mut(option_index)
        .ok_or(MutationError::OptionOutOfRange {
            lesson_index,
            question_index,
            index: option_index,
            count,
        })
}
