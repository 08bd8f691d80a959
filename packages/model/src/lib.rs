//! # Curriculum Model
//!
//! Nested course document edited by coaches before it is promoted into the
//! catalog:
//!
//! ```text
//! CurriculumDocument
//!   └─ Lesson (lessonNumber 1..=n)
//!        ├─ VideoSpec
//!        └─ QuizSpec
//!             └─ Question
//!                  └─ AnswerOption
//! ```
//!
//! Lessons and questions sit behind `Arc`, so cloning a document is cheap and
//! an edit only copies the nodes on the edited path (`Arc::make_mut`).

pub mod document;
pub mod error;

pub use document::{
    AnswerOption, CurriculumDocument, Lesson, Level, Question, QuizSpec, VideoSpec,
    DEFAULT_LESSON_NAME_TEMPLATE,
};
pub use error::{LoadError, LoadResult};

use std::io::Read;

impl CurriculumDocument {
    /// Load a document from its JSON representation.
    ///
    /// Lesson numbers are taken from array order, whatever the source says.
    pub fn from_json(source: &str) -> LoadResult<Self> {
        let mut doc: Self = serde_json::from_str(source)?;
        doc.renumber_lessons();
        Ok(doc)
    }

    pub fn from_reader<R: Read>(reader: R) -> LoadResult<Self> {
        let mut doc: Self = serde_json::from_reader(reader)?;
        doc.renumber_lessons();
        Ok(doc)
    }

    pub fn to_json_pretty(&self) -> LoadResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_minimal_document() {
        let doc = CurriculumDocument::from_json(r#"{"name": "Tennis 101"}"#).unwrap();
        assert_eq!(doc.name, "Tennis 101");
        assert_eq!(doc.level, Level::Beginner);
        assert!(doc.lessons.is_empty());
    }

    #[test]
    fn test_load_rejects_unknown_level() {
        let result = CurriculumDocument::from_json(r#"{"name": "x", "level": "EXPERT"}"#);
        assert!(matches!(result, Err(LoadError::Json(_))));
    }
}
