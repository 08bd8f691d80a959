use crate::rules::ValidationRule;
use crate::violation::{Location, Violation};
use curriculum_model::CurriculumDocument;

pub struct MinLessonsRule;

impl ValidationRule for MinLessonsRule {
    fn name(&self) -> &'static str {
        "min-lessons"
    }

    fn description(&self) -> &'static str {
        "A course needs at least one lesson"
    }

    fn is_gating(&self) -> bool {
        true
    }

    fn check_document(&self, doc: &CurriculumDocument) -> Vec<Violation> {
        if doc.lessons.is_empty() {
            vec![Violation::new(
                self.name(),
                Location::Document,
                "Course must have at least 1 lesson.",
            )]
        } else {
            Vec::new()
        }
    }
}
