use crate::rules::ValidationRule;
use crate::violation::{Location, Violation};
use curriculum_model::CurriculumDocument;

/// Course name and description must not be blank
pub struct RequiredFieldsRule;

impl ValidationRule for RequiredFieldsRule {
    fn name(&self) -> &'static str {
        "required-fields"
    }

    fn description(&self) -> &'static str {
        "Course name and description are required"
    }

    fn is_gating(&self) -> bool {
        true
    }

    fn check_document(&self, doc: &CurriculumDocument) -> Vec<Violation> {
        let mut violations = Vec::new();

        if doc.name.trim().is_empty() {
            violations.push(Violation::new(
                self.name(),
                Location::Document,
                "Course name is required.",
            ));
        }
        if doc.description.trim().is_empty() {
            violations.push(Violation::new(
                self.name(),
                Location::Document,
                "Course description is required.",
            ));
        }

        violations
    }
}
