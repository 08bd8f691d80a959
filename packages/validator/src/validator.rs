use crate::rules::RuleRegistry;
use crate::violation::{Location, ValidationReport, Violation};
use curriculum_model::CurriculumDocument;

/// Options for configuring the validator
#[derive(Debug, Default)]
pub struct ValidateOptions {
    /// Custom rule registry (uses default if None)
    pub registry: Option<RuleRegistry>,
}

/// Validate a document with the built-in rules
pub fn validate_document(document: &CurriculumDocument) -> ValidationReport {
    validate_with(document, ValidateOptions::default())
}

/// Validate a document and return every violation found.
///
/// Gating rules run first, in registry order, and stop the pass as soon as one
/// of them reports. Otherwise question rules are applied to every question and
/// violations accumulate in lesson-then-question order.
pub fn validate_with(document: &CurriculumDocument, options: ValidateOptions) -> ValidationReport {
    let registry = options.registry.unwrap_or_default();
    let mut violations = Vec::new();

    for rule in registry.rules().iter().filter(|r| r.is_gating()) {
        violations.extend(rule.check_document(document));
        if !violations.is_empty() {
            return ValidationReport::Invalid(violations);
        }
    }

    for rule in registry.rules().iter().filter(|r| !r.is_gating()) {
        violations.extend(rule.check_document(document));
    }

    for (lesson_index, lesson) in document.lessons.iter().enumerate() {
        violations.extend(validate_lesson(lesson_index, lesson, &registry));
    }

    ValidationReport::from_violations(violations)
}

fn validate_lesson(
    lesson_index: usize,
    lesson: &curriculum_model::Lesson,
    registry: &RuleRegistry,
) -> Vec<Violation> {
    let mut violations = Vec::new();

    for (question_index, question) in lesson.quiz.questions.iter().enumerate() {
        let location = Location::Question {
            lesson_index,
            question_index,
        };
        for rule in registry.rules() {
            violations.extend(rule.check_question(location, question));
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::ValidationRule;
    use curriculum_model::{AnswerOption, Lesson, Level, Question};
    use std::sync::Arc;

    fn lesson_with(questions: Vec<Question>) -> Arc<Lesson> {
        let mut lesson = Lesson::placeholder(1, "Bài {n}");
        lesson.quiz.questions = questions.into_iter().map(Arc::new).collect();
        Arc::new(lesson)
    }

    #[test]
    fn test_blank_name_short_circuits_before_lesson_check() {
        let doc = CurriculumDocument::new("", "desc", Level::Beginner);
        let report = validate_document(&doc);
        assert_eq!(report.messages(), vec!["Course name is required."]);
    }

    #[test]
    fn test_gating_stops_question_checks() {
        let mut doc = CurriculumDocument::new("", "desc", Level::Beginner);
        doc.lessons.push(lesson_with(vec![Question::blank()]));

        let report = validate_document(&doc);
        assert_eq!(report.violations().len(), 1);
        assert_eq!(report.violations()[0].rule, "required-fields");
    }

    struct NoDrillRule;

    impl ValidationRule for NoDrillRule {
        fn name(&self) -> &'static str {
            "needs-drill"
        }

        fn description(&self) -> &'static str {
            "Every lesson has a drill"
        }

        fn check_document(&self, doc: &CurriculumDocument) -> Vec<Violation> {
            doc.lessons
                .iter()
                .enumerate()
                .filter(|(_, l)| l.video.drill_name.is_none())
                .map(|(i, _)| {
                    Violation::new(
                        self.name(),
                        Location::Lesson { lesson_index: i },
                        "missing drill.",
                    )
                })
                .collect()
        }
    }

    #[test]
    fn test_custom_registry() {
        let mut doc = CurriculumDocument::new("Course", "desc", Level::Beginner);
        doc.lessons.push(lesson_with(vec![Question::new(
            "Q",
            vec![AnswerOption::new("A", true), AnswerOption::new("B", false)],
        )]));

        let mut registry = RuleRegistry::empty();
        registry.add_rule(Box::new(NoDrillRule));

        let report = validate_with(&doc, ValidateOptions { registry: Some(registry) });
        assert_eq!(report.messages(), vec!["Lesson 1: missing drill."]);
    }
}
