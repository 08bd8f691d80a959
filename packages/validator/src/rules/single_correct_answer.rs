use crate::rules::ValidationRule;
use crate::violation::{Location, Violation};
use curriculum_model::Question;

/// Exactly one option with content must be marked correct.
///
/// Options with blank content are ignored, so a blank option marked correct
/// does not satisfy the rule.
pub struct SingleCorrectAnswerRule;

impl ValidationRule for SingleCorrectAnswerRule {
    fn name(&self) -> &'static str {
        "single-correct-answer"
    }

    fn description(&self) -> &'static str {
        "Exactly one valid option per question must be correct"
    }

    fn check_question(&self, location: Location, question: &Question) -> Vec<Violation> {
        let correct_count = question.valid_options().filter(|o| o.is_correct).count();

        match correct_count {
            1 => Vec::new(),
            0 => vec![Violation::new(
                self.name(),
                location,
                "no correct answer selected.",
            )],
            _ => vec![Violation::new(
                self.name(),
                location,
                "only one correct answer allowed.",
            )],
        }
    }
}
