use crate::rules::ValidationRule;
use crate::violation::{Location, Violation};
use curriculum_model::Question;

const MIN_VALID_OPTIONS: usize = 2;

/// Each question needs at least two options with content
pub struct MinValidOptionsRule;

impl ValidationRule for MinValidOptionsRule {
    fn name(&self) -> &'static str {
        "min-valid-options"
    }

    fn description(&self) -> &'static str {
        "Questions need at least 2 options with non-blank content"
    }

    fn check_question(&self, location: Location, question: &Question) -> Vec<Violation> {
        if question.valid_options().count() < MIN_VALID_OPTIONS {
            vec![Violation::new(
                self.name(),
                location,
                format!("needs at least {} valid options.", MIN_VALID_OPTIONS),
            )]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curriculum_model::AnswerOption;

    fn at(lesson_index: usize, question_index: usize) -> Location {
        Location::Question {
            lesson_index,
            question_index,
        }
    }

    #[test]
    fn test_blank_options_do_not_count() {
        let question = Question::new(
            "Q",
            vec![
                AnswerOption::new("Forehand", true),
                AnswerOption::new("", false),
                AnswerOption::new(" \t", false),
            ],
        );

        let violations = MinValidOptionsRule.check_question(at(1, 0), &question);
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].message,
            "Lesson 2, Question 1: needs at least 2 valid options."
        );
    }

    #[test]
    fn test_two_filled_options_pass() {
        let question = Question::new(
            "Q",
            vec![AnswerOption::new("A", true), AnswerOption::new("B", false)],
        );
        assert!(MinValidOptionsRule.check_question(at(0, 0), &question).is_empty());
    }
}
