use serde::{Deserialize, Serialize};
use std::fmt;

/// Where in the document a violation was found (0-based indices)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Location {
    Document,
    #[serde(rename_all = "camelCase")]
    Lesson { lesson_index: usize },
    #[serde(rename_all = "camelCase")]
    Question {
        lesson_index: usize,
        question_index: usize,
    },
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Document => write!(f, "Course"),
            Location::Lesson { lesson_index } => write!(f, "Lesson {}", lesson_index + 1),
            Location::Question {
                lesson_index,
                question_index,
            } => write!(
                f,
                "Lesson {}, Question {}",
                lesson_index + 1,
                question_index + 1
            ),
        }
    }
}

/// One invariant breach found by the validator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// The rule that produced this violation
    pub rule: String,

    pub location: Location,

    /// Human-readable message, already prefixed with the location
    pub message: String,
}

impl Violation {
    pub fn new(rule: impl Into<String>, location: Location, detail: impl AsRef<str>) -> Self {
        let message = match location {
            Location::Document => detail.as_ref().to_string(),
            _ => format!("{}: {}", location, detail.as_ref()),
        };

        Self {
            rule: rule.into(),
            location,
            message,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.rule, self.message)
    }
}

/// Outcome of running the validation pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "violations", rename_all = "lowercase")]
pub enum ValidationReport {
    Valid,
    Invalid(Vec<Violation>),
}

impl ValidationReport {
    pub fn from_violations(violations: Vec<Violation>) -> Self {
        if violations.is_empty() {
            Self::Valid
        } else {
            Self::Invalid(violations)
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn violations(&self) -> &[Violation] {
        match self {
            Self::Valid => &[],
            Self::Invalid(violations) => violations,
        }
    }

    pub fn messages(&self) -> Vec<&str> {
        self.violations().iter().map(|v| v.message.as_str()).collect()
    }

    pub fn into_result(self) -> Result<(), Vec<Violation>> {
        match self {
            Self::Valid => Ok(()),
            Self::Invalid(violations) => Err(violations),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_location_is_one_based_in_messages() {
        let v = Violation::new(
            "single-correct-answer",
            Location::Question {
                lesson_index: 0,
                question_index: 2,
            },
            "no correct answer selected.",
        );
        assert_eq!(v.message, "Lesson 1, Question 3: no correct answer selected.");
    }

    #[test]
    fn test_document_violation_has_no_prefix() {
        let v = Violation::new(
            "min-lessons",
            Location::Document,
            "Course must have at least 1 lesson.",
        );
        assert_eq!(v.message, "Course must have at least 1 lesson.");
        assert_eq!(v.to_string(), "[min-lessons] Course must have at least 1 lesson.");
    }

    #[test]
    fn test_empty_report_is_valid() {
        let report = ValidationReport::from_violations(vec![]);
        assert!(report.is_valid());
        assert!(report.violations().is_empty());
        assert!(report.into_result().is_ok());
    }
}
