mod min_lessons;
mod min_valid_options;
mod required_fields;
mod single_correct_answer;

pub use min_lessons::MinLessonsRule;
pub use min_valid_options::MinValidOptionsRule;
pub use required_fields::RequiredFieldsRule;
pub use single_correct_answer::SingleCorrectAnswerRule;

use crate::violation::{Location, Violation};
use curriculum_model::{CurriculumDocument, Question};

/// Trait for implementing validation rules
pub trait ValidationRule {
    /// Unique identifier for this rule
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Gating rules stop the pipeline as soon as they report anything
    fn is_gating(&self) -> bool {
        false
    }

    /// Check document-level fields
    fn check_document(&self, _doc: &CurriculumDocument) -> Vec<Violation> {
        Vec::new()
    }

    /// Check a single quiz question
    fn check_question(&self, _location: Location, _question: &Question) -> Vec<Violation> {
        Vec::new()
    }
}

/// Ordered registry of validation rules
pub struct RuleRegistry {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl RuleRegistry {
    /// Create a new registry with all built-in rules
    pub fn new() -> Self {
        Self {
            rules: vec![
                Box::new(RequiredFieldsRule),
                Box::new(MinLessonsRule),
                Box::new(MinValidOptionsRule),
                Box::new(SingleCorrectAnswerRule),
            ],
        }
    }

    /// Get all registered rules
    pub fn rules(&self) -> &[Box<dyn ValidationRule>] {
        &self.rules
    }

    /// Create an empty registry
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add a custom rule to the registry
    pub fn add_rule(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &format!("{} rules", self.rules.len()))
            .finish()
    }
}
