//! # Curriculum Validator
//!
//! Pre-submit validation of a curriculum document. Runs once, synchronously,
//! and reports every violation with its location so the editor can point the
//! coach at the offending lesson and question.

mod rules;
mod validator;
mod violation;

pub use rules::{
    MinLessonsRule, MinValidOptionsRule, RequiredFieldsRule, RuleRegistry,
    SingleCorrectAnswerRule, ValidationRule,
};
pub use validator::{validate_document, validate_with, ValidateOptions};
pub use violation::{Location, ValidationReport, Violation};
