use crate::error::ValidationError;
use crate::model::{Question, QuestionKind, ValidationRule};
use serde::Serialize;

mod toggle;

pub use toggle::toggle_with_exclusivity;

/// The verdict on a proposed selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    fn fatal(error: ValidationError) -> Self {
        Self::from_errors(vec![error])
    }
}

/// Checks a selection against its question and optional rule.
///
/// A missing required answer, several answers to a single-choice question and
/// an exclusive option combined with others each stop validation with a single
/// error. Rule bounds accumulate, but an exclusivity conflict replaces them.
pub fn validate(
    question: &Question,
    selection: &[usize],
    rule: Option<&ValidationRule>,
) -> ValidationResult {
    if question.required && selection.is_empty() {
        return ValidationResult::fatal(ValidationError::Required);
    }

    if question.kind == QuestionKind::SingleChoice && selection.len() > 1 {
        return ValidationResult::fatal(ValidationError::MultipleForSingleChoice);
    }

    let mut errors = Vec::new();
    if let Some(rule) = rule {
        if let Some(min) = rule.min_selections.filter(|&min| selection.len() < min) {
            errors.push(ValidationError::TooFewSelections {
                min,
                actual: selection.len(),
            });
        }
        if let Some(max) = rule.max_selections.filter(|&max| selection.len() > max) {
            errors.push(ValidationError::TooManySelections {
                max,
                actual: selection.len(),
            });
        }
    }

    if selection.len() > 1 {
        if let Some(&index) = selection.iter().find(|&&i| question.is_exclusive(i)) {
            let option = question.option_text(index).unwrap_or_default().to_string();
            return ValidationResult::fatal(ValidationError::ExclusiveCombined { option });
        }
    }

    ValidationResult::from_errors(errors)
}
