//! Tests for answer validation and exclusivity-aware toggling.
mod common;
use common::*;
use shindan::prelude::*;

fn rule(min: Option<usize>, max: Option<usize>) -> ValidationRule {
    ValidationRule {
        question_id: "q".to_string(),
        min_selections: min,
        max_selections: max,
    }
}

#[test]
fn test_required_and_empty_is_fatal() {
    let question = question(QuestionKind::MultipleChoice, 3, &[]);
    let result = validate(&question, &[], Some(&rule(Some(2), None)));
    assert!(!result.is_valid);
    assert_eq!(result.errors, vec![ValidationError::Required]);
}

#[test]
fn test_optional_and_empty_is_valid() {
    let mut question = question(QuestionKind::SingleChoice, 3, &[]);
    question.required = false;
    assert_eq!(validate(&question, &[], None), ValidationResult::valid());
}

#[test]
fn test_single_choice_rejects_several_answers() {
    let question = question(QuestionKind::SingleChoice, 3, &[]);
    let result = validate(&question, &[0, 1], Some(&rule(None, Some(1))));
    assert_eq!(result.errors, vec![ValidationError::MultipleForSingleChoice]);
    assert!(validate(&question, &[2], None).is_valid);
}

#[test]
fn test_rule_bounds() {
    let question = question(QuestionKind::MultipleChoice, 5, &[]);

    let result = validate(&question, &[0], Some(&rule(Some(2), Some(3))));
    assert_eq!(
        result.errors,
        vec![ValidationError::TooFewSelections { min: 2, actual: 1 }]
    );

    let result = validate(&question, &[0, 1, 2, 3], Some(&rule(Some(2), Some(3))));
    assert_eq!(
        result.errors,
        vec![ValidationError::TooManySelections { max: 3, actual: 4 }]
    );

    assert!(validate(&question, &[0, 1], Some(&rule(Some(2), Some(3)))).is_valid);
}

#[test]
fn test_contradictory_bounds_accumulate() {
    let question = question(QuestionKind::MultipleChoice, 5, &[]);
    let result = validate(&question, &[0, 1], Some(&rule(Some(3), Some(1))));
    assert_eq!(
        result.errors,
        vec![
            ValidationError::TooFewSelections { min: 3, actual: 2 },
            ValidationError::TooManySelections { max: 1, actual: 2 },
        ]
    );
}

#[test]
fn test_exclusive_conflict_replaces_rule_errors() {
    let question = question(QuestionKind::MultipleChoice, 4, &[3]);
    let result = validate(&question, &[0, 1, 3], Some(&rule(None, Some(2))));
    assert!(!result.is_valid);
    assert_eq!(
        result.errors,
        vec![ValidationError::ExclusiveCombined {
            option: "Option 3".to_string()
        }]
    );

    assert!(validate(&question, &[3], Some(&rule(None, Some(2)))).is_valid);
}

#[test]
fn test_single_choice_toggle() {
    let question = question(QuestionKind::SingleChoice, 3, &[]);
    assert_eq!(toggle_with_exclusivity(&question, &[1], 1), Vec::<usize>::new());
    assert_eq!(toggle_with_exclusivity(&question, &[1], 2), vec![2]);
    assert_eq!(toggle_with_exclusivity(&question, &[], 0), vec![0]);
}

#[test]
fn test_multiple_choice_toggle_respects_exclusive_options() {
    let question = question(QuestionKind::MultipleChoice, 6, &[5]);
    assert_eq!(toggle_with_exclusivity(&question, &[1, 2], 5), vec![5]);
    assert_eq!(toggle_with_exclusivity(&question, &[5], 3), vec![3]);
    assert_eq!(toggle_with_exclusivity(&question, &[1, 2], 3), vec![1, 2, 3]);
    assert_eq!(toggle_with_exclusivity(&question, &[1, 2, 3], 2), vec![1, 3]);
    assert_eq!(toggle_with_exclusivity(&question, &[5], 5), Vec::<usize>::new());
}

#[test]
fn test_toggled_selections_always_validate_on_exclusivity() {
    let question = question(QuestionKind::MultipleChoice, 4, &[0, 3]);
    let mut selection = Vec::new();
    for index in [1, 0, 2, 3, 1, 2, 0] {
        selection = toggle_with_exclusivity(&question, &selection, index);
        let result = validate(&question, &selection, None);
        assert!(
            !result
                .errors
                .iter()
                .any(|e| matches!(e, ValidationError::ExclusiveCombined { .. })),
            "selection {:?} combined an exclusive option",
            selection
        );
    }
}

#[test]
fn test_validation_messages() {
    assert_eq!(
        ValidationError::TooFewSelections { min: 2, actual: 1 }.to_string(),
        "Select at least 2 option(s), 1 selected"
    );
    assert!(
        ValidationError::ExclusiveCombined {
            option: "None of the above".to_string()
        }
        .to_string()
        .contains("None of the above")
    );
}
