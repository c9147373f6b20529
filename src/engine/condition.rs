use crate::model::{Condition, Flags};

/// Evaluates one routing condition against a selection and the current flags.
pub fn evaluate(condition: &Condition, selection: &[usize], flags: &Flags) -> bool {
    match condition {
        Condition::AnswerIs(index) => selection.contains(index),
        Condition::ExactMatch(expected) => {
            selection.len() == expected.len()
                && selection.iter().all(|i| expected.contains(i))
                && expected.iter().all(|i| selection.contains(i))
        }
        Condition::AnyIn(set) => selection.iter().any(|i| set.contains(i)),
        Condition::NoneIn(set) => !selection.iter().any(|i| set.contains(i)),
        Condition::FlagEquals { flag, value } => flags.get(flag) == Some(value),
        Condition::Always => true,
    }
}

/// ANDs every condition. An empty list is vacuously true.
pub fn evaluate_all(conditions: &[Condition], selection: &[usize], flags: &Flags) -> bool {
    conditions
        .iter()
        .all(|condition| evaluate(condition, selection, flags))
}
