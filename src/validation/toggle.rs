use crate::model::{Question, QuestionKind};

/// Returns the selection after the user toggles `index`.
///
/// Single choice behaves like a radio group that can be cleared. In multiple
/// choice, picking an exclusive option drops everything else, and picking a
/// regular option drops any exclusive ones.
pub fn toggle_with_exclusivity(question: &Question, current: &[usize], index: usize) -> Vec<usize> {
    let already_selected = current.contains(&index);

    match question.kind {
        QuestionKind::SingleChoice if already_selected => Vec::new(),
        QuestionKind::SingleChoice => vec![index],
        QuestionKind::MultipleChoice if already_selected => {
            current.iter().copied().filter(|&i| i != index).collect()
        }
        QuestionKind::MultipleChoice if question.is_exclusive(index) => vec![index],
        QuestionKind::MultipleChoice => current
            .iter()
            .copied()
            .filter(|&i| !question.is_exclusive(i))
            .chain(std::iter::once(index))
            .collect(),
    }
}
