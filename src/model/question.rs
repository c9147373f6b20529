use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    SingleChoice,
    MultipleChoice,
}

/// One selectable answer of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    #[serde(default)]
    pub id: String,
    pub text: String,
    /// Selecting this option rules out every other option.
    #[serde(default)]
    pub exclusive: bool,
}

/// A user-facing question. Options are addressed by their position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub required: bool,
    pub options: Vec<AnswerOption>,
}

impl Question {
    pub fn is_exclusive(&self, index: usize) -> bool {
        self.options.get(index).is_some_and(|o| o.exclusive)
    }

    pub fn option_text(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(|o| o.text.as_str())
    }
}

/// Selection bounds for a multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRule {
    #[serde(default)]
    pub question_id: String,
    #[serde(default)]
    pub min_selections: Option<usize>,
    #[serde(default)]
    pub max_selections: Option<usize>,
}
