use crate::error::DatasetError;
use crate::model::{Catalog, DecisionNode, DecisionTree, Outcome, Question, ValidationRule};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

mod lint;

pub use lint::IntegrityIssue;

pub const QUESTIONS_FILE: &str = "questions.json";
pub const DECISION_TREE_FILE: &str = "decision_tree.json";
pub const OUTCOMES_FILE: &str = "outcomes.json";
pub const VALIDATION_RULES_FILE: &str = "validation_rules.json";

/// The immutable inputs of a questionnaire, loaded once and shared by every session.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub questions: Catalog<Question>,
    pub tree: DecisionTree,
    pub outcomes: Catalog<Outcome>,
    pub rules: Catalog<ValidationRule>,
}

impl Dataset {
    pub fn new(
        questions: Catalog<Question>,
        tree: DecisionTree,
        outcomes: Catalog<Outcome>,
        rules: Catalog<ValidationRule>,
    ) -> Self {
        Self {
            questions,
            tree,
            outcomes,
            rules,
        }
    }

    /// Parses the four collections from JSON text. Validation rules are optional.
    pub fn from_json_strs(
        questions_json: &str,
        tree_json: &str,
        outcomes_json: &str,
        rules_json: Option<&str>,
    ) -> Result<Self, DatasetError> {
        let questions = parse(QUESTIONS_FILE, questions_json)?;
        let tree = parse(DECISION_TREE_FILE, tree_json)?;
        let outcomes = parse(OUTCOMES_FILE, outcomes_json)?;
        let rules = match rules_json {
            Some(json) => parse(VALIDATION_RULES_FILE, json)?,
            None => Catalog::new(),
        };
        Ok(Self::new(questions, tree, outcomes, rules))
    }

    /// Loads a dataset directory containing `questions.json`, `decision_tree.json`,
    /// `outcomes.json` and, optionally, `validation_rules.json`.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let dir = dir.as_ref();
        let questions = read(&dir.join(QUESTIONS_FILE))?;
        let tree = read(&dir.join(DECISION_TREE_FILE))?;
        let outcomes = read(&dir.join(OUTCOMES_FILE))?;

        let rules_path = dir.join(VALIDATION_RULES_FILE);
        let rules = if rules_path.exists() {
            Some(read(&rules_path)?)
        } else {
            None
        };

        let dataset = Self::from_json_strs(&questions, &tree, &outcomes, rules.as_deref())?;
        tracing::debug!(
            dir = %dir.display(),
            questions = dataset.questions.len(),
            nodes = dataset.tree.nodes.len(),
            outcomes = dataset.outcomes.len(),
            rules = dataset.rules.len(),
            "Dataset loaded"
        );
        Ok(dataset)
    }

    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.get(id)
    }

    pub fn node(&self, id: &str) -> Option<&DecisionNode> {
        self.tree.node(id)
    }

    pub fn rule(&self, question_id: &str) -> Option<&ValidationRule> {
        self.rules.get(question_id)
    }

    /// Reports structural problems in the decision tree without rejecting it.
    pub fn lint(&self, terminal_node: &str) -> Vec<IntegrityIssue> {
        lint::lint(self, terminal_node)
    }
}

fn read(path: &Path) -> Result<String, DatasetError> {
    fs::read_to_string(path).map_err(|e| DatasetError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

fn parse<T: DeserializeOwned>(file: &str, json: &str) -> Result<T, DatasetError> {
    serde_json::from_str(json).map_err(|e| DatasetError::JsonParse {
        file: file.to_string(),
        message: e.to_string(),
    })
}
