use thiserror::Error;

/// Errors raised while navigating the decision tree at runtime.
///
/// Everything except `SessionComplete` and `NotComplete` signals a broken dataset
/// and cannot be recovered from by resubmitting an answer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Node '{node_id}' has no route matching the current answer and flags")]
    NoMatchingRoute { node_id: String },

    #[error("Node '{missing_node_id}' not found, which is required by '{source_node_id}'")]
    NodeNotFound {
        missing_node_id: String,
        source_node_id: String,
    },

    #[error("Question '{question_id}' referenced by node '{node_id}' is not defined")]
    QuestionNotFound { question_id: String, node_id: String },

    #[error(
        "Hub chain starting at '{start_node_id}' exceeded {max_hops} hops (last node '{last_node_id}')"
    )]
    HubChainExceeded {
        start_node_id: String,
        last_node_id: String,
        max_hops: usize,
    },

    #[error("The questionnaire is already complete")]
    SessionComplete,

    #[error("Results are only available once the questionnaire is complete")]
    NotComplete,
}

/// Errors that can occur while loading the static datasets.
#[derive(Error, Debug, Clone)]
pub enum DatasetError {
    #[error("Could not read '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse {file}: {message}")]
    JsonParse { file: String, message: String },
}

/// A routing condition that does not describe exactly one predicate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConditionError {
    #[error("Condition combines several predicates ({0}); exactly one is allowed")]
    Ambiguous(String),

    #[error("Flag condition on '{0}' has no 'equals' value")]
    MissingFlagValue(String),

    #[error("Condition has an 'equals' value but no 'flag' name")]
    MissingFlagName,
}

/// A user-correctable problem with a proposed answer.
#[derive(Error, Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub enum ValidationError {
    #[error("This question requires an answer")]
    Required,

    #[error("Only one option may be selected")]
    MultipleForSingleChoice,

    #[error("Select at least {min} option(s), {actual} selected")]
    TooFewSelections { min: usize, actual: usize },

    #[error("Select at most {max} option(s), {actual} selected")]
    TooManySelections { max: usize, actual: usize },

    #[error("'{option}' cannot be combined with other options")]
    ExclusiveCombined { option: String },
}
