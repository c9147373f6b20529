use super::FlagValue;
use crate::error::ConditionError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single routing predicate.
///
/// The datasets describe conditions as an object with optional fields
/// (`answer_is`, `exact_match`, `any_in`, `none_in`, `flag` + `equals`).
/// They are converted into this closed form when deserialized, so the
/// evaluator can dispatch with one exhaustive `match`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCondition", into = "RawCondition")]
pub enum Condition {
    /// The selection contains this option index.
    AnswerIs(usize),
    /// The selection holds exactly these indices, in any order.
    ExactMatch(Vec<usize>),
    /// The selection shares at least one index with this set.
    AnyIn(Vec<usize>),
    /// The selection shares no index with this set.
    NoneIn(Vec<usize>),
    /// The named flag holds exactly this value.
    FlagEquals { flag: String, value: FlagValue },
    /// No predicate at all; used by default routes.
    Always,
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::AnswerIs(i) => write!(f, "answer is {}", i),
            Condition::ExactMatch(set) => write!(f, "answers are exactly {:?}", set),
            Condition::AnyIn(set) => write!(f, "any answer in {:?}", set),
            Condition::NoneIn(set) => write!(f, "no answer in {:?}", set),
            Condition::FlagEquals { flag, value } => write!(f, "${} == {}", flag, value),
            Condition::Always => write!(f, "always"),
        }
    }
}

/// Wire form of a condition, as found in the decision tree JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawCondition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer_is: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exact_match: Option<Vec<usize>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub any_in: Option<Vec<usize>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub none_in: Option<Vec<usize>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equals: Option<FlagValue>,
}

impl TryFrom<RawCondition> for Condition {
    type Error = ConditionError;

    fn try_from(raw: RawCondition) -> Result<Self, Self::Error> {
        let mut present = Vec::new();
        if raw.answer_is.is_some() {
            present.push("answer_is");
        }
        if raw.exact_match.is_some() {
            present.push("exact_match");
        }
        if raw.any_in.is_some() {
            present.push("any_in");
        }
        if raw.none_in.is_some() {
            present.push("none_in");
        }
        if raw.flag.is_some() || raw.equals.is_some() {
            present.push("flag");
        }
        if present.len() > 1 {
            return Err(ConditionError::Ambiguous(present.join(", ")));
        }

        let condition = match raw {
            RawCondition {
                answer_is: Some(index),
                ..
            } => Condition::AnswerIs(index),
            RawCondition {
                exact_match: Some(set),
                ..
            } => Condition::ExactMatch(set),
            RawCondition {
                any_in: Some(set), ..
            } => Condition::AnyIn(set),
            RawCondition {
                none_in: Some(set),
                ..
            } => Condition::NoneIn(set),
            RawCondition {
                flag: Some(flag),
                equals: Some(value),
                ..
            } => Condition::FlagEquals { flag, value },
            RawCondition {
                flag: Some(flag),
                equals: None,
                ..
            } => return Err(ConditionError::MissingFlagValue(flag)),
            RawCondition {
                flag: None,
                equals: Some(_),
                ..
            } => return Err(ConditionError::MissingFlagName),
            _ => Condition::Always,
        };
        Ok(condition)
    }
}

impl From<Condition> for RawCondition {
    fn from(condition: Condition) -> Self {
        match condition {
            Condition::AnswerIs(index) => RawCondition {
                answer_is: Some(index),
                ..Default::default()
            },
            Condition::ExactMatch(set) => RawCondition {
                exact_match: Some(set),
                ..Default::default()
            },
            Condition::AnyIn(set) => RawCondition {
                any_in: Some(set),
                ..Default::default()
            },
            Condition::NoneIn(set) => RawCondition {
                none_in: Some(set),
                ..Default::default()
            },
            Condition::FlagEquals { flag, value } => RawCondition {
                flag: Some(flag),
                equals: Some(value),
                ..Default::default()
            },
            Condition::Always => RawCondition::default(),
        }
    }
}

/// A flag-only guard attached to a per-answer flag setting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagCondition {
    pub flag: String,
    pub equals: FlagValue,
}
