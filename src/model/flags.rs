use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Value stored under a flag name. Booleans and strings never compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlagValue {
    Bool(bool),
    Text(String),
}

impl FlagValue {
    pub fn is_true(&self) -> bool {
        matches!(self, FlagValue::Bool(true))
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FlagValue::Text(s) => Some(s),
            FlagValue::Bool(_) => None,
        }
    }
}

impl fmt::Display for FlagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagValue::Bool(b) => write!(f, "{}", b),
            FlagValue::Text(s) => write!(f, "\"{}\"", s),
        }
    }
}

impl From<bool> for FlagValue {
    fn from(value: bool) -> Self {
        FlagValue::Bool(value)
    }
}

impl From<&str> for FlagValue {
    fn from(value: &str) -> Self {
        FlagValue::Text(value.to_string())
    }
}

impl From<String> for FlagValue {
    fn from(value: String) -> Self {
        FlagValue::Text(value)
    }
}

/// Accumulated flags of a session.
pub type Flags = AHashMap<String, FlagValue>;

/// Selected option indices per question id.
pub type Answers = AHashMap<String, Vec<usize>>;

/// A single flag assignment produced by a route, an answer or a hub.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetFlag {
    pub flag: String,
    pub value: FlagValue,
}

impl SetFlag {
    pub fn new(flag: impl Into<String>, value: impl Into<FlagValue>) -> Self {
        Self {
            flag: flag.into(),
            value: value.into(),
        }
    }
}

/// Applies `updates` in order; a later entry wins over an earlier one with the same name.
pub fn merge_flags(flags: &mut Flags, updates: &[SetFlag]) {
    for update in updates {
        flags.insert(update.flag.clone(), update.value.clone());
    }
}
