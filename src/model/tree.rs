use super::{Catalog, Condition, FlagCondition, FlagValue, Keyed, SetFlag};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Radio,
    Checkbox,
    Hub,
}

/// An ordered alternative of a node: where to go, when, and which flags to set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<Condition>,
    pub go_to: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub set_flags: Vec<SetFlag>,
}

impl Route {
    /// A route without conditions always matches.
    pub fn is_default(&self) -> bool {
        self.conditions
            .iter()
            .all(|c| matches!(c, Condition::Always))
    }
}

/// A flag assignment attached to a specific answer option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagSetting {
    pub flag: String,
    pub value: FlagValue,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<FlagCondition>,
}

/// A point in the decision tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionNode {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub question_id: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub routes: Vec<Route>,
    /// Flags set by individual options, keyed by option index.
    #[serde(default)]
    pub answer_flags: AHashMap<usize, Vec<FlagSetting>>,
}

impl DecisionNode {
    /// Hubs carry no user-facing question and are evaluated on flags alone.
    pub fn is_hub(&self) -> bool {
        self.kind == NodeKind::Hub || self.question_id.contains("hub")
    }
}

impl Keyed for DecisionNode {
    fn key(&self) -> &str {
        &self.id
    }

    fn assign_key(&mut self, key: String) {
        self.id = key;
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DecisionTree {
    pub start_node: String,
    pub nodes: Catalog<DecisionNode>,
}

impl DecisionTree {
    pub fn node(&self, id: &str) -> Option<&DecisionNode> {
        self.nodes.get(id)
    }
}
