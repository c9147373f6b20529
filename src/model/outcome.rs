use super::Keyed;
use serde::{Deserialize, Serialize};

/// The result bucket an outcome is grouped into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StructureLevel {
    Role,
    RiskLevel,
    Obligation,
}

/// A possible result of the questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    #[serde(default)]
    pub id: String,
    pub structure_level: StructureLevel,
    /// Higher weights are shown first within a structure level.
    #[serde(default)]
    pub priority_weight: i32,
    #[serde(default)]
    pub risk_level: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub articles: Vec<u32>,
    /// Structural placeholder that is never displayed.
    #[serde(default)]
    pub is_empty: bool,
    /// Flag that activates this outcome. Defaults to the outcome id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag: Option<String>,
}

impl Outcome {
    pub fn trigger_flag(&self) -> &str {
        self.flag.as_deref().unwrap_or(&self.id)
    }
}

impl Keyed for Outcome {
    fn key(&self) -> &str {
        &self.id
    }

    fn assign_key(&mut self, key: String) {
        self.id = key;
    }
}
