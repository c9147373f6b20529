//! Turns the flags accumulated by a finished session into a result view.

use crate::model::{Catalog, Flags, Outcome, StructureLevel};
use itertools::Itertools;
use serde::Serialize;

/// Role names accepted in the system-role flag and the outcome each one activates.
pub const ROLE_OUTCOMES: [(&str, &str); 6] = [
    ("provider", "role_provider"),
    ("deployer", "role_deployer"),
    ("importer", "role_importer"),
    ("distributor", "role_distributor"),
    ("authorised_representative", "role_authorised_representative"),
    ("product_manufacturer", "role_product_manufacturer"),
];

/// Risk labels from most to least significant.
pub const RISK_LEVEL_PRIORITY: [&str; 10] = [
    "prohibited",
    "systemic_risk",
    "high_risk",
    "obligations",
    "transparency_obligations",
    "open_source_exception",
    "general",
    "out_of_scope",
    "not_applicable",
    "role_classification",
];

pub const DEFAULT_RISK_LEVEL: &str = "general";

/// Active outcomes partitioned by structure level, each bucket ordered by weight.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GroupedOutcomes {
    pub role: Vec<Outcome>,
    pub risk_level: Vec<Outcome>,
    pub obligation: Vec<Outcome>,
}

impl GroupedOutcomes {
    pub fn len(&self) -> usize {
        self.role.len() + self.risk_level.len() + self.obligation.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Everything a presentation layer needs to show the final result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultView {
    pub grouped_outcomes: GroupedOutcomes,
    pub primary_risk_level: String,
    pub applicable_articles: Vec<u32>,
}

/// Selects outcomes from a flag set.
pub struct OutcomeAggregator<'a> {
    outcomes: &'a Catalog<Outcome>,
    role_flag: &'a str,
}

impl<'a> OutcomeAggregator<'a> {
    pub fn new(outcomes: &'a Catalog<Outcome>, role_flag: &'a str) -> Self {
        Self {
            outcomes,
            role_flag,
        }
    }

    /// Outcomes whose flag is `true`, in declaration order, followed by the
    /// outcome named by the system-role flag if it is not already present.
    /// Empty outcomes are never returned.
    pub fn active_outcomes(&self, flags: &Flags) -> Vec<Outcome> {
        let mut active: Vec<Outcome> = self
            .outcomes
            .iter()
            .filter(|o| !o.is_empty)
            .filter(|o| flags.get(o.trigger_flag()).is_some_and(|v| v.is_true()))
            .cloned()
            .collect();

        let role_outcome = flags
            .get(self.role_flag)
            .and_then(|v| v.as_text())
            .and_then(|role| ROLE_OUTCOMES.iter().find(|(name, _)| *name == role))
            .map(|(_, outcome_id)| *outcome_id);

        if let Some(outcome_id) = role_outcome {
            match self.outcomes.get(outcome_id) {
                Some(outcome) if outcome.is_empty => {}
                Some(outcome) if !active.iter().any(|o| o.id == outcome.id) => {
                    active.push(outcome.clone());
                }
                Some(_) => {}
                None => tracing::debug!(outcome = outcome_id, "Role outcome not in dataset"),
            }
        }

        active
    }

    /// Builds the full result view for a final flag set.
    pub fn result_view(&self, flags: &Flags) -> ResultView {
        let active = self.active_outcomes(flags);
        let primary_risk_level = primary_risk_level(&active).to_string();
        let applicable_articles = applicable_articles(&active);
        ResultView {
            grouped_outcomes: group_by_level(active),
            primary_risk_level,
            applicable_articles,
        }
    }
}

/// Partitions outcomes into the three structure levels, highest weight first.
/// Equal weights keep their incoming order.
pub fn group_by_level(outcomes: Vec<Outcome>) -> GroupedOutcomes {
    let mut grouped = GroupedOutcomes::default();
    for outcome in outcomes {
        match outcome.structure_level {
            StructureLevel::Role => grouped.role.push(outcome),
            StructureLevel::RiskLevel => grouped.risk_level.push(outcome),
            StructureLevel::Obligation => grouped.obligation.push(outcome),
        }
    }
    for bucket in [
        &mut grouped.role,
        &mut grouped.risk_level,
        &mut grouped.obligation,
    ] {
        bucket.sort_by(|a, b| b.priority_weight.cmp(&a.priority_weight));
    }
    grouped
}

/// The most significant risk label carried by any outcome.
pub fn primary_risk_level(outcomes: &[Outcome]) -> &'static str {
    RISK_LEVEL_PRIORITY
        .iter()
        .find(|label| outcomes.iter().any(|o| o.risk_level == **label))
        .copied()
        .unwrap_or(DEFAULT_RISK_LEVEL)
}

/// Every article referenced by the outcomes, ascending and without duplicates.
pub fn applicable_articles(outcomes: &[Outcome]) -> Vec<u32> {
    outcomes
        .iter()
        .flat_map(|o| o.articles.iter().copied())
        .sorted_unstable()
        .dedup()
        .collect()
}
