//! Tests for outcome selection, grouping and ordering.
mod common;
use common::*;
use shindan::aggregate::{applicable_articles, group_by_level, primary_risk_level};
use shindan::prelude::*;

fn ids(outcomes: &[Outcome]) -> Vec<&str> {
    outcomes.iter().map(|o| o.id.as_str()).collect()
}

#[test]
fn test_group_by_level_orders_by_weight() {
    let outcomes = vec![
        outcome("role", StructureLevel::Role, 5),
        outcome("low", StructureLevel::RiskLevel, 10),
        outcome("high", StructureLevel::RiskLevel, 50),
    ];

    let grouped = group_by_level(outcomes);
    assert_eq!(ids(&grouped.role), vec!["role"]);
    assert_eq!(ids(&grouped.risk_level), vec!["high", "low"]);
    assert!(grouped.obligation.is_empty());
    assert_eq!(grouped.len(), 3);
}

#[test]
fn test_group_by_level_is_stable_for_equal_weights() {
    let outcomes = vec![
        outcome("first", StructureLevel::Obligation, 10),
        outcome("heavy", StructureLevel::Obligation, 40),
        outcome("second", StructureLevel::Obligation, 10),
        outcome("third", StructureLevel::Obligation, 10),
    ];

    let grouped = group_by_level(outcomes);
    assert_eq!(
        ids(&grouped.obligation),
        vec!["heavy", "first", "second", "third"]
    );
}

#[test]
fn test_group_by_level_of_nothing_has_three_empty_buckets() {
    let grouped = group_by_level(Vec::new());
    assert!(grouped.role.is_empty());
    assert!(grouped.risk_level.is_empty());
    assert!(grouped.obligation.is_empty());
    assert!(grouped.is_empty());
}

#[test]
fn test_active_outcomes_skip_empty_markers() {
    let dataset = create_dataset();
    let aggregator = OutcomeAggregator::new(&dataset.outcomes, "system_role");
    let current = flags(&[("minimal_risk", FlagValue::Bool(true))]);

    let active = aggregator.active_outcomes(&current);
    assert_eq!(ids(&active), vec!["minimal_risk"]);
}

#[test]
fn test_active_outcomes_need_boolean_true() {
    let dataset = create_dataset();
    let aggregator = OutcomeAggregator::new(&dataset.outcomes, "system_role");
    let current = flags(&[
        ("high_risk", FlagValue::from("true")),
        ("prohibited", FlagValue::Bool(false)),
        ("transparency", FlagValue::Bool(true)),
    ]);

    assert_eq!(ids(&aggregator.active_outcomes(&current)), vec!["transparency"]);
}

#[test]
fn test_role_flag_adds_role_outcome_once() {
    let dataset = create_dataset();
    let aggregator = OutcomeAggregator::new(&dataset.outcomes, "system_role");

    let current = flags(&[
        ("system_role", FlagValue::from("deployer")),
        ("high_risk", FlagValue::Bool(true)),
    ]);
    assert_eq!(
        ids(&aggregator.active_outcomes(&current)),
        vec!["high_risk", "role_deployer"]
    );

    let current = flags(&[
        ("system_role", FlagValue::from("provider")),
        ("role_provider", FlagValue::Bool(true)),
    ]);
    assert_eq!(
        ids(&aggregator.active_outcomes(&current)),
        vec!["role_provider"]
    );
}

#[test]
fn test_unknown_or_missing_roles_are_ignored() {
    let dataset = create_dataset();
    let aggregator = OutcomeAggregator::new(&dataset.outcomes, "system_role");

    let current = flags(&[("system_role", FlagValue::from("regulator"))]);
    assert!(aggregator.active_outcomes(&current).is_empty());

    // Known role, but the fixture defines no distributor outcome.
    let current = flags(&[("system_role", FlagValue::from("distributor"))]);
    assert!(aggregator.active_outcomes(&current).is_empty());
}

#[test]
fn test_primary_risk_level_follows_fixed_priority() {
    let mut general = outcome("a", StructureLevel::RiskLevel, 90);
    general.risk_level = "general".to_string();
    let mut high = outcome("b", StructureLevel::RiskLevel, 10);
    high.risk_level = "high_risk".to_string();
    let mut role = outcome("c", StructureLevel::Role, 5);
    role.risk_level = "role_classification".to_string();

    assert_eq!(
        primary_risk_level(&[general.clone(), high.clone(), role.clone()]),
        "high_risk"
    );
    assert_eq!(primary_risk_level(&[role.clone(), general]), "general");
    assert_eq!(primary_risk_level(&[role]), "role_classification");
    assert_eq!(primary_risk_level(&[]), "general");

    let mut unknown = outcome("d", StructureLevel::RiskLevel, 1);
    unknown.risk_level = "experimental".to_string();
    assert_eq!(primary_risk_level(&[unknown]), "general");
}

#[test]
fn test_applicable_articles_are_sorted_and_unique() {
    let mut a = outcome("a", StructureLevel::RiskLevel, 1);
    a.articles = vec![9, 6];
    let mut b = outcome("b", StructureLevel::Obligation, 1);
    b.articles = vec![17, 9, 16];
    let c = outcome("c", StructureLevel::Role, 1);

    assert_eq!(applicable_articles(&[a, b, c]), vec![6, 9, 16, 17]);
    assert!(applicable_articles(&[]).is_empty());
}

#[test]
fn test_result_view_for_flags() {
    let dataset = create_dataset();
    let aggregator = OutcomeAggregator::new(&dataset.outcomes, "system_role");
    let current = flags(&[
        ("system_role", FlagValue::from("importer")),
        ("prohibited", FlagValue::Bool(true)),
        ("transparency", FlagValue::Bool(true)),
    ]);

    let view = aggregator.result_view(&current);
    assert_eq!(view.primary_risk_level, "prohibited");
    assert_eq!(view.applicable_articles, vec![5, 23, 50]);
    assert_eq!(ids(&view.grouped_outcomes.role), vec!["role_importer"]);
    assert_eq!(ids(&view.grouped_outcomes.risk_level), vec!["prohibited"]);
    assert_eq!(ids(&view.grouped_outcomes.obligation), vec!["transparency"]);
}
