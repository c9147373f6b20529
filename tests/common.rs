//! Common test utilities for building datasets, nodes and outcomes.
use shindan::prelude::*;

/// A small classification questionnaire.
///
/// Flow: entity -> (AI model) gpai -> END
///                 (AI system) role -> practices -> hub_risk -> [hub_obligations] -> END
#[allow(dead_code)]
pub const QUESTIONS_JSON: &str = r#"{
    "q_entity": {
        "type": "single_choice",
        "text": "What are you placing on the market?",
        "required": true,
        "options": [
            { "id": "model", "text": "AI model" },
            { "id": "system", "text": "AI system" }
        ]
    },
    "q_gpai": {
        "type": "single_choice",
        "text": "Does the model have high-impact capabilities?",
        "required": true,
        "options": [
            { "id": "yes", "text": "Yes" },
            { "id": "no", "text": "No" }
        ]
    },
    "q_role": {
        "type": "single_choice",
        "text": "What is your role?",
        "required": true,
        "options": [
            { "id": "provider", "text": "Provider" },
            { "id": "deployer", "text": "Deployer" },
            { "id": "importer", "text": "Importer" }
        ]
    },
    "q_practices": {
        "type": "multiple_choice",
        "text": "Which practices apply?",
        "required": true,
        "options": [
            { "id": "scoring", "text": "Social scoring" },
            { "id": "biometric", "text": "Biometric identification" },
            { "id": "emotion", "text": "Emotion recognition" },
            { "id": "none", "text": "None of the above", "exclusive": true }
        ]
    }
}"#;

#[allow(dead_code)]
pub const TREE_JSON: &str = r#"{
    "start_node": "n_entity",
    "nodes": {
        "n_entity": {
            "question_id": "q_entity",
            "type": "radio",
            "routes": [
                { "conditions": [{ "answer_is": 0 }], "go_to": "n_gpai",
                  "set_flags": [{ "flag": "is_gpai", "value": true }] },
                { "conditions": [{ "answer_is": 1 }], "go_to": "n_role" }
            ]
        },
        "n_gpai": {
            "question_id": "q_gpai",
            "type": "radio",
            "routes": [
                { "conditions": [{ "answer_is": 0 }], "go_to": "END",
                  "set_flags": [{ "flag": "systemic_risk", "value": true }] },
                { "go_to": "END", "set_flags": [{ "flag": "gpai_general", "value": true }] }
            ]
        },
        "n_role": {
            "question_id": "q_role",
            "type": "radio",
            "answer_flags": {
                "0": [{ "flag": "system_role", "value": "provider" }],
                "1": [{ "flag": "system_role", "value": "deployer" }],
                "2": [{ "flag": "system_role", "value": "importer" }]
            },
            "routes": [{ "go_to": "n_practices" }]
        },
        "n_practices": {
            "question_id": "q_practices",
            "type": "checkbox",
            "answer_flags": {
                "0": [{ "flag": "prohibited", "value": true }],
                "1": [{ "flag": "high_risk", "value": true,
                        "conditions": [{ "flag": "system_role", "equals": "provider" }] }],
                "2": [{ "flag": "transparency", "value": true }]
            },
            "routes": [
                { "conditions": [{ "any_in": [0] }], "go_to": "hub_risk" },
                { "conditions": [{ "exact_match": [1, 2] }], "go_to": "hub_risk",
                  "set_flags": [{ "flag": "transparency", "value": false }] },
                { "go_to": "hub_risk" }
            ]
        },
        "hub_risk": {
            "type": "hub",
            "routes": [
                { "conditions": [{ "flag": "prohibited", "equals": true }], "go_to": "END" },
                { "conditions": [{ "flag": "high_risk", "equals": true }], "go_to": "hub_obligations",
                  "set_flags": [{ "flag": "high_risk_obligations", "value": true }] },
                { "go_to": "END", "set_flags": [{ "flag": "minimal_risk", "value": true }] }
            ]
        },
        "hub_obligations": {
            "question_id": "hub_obligations",
            "type": "radio",
            "routes": [
                { "conditions": [{ "flag": "high_risk_obligations", "equals": true }], "go_to": "END",
                  "set_flags": [{ "flag": "quality_management", "value": true }] },
                { "go_to": "END" }
            ]
        }
    }
}"#;

#[allow(dead_code)]
pub const OUTCOMES_JSON: &str = r##"{
    "role_provider": { "structure_level": "role", "priority_weight": 5,
                       "risk_level": "role_classification", "articles": [16] },
    "role_deployer": { "structure_level": "role", "priority_weight": 5,
                       "risk_level": "role_classification", "articles": [26] },
    "role_importer": { "structure_level": "role", "priority_weight": 5,
                       "risk_level": "role_classification", "articles": [23] },
    "prohibited": { "structure_level": "risk_level", "priority_weight": 100,
                    "risk_level": "prohibited", "color": "#b00020", "articles": [5] },
    "high_risk": { "structure_level": "risk_level", "priority_weight": 50,
                   "risk_level": "high_risk", "articles": [6, 9] },
    "systemic_risk": { "structure_level": "risk_level", "priority_weight": 60,
                       "risk_level": "systemic_risk", "articles": [51, 55] },
    "gpai_general": { "structure_level": "risk_level", "priority_weight": 20,
                      "risk_level": "obligations", "articles": [53] },
    "minimal_risk": { "structure_level": "risk_level", "priority_weight": 10,
                      "risk_level": "general", "articles": [95] },
    "transparency": { "structure_level": "obligation", "priority_weight": 10,
                      "risk_level": "transparency_obligations", "articles": [50] },
    "high_risk_obligations": { "structure_level": "obligation", "priority_weight": 30,
                               "risk_level": "obligations", "articles": [9, 16, 17] },
    "quality_management": { "structure_level": "obligation", "priority_weight": 30,
                            "risk_level": "obligations", "articles": [17] },
    "minimal_placeholder": { "structure_level": "obligation", "is_empty": true,
                             "flag": "minimal_risk" }
}"##;

#[allow(dead_code)]
pub const RULES_JSON: &str = r#"{
    "q_practices": { "min_selections": 1, "max_selections": 2 }
}"#;

#[allow(dead_code)]
pub fn create_dataset() -> Dataset {
    Dataset::from_json_strs(QUESTIONS_JSON, TREE_JSON, OUTCOMES_JSON, Some(RULES_JSON))
        .expect("fixture dataset should parse")
}

#[allow(dead_code)]
pub fn create_wizard() -> Wizard {
    Wizard::new(create_dataset())
}

/// A question with plain options; indices listed in `exclusive` are exclusive.
#[allow(dead_code)]
pub fn question(kind: QuestionKind, options: usize, exclusive: &[usize]) -> Question {
    Question {
        id: "q".to_string(),
        kind,
        text: String::new(),
        required: true,
        options: (0..options)
            .map(|i| AnswerOption {
                id: format!("o{}", i),
                text: format!("Option {}", i),
                exclusive: exclusive.contains(&i),
            })
            .collect(),
    }
}

#[allow(dead_code)]
pub fn route_to(go_to: &str, conditions: Vec<Condition>) -> Route {
    Route {
        conditions,
        go_to: go_to.to_string(),
        set_flags: Vec::new(),
    }
}

#[allow(dead_code)]
pub fn node(id: &str, kind: NodeKind, routes: Vec<Route>) -> DecisionNode {
    DecisionNode {
        id: id.to_string(),
        question_id: if kind == NodeKind::Hub {
            String::new()
        } else {
            format!("q_{}", id)
        },
        kind,
        routes,
        answer_flags: Default::default(),
    }
}

#[allow(dead_code)]
pub fn outcome(id: &str, level: StructureLevel, weight: i32) -> Outcome {
    Outcome {
        id: id.to_string(),
        structure_level: level,
        priority_weight: weight,
        risk_level: String::new(),
        color: String::new(),
        text: String::new(),
        articles: Vec::new(),
        is_empty: false,
        flag: None,
    }
}

#[allow(dead_code)]
pub fn flags(entries: &[(&str, FlagValue)]) -> Flags {
    entries
        .iter()
        .map(|(name, value)| (name.to_string(), value.clone()))
        .collect()
}
