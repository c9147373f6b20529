use super::Dataset;
use thiserror::Error;

/// A structural problem found in a decision tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntegrityIssue {
    #[error("Start node '{0}' is not defined")]
    MissingStartNode(String),

    #[error("Start node '{0}' is a hub and would be shown without a question")]
    HubStartNode(String),

    #[error("Node '{node_id}' routes to undefined node '{target}'")]
    DanglingRoute { node_id: String, target: String },

    #[error("Node '{node_id}' asks undefined question '{question_id}'")]
    MissingQuestion { node_id: String, question_id: String },

    #[error("Node '{node_id}' has no unconditional route and may fail to route")]
    NoDefaultRoute { node_id: String },

    #[error("Node '{node_id}' sets flags for option {index}, but its question has {options} options")]
    AnswerFlagOutOfRange {
        node_id: String,
        index: usize,
        options: usize,
    },
}

pub(super) fn lint(dataset: &Dataset, terminal_node: &str) -> Vec<IntegrityIssue> {
    let tree = &dataset.tree;
    let mut issues = Vec::new();

    match tree.node(&tree.start_node) {
        None if tree.start_node != terminal_node => {
            issues.push(IntegrityIssue::MissingStartNode(tree.start_node.clone()));
        }
        Some(node) if node.is_hub() => {
            issues.push(IntegrityIssue::HubStartNode(tree.start_node.clone()));
        }
        _ => {}
    }

    for node in &tree.nodes {
        for route in &node.routes {
            if route.go_to != terminal_node && !tree.nodes.contains(&route.go_to) {
                issues.push(IntegrityIssue::DanglingRoute {
                    node_id: node.id.clone(),
                    target: route.go_to.clone(),
                });
            }
        }

        if !node.routes.iter().any(|r| r.is_default()) {
            issues.push(IntegrityIssue::NoDefaultRoute {
                node_id: node.id.clone(),
            });
        }

        if node.is_hub() {
            continue;
        }

        match dataset.question(&node.question_id) {
            None => issues.push(IntegrityIssue::MissingQuestion {
                node_id: node.id.clone(),
                question_id: node.question_id.clone(),
            }),
            Some(question) => {
                let mut indices: Vec<usize> = node.answer_flags.keys().copied().collect();
                indices.sort_unstable();
                for index in indices {
                    if index >= question.options.len() {
                        issues.push(IntegrityIssue::AnswerFlagOutOfRange {
                            node_id: node.id.clone(),
                            index,
                            options: question.options.len(),
                        });
                    }
                }
            }
        }
    }

    issues
}
