use crate::dataset::Dataset;
use crate::error::EngineError;
use crate::model::{DecisionNode, Flags, SetFlag, merge_flags};
use serde::{Deserialize, Serialize};

pub mod condition;
pub mod hub;
pub mod routing;

pub use condition::{evaluate, evaluate_all};
pub use hub::{HubResolution, resolve_hubs};
pub use routing::{RouteDecision, answer_flags, combine_flags, route};

/// Node id marking the end of the questionnaire.
pub const TERMINAL_NODE: &str = "END";
/// Upper bound on consecutive hub hops before the chain is considered cyclic.
pub const DEFAULT_MAX_HUB_HOPS: usize = 50;
/// Flag whose string value names the user's role.
pub const DEFAULT_ROLE_FLAG: &str = "system_role";

/// What happens to flags when the user navigates back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagRollback {
    /// Flags return to their value before the undone step.
    #[default]
    Restore,
    /// Flags stay cumulative; only the position is rewound.
    Retain,
}

/// Tunables shared by the engine, the session and the aggregator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub terminal_node: String,
    pub max_hub_hops: usize,
    pub role_flag: String,
    pub flag_rollback: FlagRollback,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            terminal_node: TERMINAL_NODE.to_string(),
            max_hub_hops: DEFAULT_MAX_HUB_HOPS,
            role_flag: DEFAULT_ROLE_FLAG.to_string(),
            flag_rollback: FlagRollback::default(),
        }
    }
}

/// The outcome of answering one node: where to go next and every flag to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub next_node: String,
    /// Answer flags, then route flags, then hub flags; apply in order.
    pub flags: Vec<SetFlag>,
    pub hub_hops: usize,
}

/// Computes transitions over a dataset. Holds no state of its own.
pub struct Engine<'a> {
    dataset: &'a Dataset,
    config: &'a EngineConfig,
}

impl<'a> Engine<'a> {
    pub fn new(dataset: &'a Dataset, config: &'a EngineConfig) -> Self {
        Self { dataset, config }
    }

    pub fn node(&self, node_id: &str, source_node_id: &str) -> Result<&'a DecisionNode, EngineError> {
        self.dataset
            .node(node_id)
            .ok_or_else(|| EngineError::NodeNotFound {
                missing_node_id: node_id.to_string(),
                source_node_id: source_node_id.to_string(),
            })
    }

    pub fn resolve_hubs(&self, start: &str, flags: &Flags) -> Result<HubResolution, EngineError> {
        resolve_hubs(
            &self.dataset.tree,
            start,
            flags,
            &self.config.terminal_node,
            self.config.max_hub_hops,
        )
    }

    /// Routes `node` for `selection`, then fast-forwards through any hubs.
    pub fn transition(
        &self,
        node: &DecisionNode,
        selection: &[usize],
        flags: &Flags,
    ) -> Result<Transition, EngineError> {
        let decision = route(node, selection, flags).ok_or_else(|| EngineError::NoMatchingRoute {
            node_id: node.id.clone(),
        })?;
        if decision.next_node != self.config.terminal_node {
            self.node(decision.next_node, &node.id)?;
        }

        let mut combined = combine_flags(answer_flags(node, selection, flags), &decision);
        let mut working = flags.clone();
        merge_flags(&mut working, &combined);

        let resolution = self.resolve_hubs(decision.next_node, &working)?;
        combined.extend(resolution.accumulated_flags);

        tracing::debug!(
            node = %node.id,
            route = decision.route_index,
            next = %resolution.final_node,
            hub_hops = resolution.hops,
            flags_set = combined.len(),
            "Transition computed"
        );

        Ok(Transition {
            next_node: resolution.final_node,
            flags: combined,
            hub_hops: resolution.hops,
        })
    }
}
