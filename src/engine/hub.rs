use super::routing::route;
use crate::error::EngineError;
use crate::model::{DecisionTree, Flags, SetFlag, merge_flags};

/// Where a chain of hubs ended and which flags it set along the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HubResolution {
    pub final_node: String,
    /// Flags of every hop, in the order they were applied.
    pub accumulated_flags: Vec<SetFlag>,
    pub hops: usize,
}

/// Follows hub nodes from `start` until a question node or the terminal is reached.
///
/// Each hub is routed with an empty selection. Flags set by one hop are visible
/// to the next. Passing `max_hops` hubs is reported as `HubChainExceeded`.
pub fn resolve_hubs(
    tree: &DecisionTree,
    start: &str,
    flags: &Flags,
    terminal_node: &str,
    max_hops: usize,
) -> Result<HubResolution, EngineError> {
    let mut working = flags.clone();
    let mut accumulated_flags = Vec::new();
    let mut current = start.to_string();
    let mut previous = start.to_string();
    let mut hops = 0;

    while current != terminal_node {
        let node = tree
            .node(&current)
            .ok_or_else(|| EngineError::NodeNotFound {
                missing_node_id: current.clone(),
                source_node_id: previous.clone(),
            })?;
        if !node.is_hub() {
            break;
        }

        if hops == max_hops {
            tracing::warn!(
                start = start,
                last = %current,
                max_hops = max_hops,
                "Hub chain exceeded its hop limit"
            );
            return Err(EngineError::HubChainExceeded {
                start_node_id: start.to_string(),
                last_node_id: current,
                max_hops,
            });
        }

        let decision = route(node, &[], &working).ok_or_else(|| EngineError::NoMatchingRoute {
            node_id: node.id.clone(),
        })?;
        merge_flags(&mut working, decision.flags_to_set);
        accumulated_flags.extend_from_slice(decision.flags_to_set);
        tracing::debug!(
            hub = %node.id,
            next = decision.next_node,
            route = decision.route_index,
            "Hub resolved"
        );

        previous = std::mem::replace(&mut current, decision.next_node.to_string());
        hops += 1;
    }

    Ok(HubResolution {
        final_node: current,
        accumulated_flags,
        hops,
    })
}
