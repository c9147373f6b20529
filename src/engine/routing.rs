use super::condition::evaluate_all;
use crate::model::{DecisionNode, Flags, SetFlag};

/// The route chosen for a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDecision<'a> {
    /// Position of the winning route in the node's declaration order.
    pub route_index: usize,
    pub next_node: &'a str,
    pub flags_to_set: &'a [SetFlag],
}

/// Returns the first route, in declaration order, whose conditions all hold.
///
/// `None` means the tree is malformed: the node has no route for this input and
/// no unconditional fallback.
pub fn route<'a>(
    node: &'a DecisionNode,
    selection: &[usize],
    flags: &Flags,
) -> Option<RouteDecision<'a>> {
    node.routes
        .iter()
        .enumerate()
        .find(|(_, route)| evaluate_all(&route.conditions, selection, flags))
        .map(|(route_index, route)| RouteDecision {
            route_index,
            next_node: &route.go_to,
            flags_to_set: &route.set_flags,
        })
}

/// Collects the flags attached to the selected options, in selection order.
///
/// A setting guarded by flag conditions is only applied when all of them hold
/// against `current_flags`.
pub fn answer_flags(node: &DecisionNode, selection: &[usize], current_flags: &Flags) -> Vec<SetFlag> {
    selection
        .iter()
        .filter_map(|index| node.answer_flags.get(index))
        .flatten()
        .filter(|setting| {
            setting
                .conditions
                .iter()
                .all(|c| current_flags.get(&c.flag) == Some(&c.equals))
        })
        .map(|setting| SetFlag {
            flag: setting.flag.clone(),
            value: setting.value.clone(),
        })
        .collect()
}

/// Per-answer flags first, then the route's flags, so the route wins on conflicts.
pub fn combine_flags(answer_flags: Vec<SetFlag>, decision: &RouteDecision<'_>) -> Vec<SetFlag> {
    let mut combined = answer_flags;
    combined.extend_from_slice(decision.flags_to_set);
    combined
}
