use crate::engine::FlagRollback;
use crate::model::{Answers, Flags, SetFlag, merge_flags};
use serde::{Deserialize, Serialize};

/// What the session looked like right before a forward step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub node_id: String,
    pub selection: Vec<usize>,
    pub flags_before: Flags,
}

/// The complete, serializable state of one questionnaire session.
///
/// Every operation takes `&self` and returns a new state, so earlier states stay
/// valid and can be compared or kept around.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardState {
    start_node: String,
    terminal_node: String,
    current_node: String,
    answers: Answers,
    flags: Flags,
    history: Vec<String>,
    is_complete: bool,
    snapshots: Vec<Snapshot>,
}

impl WizardState {
    pub fn new(start_node: impl Into<String>, terminal_node: impl Into<String>) -> Self {
        let start_node = start_node.into();
        let terminal_node = terminal_node.into();
        Self {
            is_complete: start_node == terminal_node,
            current_node: start_node.clone(),
            start_node,
            terminal_node,
            answers: Answers::new(),
            flags: Flags::new(),
            history: Vec::new(),
            snapshots: Vec::new(),
        }
    }

    pub fn current_node(&self) -> &str {
        &self.current_node
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    pub fn answer(&self, question_id: &str) -> Option<&[usize]> {
        self.answers.get(question_id).map(Vec::as_slice)
    }

    pub fn flags(&self) -> &Flags {
        &self.flags
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    pub fn can_go_back(&self) -> bool {
        !self.snapshots.is_empty()
    }

    /// Upserts the selection for a question.
    pub fn record_answer(&self, question_id: &str, selection: &[usize]) -> Self {
        let mut next = self.clone();
        next.answers
            .insert(question_id.to_string(), selection.to_vec());
        next
    }

    /// Merges flags, last write wins per name.
    pub fn apply_flags(&self, updates: &[SetFlag]) -> Self {
        let mut next = self.clone();
        merge_flags(&mut next.flags, updates);
        next
    }

    /// Moves to `node_id` and recomputes completion.
    pub fn commit(&self, node_id: &str) -> Self {
        let mut next = self.clone();
        next.current_node = node_id.to_string();
        next.is_complete = next.current_node == next.terminal_node;
        next
    }

    /// Records an undo point for the step leaving `node_id`.
    pub fn push_snapshot(&self, node_id: &str, selection: &[usize], flags_before: &Flags) -> Self {
        let mut next = self.clone();
        next.snapshots.push(Snapshot {
            node_id: node_id.to_string(),
            selection: selection.to_vec(),
            flags_before: flags_before.clone(),
        });
        next.history.push(node_id.to_string());
        next
    }

    /// Undoes the most recent step, or returns `None` when there is nothing to undo.
    pub fn go_back(&self, rollback: FlagRollback) -> Option<Self> {
        let mut next = self.clone();
        let snapshot = next.snapshots.pop()?;
        next.history.pop();
        next.current_node = snapshot.node_id;
        if rollback == FlagRollback::Restore {
            next.flags = snapshot.flags_before;
        }
        next.is_complete = false;
        Some(next)
    }

    /// A fresh state at the start node.
    pub fn reset(&self) -> Self {
        Self::new(self.start_node.clone(), self.terminal_node.clone())
    }
}
