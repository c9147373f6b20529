use crate::aggregate::{OutcomeAggregator, ResultView};
use crate::dataset::Dataset;
use crate::engine::{Engine, EngineConfig, FlagRollback};
use crate::error::EngineError;
use crate::model::{DecisionNode, Question};
use crate::validation::{ValidationResult, validate};
use std::sync::Arc;

mod state;

pub use state::{Snapshot, WizardState};

/// How far a session has progressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub answered: usize,
    pub depth: usize,
    pub is_complete: bool,
}

/// A single questionnaire session over a shared, read-only dataset.
///
/// The session owns its `WizardState` and replaces it wholesale on every
/// action. Each action runs to completion before the next one is accepted.
pub struct Wizard {
    dataset: Arc<Dataset>,
    config: EngineConfig,
    state: WizardState,
}

pub struct WizardBuilder {
    dataset: Arc<Dataset>,
    config: EngineConfig,
}

impl WizardBuilder {
    pub fn new(dataset: impl Into<Arc<Dataset>>) -> Self {
        Self {
            dataset: dataset.into(),
            config: EngineConfig::default(),
        }
    }

    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_terminal_node(mut self, terminal_node: &str) -> Self {
        self.config.terminal_node = terminal_node.to_string();
        self
    }

    pub fn with_max_hub_hops(mut self, max_hub_hops: usize) -> Self {
        self.config.max_hub_hops = max_hub_hops;
        self
    }

    pub fn with_role_flag(mut self, role_flag: &str) -> Self {
        self.config.role_flag = role_flag.to_string();
        self
    }

    pub fn with_flag_rollback(mut self, flag_rollback: FlagRollback) -> Self {
        self.config.flag_rollback = flag_rollback;
        self
    }

    pub fn build(self) -> Wizard {
        let state = WizardState::new(
            self.dataset.tree.start_node.clone(),
            self.config.terminal_node.clone(),
        );
        Wizard {
            dataset: self.dataset,
            config: self.config,
            state,
        }
    }
}

impl Wizard {
    pub fn new(dataset: impl Into<Arc<Dataset>>) -> Self {
        WizardBuilder::new(dataset).build()
    }

    pub fn builder(dataset: impl Into<Arc<Dataset>>) -> WizardBuilder {
        WizardBuilder::new(dataset)
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    pub fn progress(&self) -> Progress {
        Progress {
            answered: self.state.answers().len(),
            depth: self.state.history().len(),
            is_complete: self.state.is_complete(),
        }
    }

    /// The question to show next, or `None` once the terminal node is reached.
    pub fn current_question(&self) -> Result<Option<&Question>, EngineError> {
        if self.state.is_complete() {
            return Ok(None);
        }
        let node = self.current_node()?;
        self.question_for(node).map(Some)
    }

    /// The answer previously recorded for the current question, used to prefill
    /// the form after navigating back.
    pub fn current_selection(&self) -> &[usize] {
        self.current_node()
            .ok()
            .and_then(|node| self.state.answer(&node.question_id))
            .unwrap_or_default()
    }

    /// Validates and, if valid, applies an answer to the current question.
    ///
    /// Validation problems come back inside the `ValidationResult` and leave the
    /// state untouched. An `Err` means the dataset cannot route this answer.
    pub fn submit_answer(&mut self, selection: &[usize]) -> Result<ValidationResult, EngineError> {
        if self.state.is_complete() {
            return Err(EngineError::SessionComplete);
        }
        let node = self.current_node()?;
        let question = self.question_for(node)?;

        let verdict = validate(question, selection, self.dataset.rule(&question.id));
        if !verdict.is_valid {
            tracing::debug!(
                question = %question.id,
                errors = verdict.errors.len(),
                "Answer rejected"
            );
            return Ok(verdict);
        }

        let engine = Engine::new(&self.dataset, &self.config);
        let transition = engine.transition(node, selection, self.state.flags())?;

        let next = self
            .state
            .push_snapshot(&node.id, selection, self.state.flags())
            .record_answer(&question.id, selection)
            .apply_flags(&transition.flags)
            .commit(&transition.next_node);

        tracing::debug!(
            from = %node.id,
            to = %transition.next_node,
            complete = next.is_complete(),
            "Answer committed"
        );
        self.state = next;
        Ok(verdict)
    }

    /// Undoes the last step. Returns `false` when there is nothing to undo.
    pub fn go_back(&mut self) -> bool {
        match self.state.go_back(self.config.flag_rollback) {
            Some(previous) => {
                self.state = previous;
                true
            }
            None => false,
        }
    }

    pub fn restart(&mut self) {
        self.state = self.state.reset();
    }

    /// The grouped outcomes, primary risk level and articles of a finished session.
    pub fn result_view(&self) -> Result<ResultView, EngineError> {
        if !self.state.is_complete() {
            return Err(EngineError::NotComplete);
        }
        let aggregator = OutcomeAggregator::new(&self.dataset.outcomes, &self.config.role_flag);
        Ok(aggregator.result_view(self.state.flags()))
    }

    fn current_node(&self) -> Result<&DecisionNode, EngineError> {
        let node_id = self.state.current_node();
        self.dataset
            .node(node_id)
            .ok_or_else(|| EngineError::NodeNotFound {
                missing_node_id: node_id.to_string(),
                source_node_id: self
                    .state
                    .history()
                    .last()
                    .cloned()
                    .unwrap_or_else(|| "start".to_string()),
            })
    }

    fn question_for(&self, node: &DecisionNode) -> Result<&Question, EngineError> {
        self.dataset
            .question(&node.question_id)
            .ok_or_else(|| EngineError::QuestionNotFound {
                question_id: node.question_id.clone(),
                node_id: node.id.clone(),
            })
    }
}
