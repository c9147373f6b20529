//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from the
//! shindan crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use shindan::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let dataset = Dataset::from_dir("path/to/dataset")?;
//! let mut wizard = Wizard::new(dataset);
//!
//! let verdict = wizard.submit_answer(&[1])?;
//! println!("Valid: {}", verdict.is_valid);
//! # Ok(())
//! # }
//! ```

// Session and dataset
pub use crate::dataset::{Dataset, IntegrityIssue};
pub use crate::session::{Progress, Wizard, WizardBuilder, WizardState};

// Engine
pub use crate::engine::{
    DEFAULT_MAX_HUB_HOPS, EngineConfig, FlagRollback, HubResolution, RouteDecision, TERMINAL_NODE,
    answer_flags, evaluate, evaluate_all, resolve_hubs, route,
};

// Data model
pub use crate::model::{
    AnswerOption, Catalog, Condition, DecisionNode, DecisionTree, FlagValue, Flags, NodeKind,
    Outcome, Question, QuestionKind, Route, SetFlag, StructureLevel, ValidationRule,
};

// Validation and results
pub use crate::aggregate::{GroupedOutcomes, OutcomeAggregator, ResultView};
pub use crate::validation::{ValidationResult, toggle_with_exclusivity, validate};

// Error types
pub use crate::error::{DatasetError, EngineError, ValidationError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
