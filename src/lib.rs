//! # Shindan - Questionnaire Rule Evaluation Engine
//!
//! **Shindan** walks a user through a branching questionnaire and, once the
//! terminal node is reached, reports which outcomes apply. Routing is driven by
//! the answers given so far and by flags that accumulate along the way.
//!
//! ## Core Workflow
//!
//! 1.  **Load the Dataset**: Questions, the decision tree, outcomes and validation
//!     rules are read once into a [`Dataset`](dataset::Dataset) and never mutated.
//! 2.  **Start a Session**: A [`Wizard`](session::Wizard) owns the state of one run
//!     through the questionnaire. Configure it with `Wizard::builder`.
//! 3.  **Answer Questions**: `submit_answer` validates the selection, routes the
//!     current node, fast-forwards through hub nodes and commits the new position.
//!     `go_back` and `restart` rewind the session.
//! 4.  **Read the Result**: At the `END` node, `result_view` groups the active
//!     outcomes, picks the primary risk level and lists the applicable articles.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use shindan::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let dataset = Dataset::from_dir("data")?;
//!     let mut wizard = Wizard::builder(dataset).with_max_hub_hops(50).build();
//!
//!     while let Some(question) = wizard.current_question()? {
//!         println!("{}", question.text);
//!         // Pick the first option of every question.
//!         let verdict = wizard.submit_answer(&[0])?;
//!         if !verdict.is_valid {
//!             for error in &verdict.errors {
//!                 println!("  ! {}", error);
//!             }
//!             break;
//!         }
//!     }
//!
//!     if wizard.is_complete() {
//!         let view = wizard.result_view()?;
//!         println!("Primary risk level: {}", view.primary_risk_level);
//!         println!("Articles: {:?}", view.applicable_articles);
//!     }
//!     Ok(())
//! }
//! ```

pub mod aggregate;
pub mod dataset;
pub mod engine;
pub mod error;
pub mod model;
pub mod prelude;
pub mod session;
pub mod validation;
