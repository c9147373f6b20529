pub mod catalog;
pub mod condition;
pub mod flags;
pub mod outcome;
pub mod question;
pub mod tree;

pub use catalog::*;
pub use condition::*;
pub use flags::*;
pub use outcome::*;
pub use question::*;
pub use tree::*;

impl Keyed for Question {
    fn key(&self) -> &str {
        &self.id
    }

    fn assign_key(&mut self, key: String) {
        self.id = key;
    }
}

impl Keyed for ValidationRule {
    fn key(&self) -> &str {
        &self.question_id
    }

    fn assign_key(&mut self, key: String) {
        self.question_id = key;
    }
}
