pub mod config;
pub mod criteria;
pub mod engine;
pub mod validation;

pub use config::*;
pub use criteria::{Criterion, Outcome, Tally};
pub use engine::{evaluate, CriterionOutcome, ScoreError, ScoreResult};
pub use validation::validate_policy;
