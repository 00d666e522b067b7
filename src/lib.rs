pub mod answers;
pub mod config;
pub mod output;
pub mod scoring;
pub mod telemetry;

pub use answers::{decode_answers, AnswerRecord};
pub use scoring::{evaluate, PolicyConstants, ScoreError, ScoreResult};
