use thiserror::Error;
use tracing::debug;

use super::config::PolicyConstants;
use super::criteria::{Criterion, Outcome, Tally};
use crate::answers::AnswerRecord;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoreError {
    /// Every criterion was skipped, so there is nothing to take a percentage of.
    #[error("no criterion could be evaluated: every answer is missing or unsure")]
    UndefinedResult,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CriterionOutcome {
    pub criterion: Criterion,
    pub outcome: Outcome,
    pub detail: String, // e.g. "14h over contract, limit 8h"
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResult {
    pub score: u32,
    pub evaluable_count: u32,
    pub percentage: f64,
    pub breakdown: Vec<CriterionOutcome>,
}

/// Score one answer set against the policy.
///
/// Each criterion is checked on its own and the `(score, evaluable)` pairs are
/// summed. Pure: the same inputs always produce the same result.
///
/// # Errors
///
/// Returns [`ScoreError::UndefinedResult`] when no criterion had enough data
/// to be judged. A zero score out of a non-zero count is still `Ok`.
pub fn evaluate(record: &AnswerRecord, policy: &PolicyConstants) -> Result<ScoreResult, ScoreError> {
    let breakdown: Vec<CriterionOutcome> = Criterion::ALL
        .iter()
        .map(|criterion| {
            let check = criterion.check(record, policy);
            debug!(
                criterion = criterion.label(),
                outcome = ?check.outcome,
                detail = %check.detail,
                "criterion checked"
            );
            CriterionOutcome {
                criterion: *criterion,
                outcome: check.outcome,
                detail: check.detail,
            }
        })
        .collect();

    let total: Tally = breakdown.iter().map(|c| c.outcome.tally()).sum();

    if total.evaluable == 0 {
        return Err(ScoreError::UndefinedResult);
    }

    Ok(ScoreResult {
        score: total.score,
        evaluable_count: total.evaluable,
        percentage: f64::from(total.score) / f64::from(total.evaluable) * 100.0,
        breakdown,
    })
}
