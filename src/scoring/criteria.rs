use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::Serialize;

use super::config::PolicyConstants;
use crate::answers::{AnswerRecord, Response};

/// One of the six independent checks an answer set is scored on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    EnjoysJob,
    RespectedByManagers,
    GoodForCarers,
    NoUnpaidExtraWork,
    Overtime,
    HourlyRate,
}

impl Criterion {
    /// Every criterion, in evaluation order.
    pub const ALL: [Criterion; 6] = [
        Criterion::EnjoysJob,
        Criterion::RespectedByManagers,
        Criterion::GoodForCarers,
        Criterion::NoUnpaidExtraWork,
        Criterion::Overtime,
        Criterion::HourlyRate,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Criterion::EnjoysJob => "Enjoys job",
            Criterion::RespectedByManagers => "Respected by managers",
            Criterion::GoodForCarers => "Good for carers",
            Criterion::NoUnpaidExtraWork => "No unpaid extra work",
            Criterion::Overtime => "Overtime",
            Criterion::HourlyRate => "Hourly rate",
        }
    }

    /// Judge this criterion alone. Never looks at any other criterion's inputs.
    pub fn check(&self, record: &AnswerRecord, policy: &PolicyConstants) -> Check {
        match self {
            Criterion::EnjoysJob => check_response(record.enjoys_job, Response::Yes),
            Criterion::RespectedByManagers => {
                check_response(record.respected_by_managers, Response::Yes)
            }
            Criterion::GoodForCarers => check_response(record.good_for_carers, Response::Yes),
            // inverted: "no" is the good answer
            Criterion::NoUnpaidExtraWork => {
                check_response(record.unpaid_extra_work, Response::No)
            }
            Criterion::Overtime => check_overtime(record, policy),
            Criterion::HourlyRate => check_rate(record, policy),
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Satisfied,
    Unsatisfied,
    /// Inputs were missing or unsure; counts toward nothing.
    Skipped,
}

impl Outcome {
    fn from_bool(satisfied: bool) -> Self {
        if satisfied {
            Outcome::Satisfied
        } else {
            Outcome::Unsatisfied
        }
    }

    pub fn tally(&self) -> Tally {
        match self {
            Outcome::Satisfied => Tally { score: 1, evaluable: 1 },
            Outcome::Unsatisfied => Tally { score: 0, evaluable: 1 },
            Outcome::Skipped => Tally::default(),
        }
    }
}

/// `(score, evaluable)` contribution of one or more criteria.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub score: u32,
    pub evaluable: u32,
}

impl Add for Tally {
    type Output = Tally;

    fn add(self, rhs: Tally) -> Tally {
        Tally {
            score: self.score + rhs.score,
            evaluable: self.evaluable + rhs.evaluable,
        }
    }
}

impl Sum for Tally {
    fn sum<I: Iterator<Item = Tally>>(iter: I) -> Tally {
        iter.fold(Tally::default(), Add::add)
    }
}

/// Result of a single check plus a short explanation for verbose output.
#[derive(Debug, Clone, PartialEq)]
pub struct Check {
    pub outcome: Outcome,
    pub detail: String,
}

fn check_response(value: Response, positive: Response) -> Check {
    match value {
        Response::Unknown => Check {
            outcome: Outcome::Skipped,
            detail: "no answer".to_string(),
        },
        answered => Check {
            outcome: Outcome::from_bool(answered == positive),
            detail: format!("answered {}", response_word(answered)),
        },
    }
}

fn response_word(value: Response) -> &'static str {
    match value {
        Response::Yes => "yes",
        Response::No => "no",
        Response::Unknown => "unsure",
    }
}

fn check_overtime(record: &AnswerRecord, policy: &PolicyConstants) -> Check {
    let (Some(contracted), Some(worked)) = (
        record.contracted_hours.get(),
        record.hours_actually_worked.get(),
    ) else {
        return Check {
            outcome: Outcome::Skipped,
            detail: "contracted or worked hours unknown".to_string(),
        };
    };

    // Negative overtime (working less than contracted) passes.
    let overtime = worked - contracted;
    let detail = if overtime < 0.0 {
        format!("{}h under contract, limit {}h", -overtime, policy.max_overtime)
    } else {
        format!("{}h over contract, limit {}h", overtime, policy.max_overtime)
    };
    Check {
        outcome: Outcome::from_bool(overtime <= policy.max_overtime),
        detail,
    }
}

fn check_rate(record: &AnswerRecord, policy: &PolicyConstants) -> Check {
    match record.hourly_rate.get() {
        None => Check {
            outcome: Outcome::Skipped,
            detail: "hourly rate unknown".to_string(),
        },
        Some(rate) => Check {
            outcome: Outcome::from_bool(rate >= policy.min_wage),
            detail: format!("£{:.2}/h, minimum £{:.2}/h", rate, policy.min_wage),
        },
    }
}
