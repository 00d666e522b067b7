use std::io::IsTerminal;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::scoring::{Criterion, Outcome, ScoreResult};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Round to two decimals, keeping at least one fractional digit ("60.0", "66.67").
pub fn format_percentage(percentage: f64) -> String {
    let rounded = (percentage * 100.0).round() / 100.0;
    let formatted = rounded.to_string();
    if formatted.contains('.') {
        formatted
    } else {
        format!("{}.0", formatted)
    }
}

/// One-line summary: "Score is 3/5 - 60.0"
pub fn format_summary(result: &ScoreResult) -> String {
    format!(
        "Score is {}/{} - {}",
        result.score,
        result.evaluable_count,
        format_percentage(result.percentage)
    )
}

/// One line per criterion, skipped ones included.
pub fn format_breakdown(result: &ScoreResult, use_colors: bool) -> String {
    let width = Criterion::ALL
        .iter()
        .map(|c| c.label().len())
        .max()
        .unwrap_or(0);

    result
        .breakdown
        .iter()
        .map(|entry| {
            let label = format!("{:<width$}", entry.criterion.label(), width = width);
            let mark = outcome_mark(entry.outcome);
            if use_colors {
                let mark = match entry.outcome {
                    Outcome::Satisfied => mark.green().to_string(),
                    Outcome::Unsatisfied => mark.red().to_string(),
                    Outcome::Skipped => mark.dimmed().to_string(),
                };
                format!("  {}  {}  {}", label.bold(), mark, entry.detail.dimmed())
            } else {
                format!("  {}  {}  {}", label, mark, entry.detail)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn outcome_mark(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Satisfied => "pass",
        Outcome::Unsatisfied => "fail",
        Outcome::Skipped => "skip",
    }
}

#[derive(Serialize)]
struct JsonCriterion<'a> {
    criterion: Criterion,
    outcome: Outcome,
    detail: &'a str,
}

#[derive(Serialize)]
struct JsonResult<'a> {
    score: u32,
    evaluable_count: u32,
    percentage: f64,
    criteria: Vec<JsonCriterion<'a>>,
}

/// Pretty-printed JSON for other tools to consume
pub fn format_json(result: &ScoreResult) -> Result<String> {
    let view = JsonResult {
        score: result.score,
        evaluable_count: result.evaluable_count,
        percentage: result.percentage,
        criteria: result
            .breakdown
            .iter()
            .map(|entry| JsonCriterion {
                criterion: entry.criterion,
                outcome: entry.outcome,
                detail: &entry.detail,
            })
            .collect(),
    };
    serde_json::to_string_pretty(&view).context("Failed to serialize score result")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::CriterionOutcome;

    fn sample_result() -> ScoreResult {
        ScoreResult {
            score: 3,
            evaluable_count: 5,
            percentage: 60.0,
            breakdown: vec![
                CriterionOutcome {
                    criterion: Criterion::EnjoysJob,
                    outcome: Outcome::Satisfied,
                    detail: "answered yes".to_string(),
                },
                CriterionOutcome {
                    criterion: Criterion::NoUnpaidExtraWork,
                    outcome: Outcome::Skipped,
                    detail: "no answer".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(60.0), "60.0");
        assert_eq!(format_percentage(100.0), "100.0");
        assert_eq!(format_percentage(0.0), "0.0");
        assert_eq!(format_percentage(200.0 / 3.0), "66.67");
        assert_eq!(format_percentage(50.5), "50.5");
    }

    #[test]
    fn test_format_summary() {
        assert_eq!(format_summary(&sample_result()), "Score is 3/5 - 60.0");
    }

    #[test]
    fn test_format_breakdown_plain() {
        let output = format_breakdown(&sample_result(), false);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Enjoys job"));
        assert!(lines[0].contains("pass"));
        assert!(lines[1].contains("No unpaid extra work"));
        assert!(lines[1].contains("skip"));
        assert!(!output.contains('\u{1b}'));
    }

    #[test]
    fn test_format_breakdown_colored() {
        let output = format_breakdown(&sample_result(), true);
        assert!(output.contains('\u{1b}'));
    }

    #[test]
    fn test_format_json() {
        let json = format_json(&sample_result()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["score"], 3);
        assert_eq!(value["evaluable_count"], 5);
        assert_eq!(value["percentage"], 60.0);
        assert_eq!(value["criteria"][0]["criterion"], "enjoys_job");
        assert_eq!(value["criteria"][1]["outcome"], "skipped");
    }
}
