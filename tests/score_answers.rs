use job_score::output::{format_json, format_summary};
use job_score::scoring::{Outcome, RateParsing};
use job_score::{decode_answers, evaluate, PolicyConstants, ScoreError};

const SAMPLE: &str = r#"{
    "enjoys_job": "yes",
    "respected_by_managers": "no",
    "good_for_carers": "yes",
    "contracted_hours": 20,
    "hours_actually_worked": 34,
    "unpaid_extra_work": "unsure",
    "age": 26,
    "hourly_rate": "£8.22",
    "submitted_date": 1608211454000
}"#;

#[test]
fn sample_answers_score_three_of_five() {
    let policy = PolicyConstants::default();
    let record = decode_answers(SAMPLE, policy.rate_parsing).unwrap();
    let result = evaluate(&record, &policy).unwrap();

    assert_eq!(result.score, 3);
    assert_eq!(result.evaluable_count, 5);
    assert_eq!(format_summary(&result), "Score is 3/5 - 60.0");
}

#[test]
fn absent_and_unsure_fields_score_identically() {
    let policy = PolicyConstants::default();
    let unsure = decode_answers(
        r#"{"enjoys_job": "yes", "good_for_carers": "unsure", "hourly_rate": "unsure"}"#,
        policy.rate_parsing,
    )
    .unwrap();
    let absent = decode_answers(r#"{"enjoys_job": "yes"}"#, policy.rate_parsing).unwrap();

    assert_eq!(evaluate(&unsure, &policy), evaluate(&absent, &policy));
}

#[test]
fn nothing_answered_is_undefined() {
    let policy = PolicyConstants::default();
    let record = decode_answers(
        r#"{"enjoys_job": "unsure", "unpaid_extra_work": null, "age": 40}"#,
        policy.rate_parsing,
    )
    .unwrap();

    assert_eq!(evaluate(&record, &policy), Err(ScoreError::UndefinedResult));
}

#[test]
fn unparseable_rate_follows_policy() {
    let answers = r#"{"enjoys_job": "yes", "hourly_rate": "£ask me later"}"#;

    let skip = PolicyConstants::default();
    let record = decode_answers(answers, skip.rate_parsing).unwrap();
    let result = evaluate(&record, &skip).unwrap();
    assert_eq!((result.score, result.evaluable_count), (1, 1));

    let zero = PolicyConstants {
        rate_parsing: RateParsing::Zero,
        ..Default::default()
    };
    let record = decode_answers(answers, zero.rate_parsing).unwrap();
    let result = evaluate(&record, &zero).unwrap();
    assert_eq!((result.score, result.evaluable_count), (1, 2));
    assert_eq!(result.breakdown[5].outcome, Outcome::Unsatisfied);
}

#[test]
fn json_output_lists_every_criterion() {
    let policy = PolicyConstants::default();
    let record = decode_answers(SAMPLE, policy.rate_parsing).unwrap();
    let result = evaluate(&record, &policy).unwrap();

    let value: serde_json::Value = serde_json::from_str(&format_json(&result).unwrap()).unwrap();
    assert_eq!(value["criteria"].as_array().unwrap().len(), 6);
    assert_eq!(value["criteria"][3]["criterion"], "no_unpaid_extra_work");
    assert_eq!(value["criteria"][3]["outcome"], "skipped");
}
