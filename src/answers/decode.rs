use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

use super::types::{AnswerRecord, HourlyRate, Hours, Response};
use crate::scoring::RateParsing;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("answers are not a valid JSON object: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{field}: expected \"yes\", \"no\" or \"unsure\", got {value}")]
    InvalidResponse { field: &'static str, value: String },

    #[error("{field}: expected a number, got {value}")]
    InvalidNumber { field: &'static str, value: String },
}

/// Serde view of an answer document.
///
/// Only the recognised keys are kept; anything else in the document (age,
/// submission date, ...) is dropped here and never reaches scoring.
#[derive(Debug, Default, Deserialize)]
pub struct RawAnswers {
    #[serde(default)]
    pub enjoys_job: Option<Value>,
    #[serde(default)]
    pub respected_by_managers: Option<Value>,
    #[serde(default)]
    pub good_for_carers: Option<Value>,
    #[serde(default)]
    pub unpaid_extra_work: Option<Value>,
    #[serde(default)]
    pub contracted_hours: Option<Value>,
    #[serde(default)]
    pub hours_actually_worked: Option<Value>,
    #[serde(default)]
    pub hourly_rate: Option<Value>,
}

impl AnswerRecord {
    pub fn from_raw(raw: &RawAnswers, rate_parsing: RateParsing) -> Result<Self, DecodeError> {
        Ok(AnswerRecord {
            enjoys_job: Response::from_value("enjoys_job", raw.enjoys_job.as_ref())?,
            respected_by_managers: Response::from_value(
                "respected_by_managers",
                raw.respected_by_managers.as_ref(),
            )?,
            good_for_carers: Response::from_value("good_for_carers", raw.good_for_carers.as_ref())?,
            unpaid_extra_work: Response::from_value(
                "unpaid_extra_work",
                raw.unpaid_extra_work.as_ref(),
            )?,
            contracted_hours: Hours::from_value("contracted_hours", raw.contracted_hours.as_ref())?,
            hours_actually_worked: Hours::from_value(
                "hours_actually_worked",
                raw.hours_actually_worked.as_ref(),
            )?,
            hourly_rate: HourlyRate::parse(raw.hourly_rate.as_ref(), rate_parsing)?,
        })
    }
}

/// Decode a JSON answer document into a typed record.
///
/// The document must be an object keyed by field name. Going through `Map`
/// first stops serde from filling `RawAnswers` positionally from an array.
pub fn decode_answers(json: &str, rate_parsing: RateParsing) -> Result<AnswerRecord, DecodeError> {
    let fields: Map<String, Value> = serde_json::from_str(json)?;
    let raw: RawAnswers = serde_json::from_value(Value::Object(fields))?;
    AnswerRecord::from_raw(&raw, rate_parsing)
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn test_decode_sample() {
        let record = decode_answers(SAMPLE, RateParsing::Skip).unwrap();
        assert_eq!(record.enjoys_job, Response::Yes);
        assert_eq!(record.respected_by_managers, Response::No);
        assert_eq!(record.good_for_carers, Response::Yes);
        assert_eq!(record.unpaid_extra_work, Response::Unknown);
        assert_eq!(record.contracted_hours, Hours::known(20.0));
        assert_eq!(record.hours_actually_worked, Hours::known(34.0));
        assert_eq!(record.hourly_rate, HourlyRate::known(8.22));
    }

    #[test]
    fn test_extra_keys_ignored() {
        let with_extras = decode_answers(SAMPLE, RateParsing::Skip).unwrap();
        let without_extras = decode_answers(
            r#"{
                "enjoys_job": "yes",
                "respected_by_managers": "no",
                "good_for_carers": "yes",
                "contracted_hours": 20,
                "hours_actually_worked": 34,
                "unpaid_extra_work": "unsure",
                "hourly_rate": "£8.22"
            }"#,
            RateParsing::Skip,
        )
        .unwrap();
        assert_eq!(with_extras, without_extras);
    }

    #[test]
    fn test_empty_object_is_all_unknown() {
        let record = decode_answers("{}", RateParsing::Skip).unwrap();
        assert_eq!(record, AnswerRecord::default());
    }

    #[test]
    fn test_null_fields_are_unknown() {
        let record = decode_answers(
            r#"{"enjoys_job": null, "contracted_hours": null, "hourly_rate": null}"#,
            RateParsing::Skip,
        )
        .unwrap();
        assert_eq!(record, AnswerRecord::default());
    }

    #[test]
    fn test_malformed_json() {
        let err = decode_answers("{ not json", RateParsing::Skip).unwrap_err();
        assert!(matches!(err, DecodeError::Json(_)));
    }

    #[test]
    fn test_non_object_document() {
        assert!(matches!(
            decode_answers("42", RateParsing::Skip),
            Err(DecodeError::Json(_))
        ));
    }

    #[test]
    fn test_array_document_rejected() {
        assert!(matches!(
            decode_answers("[]", RateParsing::Skip),
            Err(DecodeError::Json(_))
        ));
        assert!(matches!(
            decode_answers(r#"["yes","yes","yes","no",20,25,10]"#, RateParsing::Skip),
            Err(DecodeError::Json(_))
        ));
    }

    #[test]
    fn test_bad_field_reports_name() {
        let err = decode_answers(r#"{"contracted_hours": "forty"}"#, RateParsing::Skip).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::InvalidNumber { field: "contracted_hours", .. }
        ));
    }
}
