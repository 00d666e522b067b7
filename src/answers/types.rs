use serde_json::Value;

use super::decode::DecodeError;
use crate::scoring::RateParsing;

/// Marker used by the survey for "I don't know". Treated exactly like a missing answer.
pub const UNSURE: &str = "unsure";

/// A yes/no survey answer. Missing, `null` or `"unsure"` answers are `Unknown`;
/// any other value is rejected when decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Response {
    Yes,
    No,
    #[default]
    Unknown,
}

impl Response {
    /// Decode a raw JSON value. `null` and `"unsure"` both mean unknown.
    pub fn from_value(field: &'static str, value: Option<&Value>) -> Result<Self, DecodeError> {
        match value {
            None | Some(Value::Null) => Ok(Response::Unknown),
            Some(Value::String(s)) => {
                let s = s.trim();
                if s.eq_ignore_ascii_case("yes") {
                    Ok(Response::Yes)
                } else if s.eq_ignore_ascii_case("no") {
                    Ok(Response::No)
                } else if s.eq_ignore_ascii_case(UNSURE) {
                    Ok(Response::Unknown)
                } else {
                    Err(DecodeError::InvalidResponse {
                        field,
                        value: s.to_string(),
                    })
                }
            }
            Some(other) => Err(DecodeError::InvalidResponse {
                field,
                value: other.to_string(),
            }),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Response::Unknown)
    }
}

/// A count of hours, or unknown.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hours(pub Option<f64>);

impl Hours {
    pub fn known(hours: f64) -> Self {
        Hours(Some(hours))
    }

    pub fn unknown() -> Self {
        Hours(None)
    }

    pub fn get(&self) -> Option<f64> {
        self.0
    }

    /// Numbers and numeric strings are accepted; `null`/`"unsure"` are unknown.
    pub fn from_value(field: &'static str, value: Option<&Value>) -> Result<Self, DecodeError> {
        match value {
            None | Some(Value::Null) => Ok(Hours::unknown()),
            Some(Value::Number(n)) => n
                .as_f64()
                .map(Hours::known)
                .ok_or_else(|| DecodeError::InvalidNumber {
                    field,
                    value: n.to_string(),
                }),
            Some(Value::String(s)) => {
                let s = s.trim();
                if s.eq_ignore_ascii_case(UNSURE) {
                    return Ok(Hours::unknown());
                }
                match s.parse::<f64>() {
                    Ok(hours) if hours.is_finite() => Ok(Hours::known(hours)),
                    _ => Err(DecodeError::InvalidNumber {
                        field,
                        value: s.to_string(),
                    }),
                }
            }
            Some(other) => Err(DecodeError::InvalidNumber {
                field,
                value: other.to_string(),
            }),
        }
    }
}

/// Hourly wage after currency normalization, or unknown.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HourlyRate(pub Option<f64>);

impl HourlyRate {
    pub fn known(rate: f64) -> Self {
        HourlyRate(Some(rate))
    }

    pub fn unknown() -> Self {
        HourlyRate(None)
    }

    pub fn get(&self) -> Option<f64> {
        self.0
    }

    /// Normalize a raw rate once, at decode time.
    ///
    /// Numbers pass through unchanged. Strings are trimmed and lose one leading
    /// `£` before being parsed. What happens to a remainder that does not parse
    /// is decided by `mode`: [`RateParsing::Skip`] makes the rate unknown,
    /// [`RateParsing::Zero`] scores it as `0.0`.
    pub fn parse(value: Option<&Value>, mode: RateParsing) -> Result<Self, DecodeError> {
        match value {
            None | Some(Value::Null) => Ok(HourlyRate::unknown()),
            Some(Value::Number(n)) => n
                .as_f64()
                .map(HourlyRate::known)
                .ok_or_else(|| DecodeError::InvalidNumber {
                    field: "hourly_rate",
                    value: n.to_string(),
                }),
            Some(Value::String(s)) => Ok(Self::parse_text(s, mode)),
            Some(other) => Err(DecodeError::InvalidNumber {
                field: "hourly_rate",
                value: other.to_string(),
            }),
        }
    }

    fn parse_text(text: &str, mode: RateParsing) -> Self {
        let text = text.trim();
        if text.eq_ignore_ascii_case(UNSURE) {
            return HourlyRate::unknown();
        }
        let amount = text.strip_prefix('£').unwrap_or(text).trim();
        match amount.parse::<f64>() {
            Ok(rate) if rate.is_finite() => HourlyRate::known(rate),
            _ => match mode {
                RateParsing::Skip => HourlyRate::unknown(),
                RateParsing::Zero => HourlyRate::known(0.0),
            },
        }
    }
}

/// One person's typed survey answers. Read-only once decoded.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnswerRecord {
    pub enjoys_job: Response,
    pub respected_by_managers: Response,
    pub good_for_carers: Response,
    /// `Yes` is the bad answer here.
    pub unpaid_extra_work: Response,
    pub contracted_hours: Hours,
    pub hours_actually_worked: Hours,
    pub hourly_rate: HourlyRate,
}
