pub mod decode;
pub mod types;

pub use decode::{decode_answers, DecodeError, RawAnswers};
pub use types::{AnswerRecord, HourlyRate, Hours, Response};
