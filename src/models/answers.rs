use serde::Deserialize;

/// A single raw quiz answer as submitted by the front-end.
///
/// The quiz form normally submits integers, but older clients have been
/// observed sending floats and numeric strings, so all three are accepted.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum AnswerValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl AnswerValue {
    /// Coerces the raw value to an integer.
    ///
    /// Floats truncate toward zero; strings must hold a base-10 integer.
    /// `None` means the answer is unusable and the request is invalid.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            AnswerValue::Int(value) => Some(*value),
            AnswerValue::Float(value) => Some(*value as i64),
            AnswerValue::Text(text) => text.trim().parse().ok(),
        }
    }
}

/// A complete, validated set of quiz answers.
///
/// q1-q5 are scale/choice questions feeding tag derivation; q6 is the
/// platform question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizAnswers {
    pub q1: i64,
    pub q2: i64,
    pub q3: i64,
    pub q4: i64,
    pub q5: i64,
    pub q6: i64,
}
