use crate::catalog::Dimension;
use crate::error::{QuizError, Result};
use serde::{Deserialize, Serialize};

/// One validated answer. At most one answer per question id survives
/// collection; a later answer for the same id replaces the earlier one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Answer {
    pub question: String,
    pub dimension: Dimension,
    pub value: u8,
}

/// Wire shape of an answer as submitted by an untrusted client. The
/// dimension arrives as a plain string so an unknown name surfaces as
/// `InvalidDimension` instead of a deserialization failure.
#[derive(Debug, Clone, Deserialize)]
pub struct RawAnswer {
    pub question: String,
    pub dimension: String,
    pub value: u8,
}

impl Answer {
    pub fn from_raw(raw: &RawAnswer) -> Result<Answer> {
        let dimension = Dimension::from_slug(&raw.dimension)
            .ok_or_else(|| QuizError::InvalidDimension(raw.dimension.clone()))?;
        Ok(Answer {
            question: raw.question.clone(),
            dimension,
            value: raw.value,
        })
    }
}

/// Parses a JSON submission (an array of raw answers) into typed answers.
pub fn parse_answers(json: &str) -> Result<Vec<Answer>> {
    let raw: Vec<RawAnswer> = serde_json::from_str(json)?;
    raw.iter().map(Answer::from_raw).collect()
}
