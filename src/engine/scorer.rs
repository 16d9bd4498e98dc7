use crate::catalog::Catalog;
use crate::error::{QuizError, Result};
use crate::types::answer::Answer;
use crate::types::result::ScoreSet;
use std::collections::BTreeMap;

/// Reduces a submission to per-dimension totals. Answers are deduplicated by
/// question id first (last write wins), then validated against the catalog,
/// then checked for full coverage. Unanswered questions are an error, never
/// a silent zero.
pub fn score(catalog: &Catalog, answers: &[Answer]) -> Result<ScoreSet> {
    let mut latest: BTreeMap<&str, &Answer> = BTreeMap::new();
    for answer in answers {
        latest.insert(answer.question.as_str(), answer);
    }

    for answer in latest.values() {
        catalog.validate_answer(answer)?;
    }

    let missing: Vec<String> = catalog
        .questions()
        .iter()
        .filter(|question| !latest.contains_key(question.id))
        .map(|question| question.id.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(QuizError::IncompleteAnswers { missing });
    }

    let mut scores = ScoreSet::default();
    for answer in latest.values() {
        scores.add(answer.dimension, u32::from(answer.value));
    }
    Ok(scores)
}
