use crate::catalog::{Catalog, Question};
use crate::engine;
use crate::error::Result;
use crate::types::answer::Answer;
use crate::types::config::Thresholds;
use crate::types::result::QuizResult;

/// Answer-collection state, threaded through the caller as a value. There is
/// no ambient store: each `record` consumes the session and returns the next
/// one, and `into_result` is the single transition into a built record.
#[derive(Debug, Clone)]
pub struct QuizSession {
    catalog: Catalog,
    answers: Vec<Answer>,
}

impl QuizSession {
    pub fn new(catalog: Catalog) -> Self {
        QuizSession {
            catalog,
            answers: Vec::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Records one answer, replacing any earlier answer for the same
    /// question (supports going back and changing an answer). Malformed
    /// input is rejected here, at collection time.
    pub fn record(mut self, answer: Answer) -> Result<Self> {
        self.catalog.validate_answer(&answer)?;
        match self
            .answers
            .iter_mut()
            .find(|existing| existing.question == answer.question)
        {
            Some(existing) => *existing = answer,
            None => self.answers.push(answer),
        }
        Ok(self)
    }

    /// First unanswered question in catalog order, if any.
    pub fn current_question(&self) -> Option<&'static Question> {
        self.catalog
            .questions()
            .iter()
            .find(|question| !self.answers.iter().any(|a| a.question == question.id))
    }

    pub fn answered(&self) -> usize {
        self.answers.len()
    }

    pub fn total(&self) -> usize {
        self.catalog.len()
    }

    pub fn is_complete(&self) -> bool {
        self.current_question().is_none()
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn into_result(self, thresholds: &Thresholds) -> Result<QuizResult> {
        engine::build(&self.catalog, thresholds, &self.answers)
    }
}
