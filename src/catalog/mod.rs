pub mod dimension;
pub mod questions;

use crate::error::{QuizError, Result};
use crate::types::answer::Answer;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub use dimension::{Dimension, Disaster};
pub use questions::{Choice, Question};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Full,
    Compact,
}

impl Variant {
    pub fn slug(self) -> &'static str {
        match self {
            Variant::Full => "full",
            Variant::Compact => "compact",
        }
    }
}

/// One scoring catalog: the question bank of a single variant plus the
/// derived per-dimension bounds every threshold is checked against.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    variant: Variant,
    questions: &'static [Question],
}

impl Catalog {
    pub fn new(variant: Variant) -> Self {
        let questions = match variant {
            Variant::Full => questions::FULL,
            Variant::Compact => questions::COMPACT,
        };
        Catalog { variant, questions }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn questions(&self) -> &'static [Question] {
        self.questions
    }

    pub fn question(&self, id: &str) -> Option<&'static Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions_per_dimension(&self) -> u32 {
        (self.questions.len() / Dimension::ORDER.len()) as u32
    }

    pub fn min_choice_value(&self) -> u32 {
        self.questions
            .iter()
            .flat_map(|question| question.choices)
            .map(|choice| u32::from(choice.value))
            .min()
            .unwrap_or(0)
    }

    pub fn max_choice_value(&self) -> u32 {
        self.questions
            .iter()
            .flat_map(|question| question.choices)
            .map(|choice| u32::from(choice.value))
            .max()
            .unwrap_or(0)
    }

    /// Lowest attainable per-dimension total.
    pub fn min_total(&self) -> u32 {
        self.questions_per_dimension() * self.min_choice_value()
    }

    /// Highest attainable per-dimension total.
    pub fn max_total(&self) -> u32 {
        self.questions_per_dimension() * self.max_choice_value()
    }

    /// Rejects an answer that references anything outside this catalog.
    pub fn validate_answer(&self, answer: &Answer) -> Result<()> {
        let question = self
            .question(&answer.question)
            .ok_or_else(|| QuizError::InvalidQuestionId(answer.question.clone()))?;
        if question.dimension != answer.dimension {
            return Err(QuizError::DimensionMismatch {
                question: answer.question.clone(),
                declared: answer.dimension.slug().to_string(),
                expected: question.dimension.slug().to_string(),
            });
        }
        if !question
            .choices
            .iter()
            .any(|choice| choice.value == answer.value)
        {
            return Err(QuizError::ValueOutOfRange {
                question: answer.question.clone(),
                value: answer.value,
            });
        }
        Ok(())
    }

    /// Symmetric-weighting invariant: same question count per dimension and a
    /// uniform choice value range, so totals are comparable across dimensions.
    pub fn check(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for question in self.questions {
            if !seen.insert(question.id) {
                return Err(QuizError::ConfigParse(format!(
                    "duplicate question id: {}",
                    question.id
                )));
            }
        }

        let per_dimension = self.questions_per_dimension() as usize;
        for dimension in Dimension::ORDER {
            let count = self
                .questions
                .iter()
                .filter(|question| question.dimension == dimension)
                .count();
            if count != per_dimension {
                return Err(QuizError::ConfigParse(format!(
                    "dimension {} has {} questions, expected {}",
                    dimension.slug(),
                    count,
                    per_dimension
                )));
            }
        }

        let min = self.min_choice_value();
        let max = self.max_choice_value();
        for question in self.questions {
            if question.choices.len() < 4 || question.choices.len() > 5 {
                return Err(QuizError::ConfigParse(format!(
                    "question {} has {} choices, expected 4-5",
                    question.id,
                    question.choices.len()
                )));
            }
            let values: Vec<u32> = question
                .choices
                .iter()
                .map(|choice| u32::from(choice.value))
                .collect();
            let question_min = values.iter().copied().min().unwrap_or(0);
            let question_max = values.iter().copied().max().unwrap_or(0);
            if question_min != min || question_max != max {
                return Err(QuizError::ConfigParse(format!(
                    "question {} uses value range {}..={}, catalog expects {}..={}",
                    question.id, question_min, question_max, min, max
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_variants_satisfy_the_symmetry_invariant() {
        Catalog::new(Variant::Full)
            .check()
            .expect("full catalog should be symmetric");
        Catalog::new(Variant::Compact)
            .check()
            .expect("compact catalog should be symmetric");
    }

    #[test]
    fn full_catalog_bounds_match_the_five_question_scale() {
        let catalog = Catalog::new(Variant::Full);
        assert_eq!(catalog.len(), 25);
        assert_eq!(catalog.questions_per_dimension(), 5);
        assert_eq!(catalog.min_total(), 5);
        assert_eq!(catalog.max_total(), 25);
    }

    #[test]
    fn compact_catalog_bounds_match_the_legacy_scale() {
        let catalog = Catalog::new(Variant::Compact);
        assert_eq!(catalog.len(), 10);
        assert_eq!(catalog.questions_per_dimension(), 2);
        assert_eq!(catalog.min_total(), 2);
        assert_eq!(catalog.max_total(), 8);
    }

    #[test]
    fn validate_answer_rejects_unknown_question() {
        let catalog = Catalog::new(Variant::Full);
        let answer = Answer {
            question: "terra_99".to_string(),
            dimension: Dimension::Terra,
            value: 3,
        };
        assert!(matches!(
            catalog.validate_answer(&answer),
            Err(QuizError::InvalidQuestionId(_))
        ));
    }

    #[test]
    fn validate_answer_rejects_mismatched_dimension() {
        let catalog = Catalog::new(Variant::Full);
        let answer = Answer {
            question: "terra_1".to_string(),
            dimension: Dimension::Fogo,
            value: 3,
        };
        assert!(matches!(
            catalog.validate_answer(&answer),
            Err(QuizError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn validate_answer_rejects_value_outside_the_scale() {
        let catalog = Catalog::new(Variant::Full);
        let answer = Answer {
            question: "terra_1".to_string(),
            dimension: Dimension::Terra,
            value: 6,
        };
        assert!(matches!(
            catalog.validate_answer(&answer),
            Err(QuizError::ValueOutOfRange { .. })
        ));
    }
}
