pub mod classifier;
pub mod patterns;
pub mod ranker;
pub mod scorer;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::types::answer::Answer;
use crate::types::config::Thresholds;
use crate::types::result::QuizResult;

/// Builds the final record for one completed submission: score, rank, match
/// the pattern, grade severity, attach the disaster label. Pure composition;
/// any scorer error propagates before a record exists.
pub fn build(catalog: &Catalog, thresholds: &Thresholds, answers: &[Answer]) -> Result<QuizResult> {
    let scores = scorer::score(catalog, answers)?;
    let ranked = ranker::rank(&scores, thresholds);
    let pattern = patterns::match_pattern(&ranked, &scores, thresholds, catalog.max_total());
    let severity = classifier::classify(&ranked, thresholds);
    let disaster = ranked.lowest.disaster();
    tracing::debug!(
        lowest = ranked.lowest.slug(),
        severity = severity.slug(),
        pattern = pattern.map(|p| p.slug()).unwrap_or("none"),
        "submission scored"
    );
    Ok(QuizResult {
        scores,
        ranked,
        pattern,
        severity,
        disaster,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Dimension, Disaster, Variant};
    use crate::error::QuizError;
    use crate::types::result::{Pattern, Severity};

    fn answers_for(per_dimension: [u8; 5]) -> Vec<Answer> {
        Catalog::new(Variant::Full)
            .questions()
            .iter()
            .map(|question| {
                let index = Dimension::ORDER
                    .iter()
                    .position(|d| *d == question.dimension)
                    .unwrap();
                Answer {
                    question: question.id.to_string(),
                    dimension: question.dimension,
                    value: per_dimension[index],
                }
            })
            .collect()
    }

    fn build_full(answers: &[Answer]) -> Result<QuizResult> {
        let catalog = Catalog::new(Variant::Full);
        build(&catalog, &Thresholds::for_variant(Variant::Full), answers)
    }

    #[test]
    fn weak_terra_agua_submission_matches_the_concrete_scenario() {
        // Base values 2/2/4/4/4 plus a few edits give totals
        // {terra: 8, agua: 9, ar: 20, fogo: 21, eter: 22}.
        let mut answers = answers_for([2, 2, 4, 4, 4]);
        for answer in &mut answers {
            match answer.question.as_str() {
                "terra_1" | "terra_2" | "agua_1" => answer.value = 1,
                "fogo_1" | "eter_1" | "eter_2" => answer.value = 5,
                _ => {}
            }
        }
        let result = build_full(&answers).expect("submission should build");

        assert_eq!(result.scores.terra, 8);
        assert_eq!(result.scores.agua, 9);
        assert_eq!(result.scores.ar, 20);
        assert_eq!(result.scores.fogo, 21);
        assert_eq!(result.scores.eter, 22);
        assert_eq!(result.ranked.lowest, Dimension::Terra);
        let second = result.ranked.second.expect("agua should be reported");
        assert_eq!(second.dimension, Dimension::Agua);
        match result.pattern {
            Some(Pattern::DuplaFragil(pair)) => assert_eq!(pair.slug, "fundacao_rachada"),
            other => panic!("expected fundacao_rachada, got {other:?}"),
        }
        assert_eq!(result.severity, Severity::Critical);
        assert_eq!(result.disaster, Disaster::Terremoto);
    }

    #[test]
    fn uniformly_low_submission_is_a_red_alert() {
        // 6 per dimension (values 1/1/1/1/2), at the crisis cutoff.
        let mut answers = answers_for([1, 1, 1, 1, 1]);
        for answer in &mut answers {
            if answer.question.ends_with("_5") {
                answer.value = 2;
            }
        }
        let result = build_full(&answers).expect("submission should build");
        for dimension in Dimension::ORDER {
            assert_eq!(result.scores.get(dimension), 6);
        }
        assert_eq!(result.pattern, Some(Pattern::AlertaVermelho));
        assert_eq!(result.severity, Severity::Critical);
    }

    #[test]
    fn uniformly_middling_submission_is_lukewarm() {
        let result = build_full(&answers_for([3, 3, 3, 3, 3])).expect("submission should build");
        assert_eq!(result.pattern, Some(Pattern::RelacaoMorna));
        assert_eq!(result.severity, Severity::Moderate);
    }

    #[test]
    fn build_is_idempotent_and_order_insensitive() {
        let answers = answers_for([2, 3, 4, 5, 3]);
        let mut reversed = answers.clone();
        reversed.reverse();

        let first = build_full(&answers).expect("submission should build");
        let second = build_full(&answers).expect("submission should build");
        let shuffled = build_full(&reversed).expect("submission should build");

        assert_eq!(first, second);
        assert_eq!(first, shuffled);
    }

    #[test]
    fn incomplete_submission_propagates_the_scorer_error() {
        let answers = &answers_for([3, 3, 3, 3, 3])[..10];
        assert!(matches!(
            build_full(answers),
            Err(QuizError::IncompleteAnswers { .. })
        ));
    }

    #[test]
    fn compact_variant_builds_with_its_own_scale() {
        let catalog = Catalog::new(Variant::Compact);
        let answers: Vec<Answer> = catalog
            .questions()
            .iter()
            .map(|question| Answer {
                question: question.id.to_string(),
                dimension: question.dimension,
                value: if question.dimension == Dimension::Fogo {
                    1
                } else {
                    4
                },
            })
            .collect();
        let result = build(
            &catalog,
            &Thresholds::for_variant(Variant::Compact),
            &answers,
        )
        .expect("submission should build");
        assert_eq!(result.ranked.lowest, Dimension::Fogo);
        assert_eq!(result.ranked.lowest_score, 2);
        assert_eq!(result.severity, Severity::Critical);
        assert_eq!(result.disaster, Disaster::Apagao);
    }
}
