//! Payloads handed to the two external collaborators. The engine never
//! calls them; it only supplies these shapes as data.

use crate::catalog::Catalog;
use crate::types::result::{Pattern, QuizResult, ScoreSet, Severity};
use serde::Serialize;

/// Narrative register for the generated improvement plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Emergency,
    Urgent,
    Watchful,
    Gentle,
    Rekindle,
    Steady,
    Celebration,
}

/// Pattern first, severity as fallback: a whole-relationship signal must
/// set the register even when the single weakest dimension looks tame.
pub fn narrative_tone(result: &QuizResult) -> Tone {
    match result.pattern {
        Some(Pattern::AlertaVermelho) => Tone::Emergency,
        Some(Pattern::EquilibrioPerfeito) => Tone::Celebration,
        Some(Pattern::EquilibrioGeral) => Tone::Steady,
        Some(Pattern::RelacaoMorna) => Tone::Rekindle,
        Some(Pattern::DuplaFragil(_)) | None => match result.severity {
            Severity::Critical => Tone::Emergency,
            Severity::High => Tone::Urgent,
            Severity::Moderate => Tone::Watchful,
            Severity::Mild => Tone::Gentle,
        },
    }
}

/// Input contract of the narrative/prompt generator.
#[derive(Debug, Clone, Serialize)]
pub struct NarrativeBrief {
    pub lowest: &'static str,
    pub lowest_name: &'static str,
    pub lowest_meaning: &'static str,
    pub lowest_score: u32,
    pub disaster: &'static str,
    pub second_lowest: Option<&'static str>,
    pub second_lowest_score: Option<u32>,
    pub pattern: Option<&'static str>,
    pub pattern_title: Option<&'static str>,
    pub pattern_summary: Option<&'static str>,
    pub tone: Tone,
    pub scores: ScoreSet,
    pub max_total: u32,
}

impl NarrativeBrief {
    pub fn from_result(result: &QuizResult, catalog: &Catalog) -> Self {
        NarrativeBrief {
            lowest: result.ranked.lowest.slug(),
            lowest_name: result.ranked.lowest.display_name(),
            lowest_meaning: result.ranked.lowest.meaning(),
            lowest_score: result.ranked.lowest_score,
            disaster: result.disaster.slug(),
            second_lowest: result.ranked.second.map(|second| second.dimension.slug()),
            second_lowest_score: result.ranked.second.map(|second| second.score),
            pattern: result.pattern.map(|pattern| pattern.slug()),
            pattern_title: result.pattern.map(|pattern| pattern.title()),
            pattern_summary: result.pattern.map(|pattern| pattern.summary()),
            tone: narrative_tone(result),
            scores: result.scores,
            max_total: catalog.max_total(),
        }
    }
}

/// One flat row per completed quiz: each dimension's total as its own
/// column, ranking and pattern as scalar fields.
#[derive(Debug, Clone, Serialize)]
pub struct FlatRecord {
    pub terra: u32,
    pub agua: u32,
    pub ar: u32,
    pub fogo: u32,
    pub eter: u32,
    pub lowest: &'static str,
    pub lowest_score: u32,
    pub second_lowest: Option<&'static str>,
    pub second_lowest_score: Option<u32>,
    pub pattern: Option<&'static str>,
    pub severity: &'static str,
    pub disaster: &'static str,
}

impl FlatRecord {
    pub fn from_result(result: &QuizResult) -> Self {
        FlatRecord {
            terra: result.scores.terra,
            agua: result.scores.agua,
            ar: result.scores.ar,
            fogo: result.scores.fogo,
            eter: result.scores.eter,
            lowest: result.ranked.lowest.slug(),
            lowest_score: result.ranked.lowest_score,
            second_lowest: result.ranked.second.map(|second| second.dimension.slug()),
            second_lowest_score: result.ranked.second.map(|second| second.score),
            pattern: result.pattern.map(|pattern| pattern.slug()),
            severity: result.severity.slug(),
            disaster: result.disaster.slug(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Dimension, Disaster, Variant};
    use crate::types::result::{RankedResult, SecondLowest};

    fn result_with(pattern: Option<Pattern>, severity: Severity) -> QuizResult {
        QuizResult {
            scores: ScoreSet {
                terra: 8,
                agua: 9,
                ar: 20,
                fogo: 21,
                eter: 22,
            },
            ranked: RankedResult {
                lowest: Dimension::Terra,
                lowest_score: 8,
                second: Some(SecondLowest {
                    dimension: Dimension::Agua,
                    score: 9,
                }),
            },
            pattern,
            severity,
            disaster: Disaster::Terremoto,
        }
    }

    #[test]
    fn crisis_pattern_forces_the_emergency_tone() {
        // Even a mild severity cannot soften a crisis-all shape.
        let result = result_with(Some(Pattern::AlertaVermelho), Severity::Mild);
        assert_eq!(narrative_tone(&result), Tone::Emergency);
    }

    #[test]
    fn pairwise_pattern_falls_back_to_severity() {
        let pair = Pattern::DuplaFragil(&crate::engine::patterns::PAIR_PATTERNS[0]);
        let result = result_with(Some(pair), Severity::High);
        assert_eq!(narrative_tone(&result), Tone::Urgent);
        let result = result_with(None, Severity::Mild);
        assert_eq!(narrative_tone(&result), Tone::Gentle);
    }

    #[test]
    fn balance_patterns_set_their_own_register() {
        let result = result_with(Some(Pattern::EquilibrioPerfeito), Severity::Mild);
        assert_eq!(narrative_tone(&result), Tone::Celebration);
        let result = result_with(Some(Pattern::RelacaoMorna), Severity::Moderate);
        assert_eq!(narrative_tone(&result), Tone::Rekindle);
    }

    #[test]
    fn flat_record_keeps_nullable_columns_nullable() {
        let mut result = result_with(None, Severity::Moderate);
        result.ranked.second = None;
        let record = FlatRecord::from_result(&result);
        assert_eq!(record.terra, 8);
        assert_eq!(record.lowest, "terra");
        assert!(record.second_lowest.is_none());
        assert!(record.pattern.is_none());
        assert_eq!(record.severity, "moderada");

        let json = serde_json::to_string(&record).expect("record should serialize");
        assert!(json.contains("\"second_lowest\":null"));
    }

    #[test]
    fn narrative_brief_carries_the_contract_fields() {
        let catalog = Catalog::new(Variant::Full);
        let result = result_with(Some(Pattern::AlertaVermelho), Severity::Critical);
        let brief = NarrativeBrief::from_result(&result, &catalog);
        assert_eq!(brief.lowest, "terra");
        assert_eq!(brief.disaster, "terremoto");
        assert_eq!(brief.pattern, Some("alerta_vermelho"));
        assert_eq!(brief.tone, Tone::Emergency);
        assert_eq!(brief.max_total, 25);
    }
}
