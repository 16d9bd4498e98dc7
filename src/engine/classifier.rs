use crate::types::config::Thresholds;
use crate::types::result::{RankedResult, Severity};

/// Grades how urgent the weakest dimension is. Orthogonal to the pattern:
/// a crisis-all pattern pre-empts this tier downstream (see
/// `handoff::narrative_tone`), never here.
pub fn classify(ranked: &RankedResult, thresholds: &Thresholds) -> Severity {
    if ranked.lowest_score <= thresholds.critical {
        return Severity::Critical;
    }
    // The ranker only reports a second dimension at or below the low gate,
    // so its presence alone marks a double weak point.
    if ranked.second.is_some() {
        return Severity::High;
    }
    if ranked.lowest_score <= thresholds.moderate {
        return Severity::Moderate;
    }
    Severity::Mild
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Dimension, Variant};
    use crate::types::result::SecondLowest;

    fn thresholds() -> Thresholds {
        Thresholds::for_variant(Variant::Full)
    }

    fn ranked(lowest_score: u32, second: Option<u32>) -> RankedResult {
        RankedResult {
            lowest: Dimension::Terra,
            lowest_score,
            second: second.map(|score| SecondLowest {
                dimension: Dimension::Agua,
                score,
            }),
        }
    }

    #[test]
    fn lowest_at_the_critical_cutoff_is_critical() {
        assert_eq!(classify(&ranked(8, None), &thresholds()), Severity::Critical);
        assert_eq!(classify(&ranked(5, None), &thresholds()), Severity::Critical);
    }

    #[test]
    fn critical_wins_even_with_a_second_weak_dimension() {
        assert_eq!(
            classify(&ranked(7, Some(9)), &thresholds()),
            Severity::Critical
        );
    }

    #[test]
    fn reported_second_dimension_raises_severity_to_high() {
        assert_eq!(
            classify(&ranked(10, Some(11)), &thresholds()),
            Severity::High
        );
    }

    #[test]
    fn moderate_band_without_second_dimension() {
        assert_eq!(
            classify(&ranked(15, None), &thresholds()),
            Severity::Moderate
        );
        assert_eq!(classify(&ranked(9, None), &thresholds()), Severity::Moderate);
    }

    #[test]
    fn healthy_lowest_is_mild() {
        assert_eq!(classify(&ranked(16, None), &thresholds()), Severity::Mild);
        assert_eq!(classify(&ranked(25, None), &thresholds()), Severity::Mild);
    }
}
