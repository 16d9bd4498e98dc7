use crate::catalog::Dimension;
use crate::types::config::Thresholds;
use crate::types::result::{RankedResult, ScoreSet, SecondLowest};

/// Finds the weakest dimension, and the second weakest when it is itself
/// low. Both scans keep the first strictly-smaller value in catalog order,
/// so ties always resolve to the earlier dimension, deterministically.
pub fn rank(scores: &ScoreSet, thresholds: &Thresholds) -> RankedResult {
    let mut lowest = Dimension::ORDER[0];
    let mut lowest_score = scores.get(lowest);
    for dimension in &Dimension::ORDER[1..] {
        if scores.get(*dimension) < lowest_score {
            lowest = *dimension;
            lowest_score = scores.get(*dimension);
        }
    }

    let mut second: Option<SecondLowest> = None;
    for dimension in Dimension::ORDER {
        if dimension == lowest {
            continue;
        }
        let score = scores.get(dimension);
        if second.map(|current| score < current.score).unwrap_or(true) {
            second = Some(SecondLowest { dimension, score });
        }
    }

    // A healthy second dimension is suppressed, not reported with its score.
    let second = second.filter(|candidate| candidate.score <= thresholds.low);

    RankedResult {
        lowest,
        lowest_score,
        second,
    }
}
