use crate::catalog::{Catalog, Variant};
use crate::error::{QuizError, Result};
use serde::Deserialize;

/// Optional `elementos.toml` contents. Everything here is an override; the
/// engine runs on variant defaults when no file is present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizConfig {
    pub quiz: Option<QuizSection>,
    pub thresholds: Option<ThresholdOverrides>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuizSection {
    pub variant: Option<Variant>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThresholdOverrides {
    pub crisis: Option<u32>,
    pub low: Option<u32>,
    pub critical: Option<u32>,
    pub moderate: Option<u32>,
    pub balanced_low: Option<u32>,
    pub balanced_high: Option<u32>,
    pub spread_tolerance: Option<u32>,
}

impl QuizConfig {
    pub fn variant(&self) -> Option<Variant> {
        self.quiz.as_ref().and_then(|quiz| quiz.variant)
    }

    /// Variant defaults with any configured overrides applied on top.
    pub fn thresholds(&self, variant: Variant) -> Thresholds {
        let defaults = Thresholds::for_variant(variant);
        match &self.thresholds {
            Some(overrides) => Thresholds {
                crisis: overrides.crisis.unwrap_or(defaults.crisis),
                low: overrides.low.unwrap_or(defaults.low),
                critical: overrides.critical.unwrap_or(defaults.critical),
                moderate: overrides.moderate.unwrap_or(defaults.moderate),
                balanced_low: overrides.balanced_low.unwrap_or(defaults.balanced_low),
                balanced_high: overrides.balanced_high.unwrap_or(defaults.balanced_high),
                spread_tolerance: overrides
                    .spread_tolerance
                    .unwrap_or(defaults.spread_tolerance),
            },
            None => defaults,
        }
    }
}

/// Every cutoff the engine consults, against per-dimension totals. One
/// table per catalog variant; absolute values never cross variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    /// At or below: a dimension counts as in crisis (all five -> alerta_vermelho).
    pub crisis: u32,
    /// At or below: a second-lowest dimension is worth reporting.
    pub low: u32,
    /// At or below: severity is critical.
    pub critical: u32,
    /// At or below: severity is at least moderate.
    pub moderate: u32,
    /// Bottom of the lukewarm band.
    pub balanced_low: u32,
    /// Floor for general balance; the lukewarm band ends just below it.
    pub balanced_high: u32,
    /// Max spread for the balance and lukewarm patterns.
    pub spread_tolerance: u32,
}

impl Thresholds {
    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Full => Thresholds {
                crisis: 8,
                low: 12,
                critical: 8,
                moderate: 15,
                balanced_low: 13,
                balanced_high: 18,
                spread_tolerance: 3,
            },
            Variant::Compact => Thresholds {
                crisis: 3,
                low: 4,
                critical: 3,
                moderate: 5,
                balanced_low: 5,
                balanced_high: 7,
                spread_tolerance: 1,
            },
        }
    }

    pub fn validate(&self, catalog: &Catalog) -> Result<()> {
        let min_total = catalog.min_total();
        let max_total = catalog.max_total();
        if self.crisis < min_total {
            return Err(QuizError::InvalidThresholds(format!(
                "crisis ({}) is below the minimum attainable total ({})",
                self.crisis, min_total
            )));
        }
        if self.crisis >= self.balanced_low {
            return Err(QuizError::InvalidThresholds(format!(
                "crisis ({}) must sit below balanced_low ({})",
                self.crisis, self.balanced_low
            )));
        }
        if self.balanced_low > self.balanced_high {
            return Err(QuizError::InvalidThresholds(format!(
                "balanced_low ({}) exceeds balanced_high ({})",
                self.balanced_low, self.balanced_high
            )));
        }
        if self.balanced_high > max_total {
            return Err(QuizError::InvalidThresholds(format!(
                "balanced_high ({}) exceeds the maximum attainable total ({})",
                self.balanced_high, max_total
            )));
        }
        if self.critical > self.moderate {
            return Err(QuizError::InvalidThresholds(format!(
                "critical ({}) exceeds moderate ({})",
                self.critical, self.moderate
            )));
        }
        if self.low > max_total {
            return Err(QuizError::InvalidThresholds(format!(
                "low ({}) exceeds the maximum attainable total ({})",
                self.low, max_total
            )));
        }
        Ok(())
    }
}
