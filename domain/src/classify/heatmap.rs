//! Priority heatmap classification
//!
//! Places an assumption's aggregated (impact, uncertainty) pair into one of
//! four quadrants split at the scale midpoint.

use crate::scoring::ScoreBounds;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Quadrant label for an aggregated (impact, uncertainty) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeatmapLabel {
    /// High impact, high uncertainty: the riskiest bets, test these first.
    TestFirst,
    /// High impact, low uncertainty: well-understood leverage, build on it.
    DoubleDown,
    /// Low impact, high uncertainty: watch, but do not spend testing effort.
    Monitor,
    /// Low impact, low uncertainty: park it.
    Park,
}

impl HeatmapLabel {
    /// Classify against the scale midpoint.
    ///
    /// A value exactly at the midpoint counts toward the higher-priority
    /// bucket on both axes: high impact, and high uncertainty.
    pub fn classify(avg_impact: f64, avg_uncertainty: f64, bounds: ScoreBounds) -> Self {
        let midpoint = bounds.midpoint();
        let high_impact = avg_impact >= midpoint;
        let high_uncertainty = avg_uncertainty >= midpoint;

        match (high_impact, high_uncertainty) {
            (true, true) => HeatmapLabel::TestFirst,
            (true, false) => HeatmapLabel::DoubleDown,
            (false, true) => HeatmapLabel::Monitor,
            (false, false) => HeatmapLabel::Park,
        }
    }

    pub fn is_high_priority(&self) -> bool {
        matches!(self, HeatmapLabel::TestFirst)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HeatmapLabel::TestFirst => "test_first",
            HeatmapLabel::DoubleDown => "double_down",
            HeatmapLabel::Monitor => "monitor",
            HeatmapLabel::Park => "park",
        }
    }
}

impl fmt::Display for HeatmapLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
