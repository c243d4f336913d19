//! Scoring policy parameters
//!
//! The spread and horizon thresholds are policy, not constants: they are
//! loaded from configuration by the infrastructure layer and threaded through
//! every aggregation and classification call.

use super::criteria::ScoreBounds;
use serde::{Deserialize, Serialize};

/// Externally configurable policy for scoring, disagreement and horizons.
///
/// Defaults match the reference deployment: a 0–5 scale, disagreement when a
/// criterion's spread strictly exceeds 2, horizon "now" at mean uncertainty
/// ≥ 4 and "later" at ≤ 2.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringPolicy {
    /// Inclusive bounds for every criterion value.
    pub bounds: ScoreBounds,
    /// Disagreement flags when any criterion's (max − min) exceeds this.
    pub disagreement_spread: u8,
    /// Mean uncertainty at or above this classifies the horizon as "now".
    pub horizon_now_threshold: f64,
    /// Mean uncertainty at or below this classifies the horizon as "later".
    pub horizon_later_threshold: f64,
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            bounds: ScoreBounds::default(),
            disagreement_spread: 2,
            horizon_now_threshold: 4.0,
            horizon_later_threshold: 2.0,
        }
    }
}

impl ScoringPolicy {
    /// Set the criterion bounds.
    pub fn with_bounds(mut self, bounds: ScoreBounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Set the disagreement spread threshold.
    pub fn with_disagreement_spread(mut self, spread: u8) -> Self {
        self.disagreement_spread = spread;
        self
    }

    /// Set the two horizon thresholds.
    pub fn with_horizon_thresholds(mut self, now: f64, later: f64) -> Self {
        self.horizon_now_threshold = now;
        self.horizon_later_threshold = later;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_reference_constants() {
        let policy = ScoringPolicy::default();
        assert_eq!(policy.bounds, ScoreBounds::new(0, 5));
        assert_eq!(policy.disagreement_spread, 2);
        assert_eq!(policy.horizon_now_threshold, 4.0);
        assert_eq!(policy.horizon_later_threshold, 2.0);
    }

    #[test]
    fn test_builder_methods() {
        let policy = ScoringPolicy::default()
            .with_bounds(ScoreBounds::new(1, 10))
            .with_disagreement_spread(4)
            .with_horizon_thresholds(8.0, 3.0);

        assert_eq!(policy.bounds.max, 10);
        assert_eq!(policy.disagreement_spread, 4);
        assert_eq!(policy.horizon_now_threshold, 8.0);
    }
}
