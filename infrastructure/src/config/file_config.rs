//! Scoring configuration from TOML (`[policy]` section)
//!
//! The spread and horizon thresholds are deployment policy, not engine
//! constants. Defaults reproduce the reference deployment's behavior.
//!
//! Example configuration:
//!
//! ```toml
//! [policy]
//! score_min = 0
//! score_max = 5
//! disagreement_spread = 2
//! horizon_now_threshold = 4.0
//! horizon_later_threshold = 2.0
//! ```

use room_domain::{ScoreBounds, ScoringPolicy};
use serde::{Deserialize, Serialize};

/// Root configuration file shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    pub policy: FilePolicyConfig,
}

impl FileConfig {
    /// Materialise the domain scoring policy.
    pub fn scoring_policy(&self) -> ScoringPolicy {
        self.policy.to_policy()
    }
}

/// Scoring policy parameters (`[policy]` section).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePolicyConfig {
    /// Inclusive lower bound for criterion values.
    pub score_min: u8,
    /// Inclusive upper bound for criterion values.
    pub score_max: u8,
    /// Disagreement flags when a criterion's spread strictly exceeds this.
    pub disagreement_spread: u8,
    /// Mean uncertainty at or above this moves the horizon to "now".
    pub horizon_now_threshold: f64,
    /// Mean uncertainty at or below this moves the horizon to "later".
    pub horizon_later_threshold: f64,
}

impl Default for FilePolicyConfig {
    fn default() -> Self {
        Self {
            score_min: 0,
            score_max: 5,
            disagreement_spread: 2,
            horizon_now_threshold: 4.0,
            horizon_later_threshold: 2.0,
        }
    }
}

impl FilePolicyConfig {
    /// Convert into the domain policy type.
    pub fn to_policy(&self) -> ScoringPolicy {
        ScoringPolicy::default()
            .with_bounds(ScoreBounds::new(self.score_min, self.score_max))
            .with_disagreement_spread(self.disagreement_spread)
            .with_horizon_thresholds(self.horizon_now_threshold, self.horizon_later_threshold)
    }
}
