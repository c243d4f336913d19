//! Scoring criteria and their validation
//!
//! A score is a fixed-shape record of named integer criteria, never an ad hoc
//! map: malformed or extra fields cannot reach the store.

use crate::core::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named rating dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Criterion {
    Impact,
    Uncertainty,
    Feasibility,
    Confidence,
}

impl Criterion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Criterion::Impact => "impact",
            Criterion::Uncertainty => "uncertainty",
            Criterion::Feasibility => "feasibility",
            Criterion::Confidence => "confidence",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which criteria a flow requires.
///
/// The session scoring flow collects all four dimensions; the quick-vote flow
/// collects impact and uncertainty only. Both run through the same engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CriteriaSet {
    /// Impact, uncertainty, feasibility and confidence.
    #[default]
    Full,
    /// Impact and uncertainty only.
    Quick,
}

impl CriteriaSet {
    /// The criteria this set requires to be present.
    pub fn required(&self) -> &'static [Criterion] {
        match self {
            CriteriaSet::Full => &[
                Criterion::Impact,
                Criterion::Uncertainty,
                Criterion::Feasibility,
                Criterion::Confidence,
            ],
            CriteriaSet::Quick => &[Criterion::Impact, Criterion::Uncertainty],
        }
    }
}

/// One rater's criterion values for one assumption.
///
/// Impact and uncertainty are always present; feasibility and confidence are
/// absent in the quick-vote flow.
///
/// # Example
///
/// ```
/// use room_domain::scoring::{CriteriaScores, ScoreBounds};
///
/// let scores = CriteriaScores::full(5, 4, 3, 2);
/// assert!(scores.validate(ScoreBounds::default()).is_ok());
///
/// let out_of_range = CriteriaScores::quick(9, 1);
/// assert!(out_of_range.validate(ScoreBounds::default()).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriteriaScores {
    pub impact: u8,
    pub uncertainty: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feasibility: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<u8>,
}

impl CriteriaScores {
    /// Full four-criterion score for the session scoring flow.
    pub fn full(impact: u8, uncertainty: u8, feasibility: u8, confidence: u8) -> Self {
        Self {
            impact,
            uncertainty,
            feasibility: Some(feasibility),
            confidence: Some(confidence),
        }
    }

    /// Two-criterion score for the quick-vote flow.
    pub fn quick(impact: u8, uncertainty: u8) -> Self {
        Self {
            impact,
            uncertainty,
            feasibility: None,
            confidence: None,
        }
    }

    /// Value for a single criterion, if present.
    pub fn get(&self, criterion: Criterion) -> Option<u8> {
        match criterion {
            Criterion::Impact => Some(self.impact),
            Criterion::Uncertainty => Some(self.uncertainty),
            Criterion::Feasibility => self.feasibility,
            Criterion::Confidence => self.confidence,
        }
    }

    /// Iterate over the criteria that carry a value.
    pub fn present(&self) -> impl Iterator<Item = (Criterion, u8)> + '_ {
        [
            Criterion::Impact,
            Criterion::Uncertainty,
            Criterion::Feasibility,
            Criterion::Confidence,
        ]
        .into_iter()
        .filter_map(|c| self.get(c).map(|v| (c, v)))
    }

    /// Validate every present value against the configured bounds.
    ///
    /// Out-of-bounds values are rejected, never clamped.
    pub fn validate(&self, bounds: ScoreBounds) -> Result<(), ValidationError> {
        for (criterion, value) in self.present() {
            if !bounds.contains(value) {
                return Err(ValidationError::OutOfRange {
                    criterion: criterion.as_str().to_string(),
                    value: value as i64,
                    min: bounds.min as i64,
                    max: bounds.max as i64,
                });
            }
        }
        Ok(())
    }

    /// Validate bounds and that every criterion the set requires is present.
    pub fn validate_for(
        &self,
        set: CriteriaSet,
        bounds: ScoreBounds,
    ) -> Result<(), ValidationError> {
        for criterion in set.required() {
            if self.get(*criterion).is_none() {
                return Err(ValidationError::MissingCriterion(
                    criterion.as_str().to_string(),
                ));
            }
        }
        self.validate(bounds)
    }
}

/// Inclusive bounds for criterion values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBounds {
    pub min: u8,
    pub max: u8,
}

impl ScoreBounds {
    pub fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: u8) -> bool {
        value >= self.min && value <= self.max
    }

    /// Midpoint of the scale, used by the heatmap quadrant split.
    pub fn midpoint(&self) -> f64 {
        (self.min as f64 + self.max as f64) / 2.0
    }
}

impl Default for ScoreBounds {
    fn default() -> Self {
        Self { min: 0, max: 5 }
    }
}
