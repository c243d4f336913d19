//! Urgency horizon classification
//!
//! Maps mean uncertainty to the roadmap lane an assumption should be
//! validated in. The middle lane ("next") is only ever set by explicit manual
//! action, never by this rule.

use crate::scoring::ScoringPolicy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Three-valued urgency classification for validating an assumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Horizon {
    Now,
    Next,
    Later,
}

impl Horizon {
    pub fn as_str(&self) -> &'static str {
        match self {
            Horizon::Now => "now",
            Horizon::Next => "next",
            Horizon::Later => "later",
        }
    }
}

impl fmt::Display for Horizon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Horizon {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "now" => Ok(Horizon::Now),
            "next" => Ok(Horizon::Next),
            "later" => Ok(Horizon::Later),
            _ => Err(format!("Unknown horizon: {}. Valid: now, next, later", s)),
        }
    }
}

/// Derive a horizon from mean uncertainty.
///
/// Returns `Now` at or above the now-threshold, `Later` at or below the
/// later-threshold, and `None` in between; the assumption's current horizon
/// is left untouched.
pub fn horizon_from_uncertainty(avg_uncertainty: f64, policy: &ScoringPolicy) -> Option<Horizon> {
    if avg_uncertainty >= policy.horizon_now_threshold {
        Some(Horizon::Now)
    } else if avg_uncertainty <= policy.horizon_later_threshold {
        Some(Horizon::Later)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_now_threshold_classifies_now() {
        let policy = ScoringPolicy::default();
        assert_eq!(horizon_from_uncertainty(4.0, &policy), Some(Horizon::Now));
        assert_eq!(horizon_from_uncertainty(5.0, &policy), Some(Horizon::Now));
    }

    #[test]
    fn test_at_later_threshold_classifies_later() {
        let policy = ScoringPolicy::default();
        assert_eq!(horizon_from_uncertainty(2.0, &policy), Some(Horizon::Later));
        assert_eq!(horizon_from_uncertainty(0.0, &policy), Some(Horizon::Later));
    }

    #[test]
    fn test_between_thresholds_leaves_horizon_unchanged() {
        let policy = ScoringPolicy::default();
        assert_eq!(horizon_from_uncertainty(3.0, &policy), None);
        assert_eq!(horizon_from_uncertainty(2.1, &policy), None);
        assert_eq!(horizon_from_uncertainty(3.9, &policy), None);
    }

    #[test]
    fn test_next_is_never_assigned_automatically() {
        let policy = ScoringPolicy::default();
        for tenths in 0..=50 {
            let avg = tenths as f64 / 10.0;
            assert_ne!(horizon_from_uncertainty(avg, &policy), Some(Horizon::Next));
        }
    }

    #[test]
    fn test_parse_horizon() {
        assert_eq!("now".parse::<Horizon>().ok(), Some(Horizon::Now));
        assert_eq!("NEXT".parse::<Horizon>().ok(), Some(Horizon::Next));
        assert_eq!("later".parse::<Horizon>().ok(), Some(Horizon::Later));
        assert!("soon".parse::<Horizon>().is_err());
    }
}
