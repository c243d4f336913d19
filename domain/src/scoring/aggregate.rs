//! Score aggregation
//!
//! An [`AggregateResult`] is derived, never authoritative: it is recomputed
//! from the stored scores on every reveal and must be identical across
//! repeated computation over the same committed rows.

use super::criteria::{Criterion, CriteriaScores};
use super::policy::ScoringPolicy;
use super::score::ScoreRecord;
use crate::core::AssumptionId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregated judgment for one assumption.
///
/// # Example
///
/// ```
/// use room_domain::scoring::{AggregateResult, Criterion, CriteriaScores, ScoringPolicy};
///
/// let scores = [
///     CriteriaScores::quick(5, 5),
///     CriteriaScores::quick(5, 4),
///     CriteriaScores::quick(0, 3),
/// ];
/// let result = AggregateResult::from_scores(&scores, &ScoringPolicy::default()).unwrap();
/// assert_eq!(result.count, 3);
/// assert_eq!(result.mean(Criterion::Impact), Some(3.3));
/// assert!(result.disagreement); // impact spread 5 > 2
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateResult {
    /// Per-criterion arithmetic mean, rounded to one decimal.
    ///
    /// `BTreeMap` keeps iteration (and serialization) order deterministic so
    /// repeated reveals over unchanged rows are bit-identical.
    pub means: BTreeMap<Criterion, f64>,
    /// Number of raters who scored this assumption.
    pub count: usize,
    /// Whether any single criterion's spread exceeded the policy threshold.
    pub disagreement: bool,
}

impl AggregateResult {
    /// Aggregate one assumption's scores.
    ///
    /// Returns `None` for an empty slice: an assumption nobody scored is
    /// omitted from reveal output, not reported with placeholder zeros.
    pub fn from_scores(scores: &[CriteriaScores], policy: &ScoringPolicy) -> Option<Self> {
        if scores.is_empty() {
            return None;
        }

        let mut means = BTreeMap::new();
        let mut disagreement = false;

        for criterion in [
            Criterion::Impact,
            Criterion::Uncertainty,
            Criterion::Feasibility,
            Criterion::Confidence,
        ] {
            let values: Vec<u8> = scores.iter().filter_map(|s| s.get(criterion)).collect();
            if values.is_empty() {
                continue;
            }

            let sum: u32 = values.iter().map(|&v| v as u32).sum();
            means.insert(criterion, round_one_decimal(sum as f64 / values.len() as f64));

            // Fewer than two values is insufficient signal for disagreement.
            if values.len() >= 2 {
                let max = *values.iter().max().unwrap_or(&0);
                let min = *values.iter().min().unwrap_or(&0);
                if max - min > policy.disagreement_spread {
                    disagreement = true;
                }
            }
        }

        Some(Self {
            means,
            count: scores.len(),
            disagreement,
        })
    }

    /// Mean for a single criterion, if any rater provided it.
    pub fn mean(&self, criterion: Criterion) -> Option<f64> {
        self.means.get(&criterion).copied()
    }

    /// Mean impact, defaulting to the scale floor when absent.
    pub fn avg_impact(&self) -> f64 {
        self.mean(Criterion::Impact).unwrap_or(0.0)
    }

    /// Mean uncertainty, defaulting to the scale floor when absent.
    pub fn avg_uncertainty(&self) -> f64 {
        self.mean(Criterion::Uncertainty).unwrap_or(0.0)
    }
}

/// Group committed score rows by assumption and aggregate each group.
///
/// Assumptions absent from the vote set are excluded entirely.
pub fn aggregate_by_assumption(
    records: &[ScoreRecord],
    policy: &ScoringPolicy,
) -> BTreeMap<AssumptionId, AggregateResult> {
    let mut grouped: BTreeMap<AssumptionId, Vec<CriteriaScores>> = BTreeMap::new();
    for record in records {
        grouped
            .entry(record.assumption_id)
            .or_default()
            .push(record.criteria);
    }

    grouped
        .into_iter()
        .filter_map(|(assumption, scores)| {
            AggregateResult::from_scores(&scores, policy).map(|r| (assumption, r))
        })
        .collect()
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
