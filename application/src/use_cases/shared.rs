//! Helpers shared by the reveal and quick-vote flows
//!
//! Both flows are the same engine: submit, aggregate, classify, apply the
//! horizon side effect. Only the criteria set and the reveal timing differ.

use room_domain::{
    AggregateResult, AssumptionId, Horizon, ScoringPolicy, ScoringStore, StoreError,
    horizon_from_uncertainty,
};
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Derive and apply the urgency horizon for each aggregated assumption.
///
/// Overwrites any prior automatic classification; assumptions whose mean
/// uncertainty falls between the two thresholds are left untouched. Returns
/// the horizons that were actually written.
pub async fn apply_horizons<S: ScoringStore>(
    store: &S,
    results: &BTreeMap<AssumptionId, AggregateResult>,
    policy: &ScoringPolicy,
) -> Result<BTreeMap<AssumptionId, Horizon>, StoreError> {
    let mut applied = BTreeMap::new();

    for (assumption_id, result) in results {
        match horizon_from_uncertainty(result.avg_uncertainty(), policy) {
            Some(horizon) => {
                store
                    .update_assumption_horizon(*assumption_id, horizon)
                    .await?;
                info!("Assumption {} classified to horizon {}", assumption_id, horizon);
                applied.insert(*assumption_id, horizon);
            }
            None => {
                debug!(
                    "Assumption {} mean uncertainty {} between thresholds, horizon unchanged",
                    assumption_id,
                    result.avg_uncertainty()
                );
            }
        }
    }

    Ok(applied)
}
