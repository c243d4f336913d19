//! Downstream classification of aggregated scores

pub mod heatmap;
pub mod horizon;

pub use heatmap::HeatmapLabel;
pub use horizon::{Horizon, horizon_from_uncertainty};
