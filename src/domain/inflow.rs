//! Synthetic fiat-inflow sample.

use serde::Serialize;

/// A per-symbol fiat-inflow estimate for one refresh cycle.
///
/// Both inflow fields are clamped to a minimum of 1.0 at construction so
/// downstream flow-ratio math never divides by zero.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct InflowSample {
    /// Current inflow estimate, in thousands of settlement units.
    pub current_inflow: f64,
    /// Rolling 5-minute average inflow baseline.
    pub avg_inflow_5min: f64,
    /// Estimated transactions per minute.
    pub transactions_per_minute: u64,
    /// The session multiplier applied to this sample.
    pub session_multiplier: f64,
}

impl InflowSample {
    /// Create a sample, clamping both inflow fields to at least 1.0.
    #[must_use]
    pub fn new(
        current_inflow: f64,
        avg_inflow_5min: f64,
        transactions_per_minute: u64,
        session_multiplier: f64,
    ) -> Self {
        Self {
            current_inflow: current_inflow.max(1.0),
            avg_inflow_5min: avg_inflow_5min.max(1.0),
            transactions_per_minute,
            session_multiplier,
        }
    }

    /// Ratio of current inflow to the 5-minute baseline.
    #[must_use]
    pub fn flow_ratio(&self) -> f64 {
        self.current_inflow / self.avg_inflow_5min
    }
}
