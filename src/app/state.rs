//! Shared application state.

use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;

use crate::pipeline::CycleStats;

/// Observability state carried across refresh cycles.
///
/// Holds only counters; pipeline output is never retained here, so every
/// cycle stays independent.
#[derive(Default)]
pub struct AppState {
    last_cycle: RwLock<Option<CycleStats>>,
    cycles_completed: AtomicU64,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the counters from a completed cycle.
    pub fn record_cycle(&self, stats: CycleStats) {
        *self.last_cycle.write() = Some(stats);
        self.cycles_completed.fetch_add(1, Ordering::Relaxed);
    }

    /// The most recent cycle's counters, if any cycle has completed.
    #[must_use]
    pub fn last_cycle(&self) -> Option<CycleStats> {
        *self.last_cycle.read()
    }

    /// Total cycles completed since startup.
    #[must_use]
    pub fn cycles_completed(&self) -> u64 {
        self.cycles_completed.load(Ordering::Relaxed)
    }

    /// Whether the last cycle served any synthetic data.
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.last_cycle()
            .map(|stats| stats.synthetic > 0)
            .unwrap_or(false)
    }
}
