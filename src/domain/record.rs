//! Scored, ranked, classified output records.
//!
//! - [`Scores`] - the four factor scores computed by the scoring engine
//! - [`Signal`] - discrete trading signal
//! - [`InflowLevel`] - discrete inflow level, derived jointly from rank and score
//! - [`ScoreRecord`] - the immutable per-symbol output of one refresh cycle

use std::fmt;

use serde::Serialize;

use super::symbol::Symbol;

/// Factor scores for one snapshot + inflow pair.
///
/// `fiat_flow_score` is bounded to `[0, 200]` and `volume_score` to
/// `[0, 100]` by construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Scores {
    pub fiat_flow_score: f64,
    pub momentum_score: f64,
    pub volume_score: f64,
    pub combined_score: f64,
}

/// Discrete trading signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Signal {
    StrongBuy,
    Buy,
    Hold,
    Sell,
    StrongSell,
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Signal::StrongBuy => "STRONG BUY",
            Signal::Buy => "BUY",
            Signal::Hold => "HOLD",
            Signal::Sell => "SELL",
            Signal::StrongSell => "STRONG SELL",
        };
        write!(f, "{label}")
    }
}

/// Discrete inflow level, assigned by the rank aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InflowLevel {
    VeryHigh,
    High,
    Medium,
    Low,
}

impl fmt::Display for InflowLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            InflowLevel::VeryHigh => "VERY HIGH",
            InflowLevel::High => "HIGH",
            InflowLevel::Medium => "MEDIUM",
            InflowLevel::Low => "LOW",
        };
        write!(f, "{label}")
    }
}

/// One symbol's scored output for a refresh cycle.
///
/// Created fresh each cycle by the rank aggregator and never mutated
/// afterwards. Carries the snapshot fields the display layer and the
/// opportunity detector read, so consumers never reach back into the
/// fetch stage.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreRecord {
    pub symbol: Symbol,
    pub fiat_flow_score: f64,
    pub momentum_score: f64,
    pub volume_score: f64,
    pub combined_score: f64,
    /// 24h price change of the underlying snapshot, in percent.
    pub price_change_percent: f64,
    /// 24h quote volume of the underlying snapshot.
    pub quote_volume: f64,
    /// Whether the underlying snapshot came from a live source.
    pub is_authentic: bool,
    pub signal: Signal,
    pub inflow_level: InflowLevel,
    /// 1-based rank by fiat flow score.
    pub inflow_rank: usize,
}
