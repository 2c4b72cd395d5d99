//! Detected opportunity descriptors.

use std::fmt;

use serde::Serialize;

use super::symbol::Symbol;

/// The pattern that produced an opportunity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OpportunityKind {
    /// Momentum and flow both elevated.
    MomentumFlow,
    /// Weak momentum with strong inflow into a falling price.
    OversoldBounce,
    /// Large move on heavy volume.
    HighVolumeMove,
}

impl fmt::Display for OpportunityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OpportunityKind::MomentumFlow => "momentum+flow",
            OpportunityKind::OversoldBounce => "oversold bounce",
            OpportunityKind::HighVolumeMove => "high-volume move",
        };
        write!(f, "{label}")
    }
}

/// Direction of the move an opportunity anticipates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    Up,
    Down,
}

/// A salient pattern detected over one cycle's record set.
#[derive(Debug, Clone, Serialize)]
pub struct Opportunity {
    pub symbol: Symbol,
    pub kind: OpportunityKind,
    pub direction: Direction,
    pub momentum_score: f64,
    pub fiat_flow_score: f64,
}

impl fmt::Display for Opportunity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} (momentum {:.1}, flow {:.1})",
            self.symbol, self.kind, self.momentum_score, self.fiat_flow_score
        )
    }
}
