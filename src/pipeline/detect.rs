//! Opportunity detection.
//!
//! Scans the full ranked record set with three rules, concatenates their
//! hits in fixed priority order, and truncates to [`MAX_OPPORTUNITIES`].

use crate::domain::{Direction, Opportunity, OpportunityKind, ScoreRecord};

/// Hard cap on detected opportunities per cycle.
pub const MAX_OPPORTUNITIES: usize = 5;

/// Detect salient patterns over one cycle's ranked records.
///
/// Records are visited in rank order within each rule, so output is
/// deterministic for a given record set.
#[must_use]
pub fn detect(records: &[ScoreRecord]) -> Vec<Opportunity> {
    let mut opportunities = Vec::new();

    for record in records {
        if record.momentum_score > 80.0 && record.fiat_flow_score > 120.0 {
            opportunities.push(descriptor(record, OpportunityKind::MomentumFlow, Direction::Up));
        }
    }

    for record in records {
        if record.momentum_score < 60.0
            && record.fiat_flow_score > 100.0
            && record.price_change_percent < -1.0
        {
            opportunities.push(descriptor(
                record,
                OpportunityKind::OversoldBounce,
                Direction::Up,
            ));
        }
    }

    for record in records {
        if record.volume_score > 70.0 && record.price_change_percent.abs() > 3.0 {
            let direction = if record.price_change_percent >= 0.0 {
                Direction::Up
            } else {
                Direction::Down
            };
            opportunities.push(descriptor(record, OpportunityKind::HighVolumeMove, direction));
        }
    }

    opportunities.truncate(MAX_OPPORTUNITIES);
    opportunities
}

fn descriptor(record: &ScoreRecord, kind: OpportunityKind, direction: Direction) -> Opportunity {
    Opportunity {
        symbol: record.symbol.clone(),
        kind,
        direction,
        momentum_score: record.momentum_score,
        fiat_flow_score: record.fiat_flow_score,
    }
}
