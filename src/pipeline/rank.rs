//! Rank aggregation and inflow level assignment.

use std::cmp::Ordering;

use crate::domain::{InflowLevel, ScoreRecord};

use super::ScoredSnapshot;

/// Sort by fiat flow score descending (ties by symbol lexical order),
/// assign 1-based ranks, and derive the inflow level per record.
#[must_use]
pub fn rank(mut scored: Vec<ScoredSnapshot>) -> Vec<ScoreRecord> {
    scored.sort_by(|a, b| {
        b.scores
            .fiat_flow_score
            .partial_cmp(&a.scores.fiat_flow_score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.snapshot.symbol.cmp(&b.snapshot.symbol))
    });

    scored
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let inflow_rank = index + 1;
            ScoreRecord {
                symbol: entry.snapshot.symbol.clone(),
                fiat_flow_score: entry.scores.fiat_flow_score,
                momentum_score: entry.scores.momentum_score,
                volume_score: entry.scores.volume_score,
                combined_score: entry.scores.combined_score,
                price_change_percent: entry.snapshot.price_change_percent,
                quote_volume: entry.snapshot.quote_volume,
                is_authentic: entry.snapshot.is_authentic,
                signal: entry.signal,
                inflow_level: level_for(inflow_rank, entry.scores.fiat_flow_score),
                inflow_rank,
            }
        })
        .collect()
}

/// Level assignment, rank-gated: the rank cap dominates the score
/// threshold, so a high score outside the top ranks does not qualify.
#[must_use]
pub fn level_for(rank: usize, fiat_flow_score: f64) -> InflowLevel {
    if rank <= 3 && fiat_flow_score > 150.0 {
        InflowLevel::VeryHigh
    } else if rank <= 8 && fiat_flow_score > 120.0 {
        InflowLevel::High
    } else if fiat_flow_score > 100.0 {
        InflowLevel::Medium
    } else {
        InflowLevel::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{InflowSample, MarketSnapshot, Scores, Signal, Symbol};

    fn entry(ticker: &str, flow: f64) -> ScoredSnapshot {
        ScoredSnapshot {
            snapshot: MarketSnapshot::synthetic(
                Symbol::new(ticker),
                100.0,
                0.0,
                10.0,
                1_000.0,
                101.0,
                99.0,
                0,
            ),
            inflow: InflowSample::new(100.0, 100.0, 100, 1.0),
            scores: Scores {
                fiat_flow_score: flow,
                momentum_score: flow * 0.6,
                volume_score: 0.0,
                combined_score: flow * 0.56 + 10.0,
            },
            signal: Signal::Hold,
        }
    }

    #[test]
    fn ranks_by_flow_score_descending() {
        let records = rank(vec![entry("ADA", 90.0), entry("BTC", 160.0), entry("ETH", 120.0)]);

        assert_eq!(records[0].symbol.as_str(), "BTC");
        assert_eq!(records[0].inflow_rank, 1);
        assert_eq!(records[1].symbol.as_str(), "ETH");
        assert_eq!(records[2].symbol.as_str(), "ADA");
        assert_eq!(records[2].inflow_rank, 3);
    }

    #[test]
    fn ties_break_by_symbol_lexical_order() {
        let records = rank(vec![entry("XRP", 120.0), entry("ADA", 120.0), entry("DOT", 120.0)]);

        let tickers: Vec<&str> = records.iter().map(|r| r.symbol.as_str()).collect();
        assert_eq!(tickers, vec!["ADA", "DOT", "XRP"]);
    }

    #[test]
    fn rank_gate_dominates_score_threshold() {
        // Scores [160, 155, 151, 150, 140, ...]: the first three qualify for
        // VeryHigh, the 4th stays High despite clearing the score threshold.
        let mut entries = vec![
            entry("AAA", 160.0),
            entry("BBB", 155.0),
            entry("CCC", 151.0),
            entry("DDD", 150.0),
            entry("EEE", 140.0),
        ];
        for (i, ticker) in ["FFF", "GGG", "HHH", "III", "JJJ"].iter().enumerate() {
            entries.push(entry(ticker, 130.0 - i as f64));
        }

        let records = rank(entries);

        assert_eq!(records[0].inflow_level, InflowLevel::VeryHigh);
        assert_eq!(records[1].inflow_level, InflowLevel::VeryHigh);
        assert_eq!(records[2].inflow_level, InflowLevel::VeryHigh);
        // Rank 4, score 150: rank-gated out of VeryHigh.
        assert_eq!(records[3].inflow_rank, 4);
        assert_eq!(records[3].inflow_level, InflowLevel::High);
    }

    #[test]
    fn level_thresholds() {
        assert_eq!(level_for(1, 151.0), InflowLevel::VeryHigh);
        assert_eq!(level_for(4, 155.0), InflowLevel::High);
        assert_eq!(level_for(8, 121.0), InflowLevel::High);
        assert_eq!(level_for(9, 121.0), InflowLevel::Medium);
        assert_eq!(level_for(9, 101.0), InflowLevel::Medium);
        assert_eq!(level_for(2, 100.0), InflowLevel::Low);
    }
}
