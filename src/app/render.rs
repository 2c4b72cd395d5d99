//! Terminal rendering of pipeline output.
//!
//! The thin display collaborator: a table of records, an alert section
//! for the strongest signals, and the detected opportunities. Everything
//! here consumes finished [`ScoreRecord`]s; no scoring logic lives in
//! this module.

use owo_colors::OwoColorize;
use tabled::{Table, Tabled};

use crate::app::state::AppState;
use crate::domain::{ScoreRecord, Signal};
use crate::pipeline::ScanResult;

/// How many strong buy/sell alerts to show per side.
const MAX_ALERTS_PER_SIDE: usize = 3;

#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "Rank")]
    rank: usize,
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Signal")]
    signal: String,
    #[tabled(rename = "Flow")]
    flow: String,
    #[tabled(rename = "Momentum")]
    momentum: String,
    #[tabled(rename = "Volume")]
    volume: String,
    #[tabled(rename = "Combined")]
    combined: String,
    #[tabled(rename = "24h %")]
    change: String,
    #[tabled(rename = "Level")]
    level: String,
    #[tabled(rename = "Source")]
    source: &'static str,
}

impl From<&ScoreRecord> for RecordRow {
    fn from(record: &ScoreRecord) -> Self {
        Self {
            rank: record.inflow_rank,
            symbol: record.symbol.to_string(),
            signal: record.signal.to_string(),
            flow: format!("{:.0}", record.fiat_flow_score),
            momentum: format!("{:.1}", record.momentum_score),
            volume: format!("{:.0}", record.volume_score),
            combined: format!("{:.1}", record.combined_score),
            change: format!("{:+.2}", record.price_change_percent),
            level: record.inflow_level.to_string(),
            source: if record.is_authentic { "live" } else { "synth" },
        }
    }
}

/// Print one cycle's output.
pub fn print_cycle(result: &ScanResult, state: &AppState) {
    println!();
    if result.records.is_empty() {
        println!("  No records passed the configured filters.");
    } else {
        let rows: Vec<RecordRow> = result.records.iter().map(RecordRow::from).collect();
        let table = Table::new(rows).to_string();
        for line in table.lines() {
            println!("  {line}");
        }
    }

    print_alerts(&result.records);
    print_opportunities(result);

    println!();
    let stats = result.stats;
    let mut summary = format!(
        "cycle {} | {} symbols, {} live / {} synthetic",
        state.cycles_completed(),
        stats.total,
        stats.authentic,
        stats.synthetic
    );
    if stats.synthetic > 0 {
        summary.push_str(" (degraded)");
        println!("  {}", summary.yellow());
    } else {
        println!("  {summary}");
    }
}

fn print_alerts(records: &[ScoreRecord]) {
    let strong_buys: Vec<&ScoreRecord> = records
        .iter()
        .filter(|r| r.signal == Signal::StrongBuy)
        .take(MAX_ALERTS_PER_SIDE)
        .collect();
    let strong_sells: Vec<&ScoreRecord> = records
        .iter()
        .filter(|r| r.signal == Signal::StrongSell)
        .take(MAX_ALERTS_PER_SIDE)
        .collect();

    if strong_buys.is_empty() && strong_sells.is_empty() {
        return;
    }

    println!();
    for record in strong_buys {
        println!(
            "  {}",
            format!(
                "{}: strong buy (momentum {:.1})",
                record.symbol, record.momentum_score
            )
            .green()
        );
    }
    for record in strong_sells {
        println!(
            "  {}",
            format!(
                "{}: strong sell (momentum {:.1})",
                record.symbol, record.momentum_score
            )
            .red()
        );
    }
}

fn print_opportunities(result: &ScanResult) {
    if result.opportunities.is_empty() {
        return;
    }

    println!();
    for opportunity in &result.opportunities {
        println!("  {}", opportunity.cyan());
    }
}
