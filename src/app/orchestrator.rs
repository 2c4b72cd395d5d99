//! App orchestration module.
//!
//! Drives refresh cycles: resolve the universe, run the pipeline, render,
//! sleep, repeat. Each cycle is independent; cancellation between cycles
//! is handled by the caller racing this loop against a shutdown signal.

use std::time::Duration;

use chrono::Utc;
use reqwest::Client;
use tracing::info;

use crate::app::config::Config;
use crate::app::render;
use crate::app::state::AppState;
use crate::domain::Symbol;
use crate::error::Result;
use crate::pipeline::{self, universe};
use crate::source::{BinanceCatalog, BinanceTicker, CoinGeckoSource};

/// Main application orchestrator.
pub struct Orchestrator;

impl Orchestrator {
    /// Run the refresh-cycle loop.
    ///
    /// With `once` set, runs a single cycle and returns. A non-empty
    /// `symbol_override` skips universe resolution entirely.
    pub async fn run(
        config: Config,
        once: bool,
        symbol_override: Option<Vec<Symbol>>,
    ) -> Result<()> {
        info!(
            interval_secs = config.refresh.interval_secs,
            max_symbols = config.universe.max_symbols,
            "Starting fiatflow"
        );

        // One client for all sources; reqwest's timeout is a backstop
        // behind the fetcher's own per-attempt bound.
        let client = Client::builder()
            .timeout(Duration::from_secs(config.fetch.timeout_secs.max(10)))
            .user_agent(concat!("fiatflow/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let catalog = BinanceCatalog::new(client.clone(), &config.sources.binance_url)?;
        let primary = BinanceTicker::new(
            client.clone(),
            &config.sources.binance_url,
            &config.universe.settlement_asset,
        )?;
        let secondary = CoinGeckoSource::new(client, &config.sources.coingecko_url)?;

        let state = AppState::new();

        let mut interval =
            tokio::time::interval(Duration::from_secs(config.refresh.interval_secs));
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        loop {
            interval.tick().await;

            let symbols = match &symbol_override {
                Some(symbols) => symbols.clone(),
                None => universe::resolve(&catalog, &config.universe).await,
            };

            let result = pipeline::scan(
                &primary,
                &secondary,
                &symbols,
                &config.fetch,
                &config.filter,
                Utc::now(),
            )
            .await;

            state.record_cycle(result.stats);
            render::print_cycle(&result, &state);

            if once {
                break;
            }
        }

        Ok(())
    }
}
