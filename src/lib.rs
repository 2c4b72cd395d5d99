//! Fiatflow - crypto fiat-inflow signal tracking with graceful degradation.
//!
//! This crate ingests per-asset market data from unreliable external
//! sources, falls back to deterministic synthetic data when sources fail,
//! derives a synthetic fiat-inflow signal, and combines these into ranked
//! trading signals.
//!
//! # Architecture
//!
//! The pipeline runs the same stages every refresh cycle:
//!
//! - **`pipeline::universe`** - resolve the working symbol set from the
//!   exchange catalog, with a static fallback list
//! - **`pipeline::fetcher`** - concurrent per-symbol fetch over an ordered
//!   source chain (primary, secondary, synthesizer); output is total
//! - **`pipeline::inflow`** - session-aware, price-correlated synthetic
//!   inflow estimation
//! - **`pipeline::scoring`** - pure multi-factor scoring
//! - **`pipeline::rank`** + **`pipeline::classify`** - rank-gated inflow
//!   levels and a first-match signal table
//! - **`pipeline::detect`** - capped, priority-ordered opportunity scan
//!
//! External-source failures never propagate: every chain terminates in the
//! always-succeeding synthesizer, and degraded data is only visible through
//! each snapshot's authenticity flag.
//!
//! # Modules
//!
//! - [`app`] - Configuration loading, orchestration, shared state
//! - [`domain`] - Typed records with constructor-time validation
//! - [`error`] - Error types for the crate
//! - [`pipeline`] - The ingestion-fallback-and-scoring pipeline
//! - [`source`] - External catalog and market-data source adapters
//! - [`synth`] - Deterministic per-symbol data synthesis
//!
//! # Example
//!
//! ```no_run
//! use fiatflow::pipeline::{self, FetchConfig, FilterConfig};
//! # async fn run(primary: &dyn fiatflow::source::MarketSource,
//! #              secondary: &dyn fiatflow::source::MarketSource) {
//! let symbols = vec!["BTC".into(), "ETH".into()];
//! let result = pipeline::scan(
//!     primary,
//!     secondary,
//!     &symbols,
//!     &FetchConfig::default(),
//!     &FilterConfig::default(),
//!     chrono::Utc::now(),
//! )
//! .await;
//! # }
//! ```

pub mod app;
pub mod domain;
pub mod error;
pub mod pipeline;
pub mod source;
pub mod synth;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
