//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`source`] — Scripted [`MarketSource`](crate::source::MarketSource)
//!   and [`SymbolCatalog`](crate::source::SymbolCatalog) implementations:
//!   `StaticSource`, `FailingSource`, `ScriptedCatalog`.

pub mod source;
