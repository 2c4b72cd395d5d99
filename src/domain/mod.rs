//! Exchange-agnostic domain types for the signal pipeline.
//!
//! - [`Symbol`] - opaque ticker identifier
//! - [`MarketSnapshot`] - point-in-time market data for one symbol
//! - [`InflowSample`] - synthetic fiat-inflow sample
//! - [`SessionWindow`] - UTC trading-session window
//! - [`ScoreRecord`] - one scored, ranked, classified symbol per cycle
//! - [`Opportunity`] - a detected salient pattern
//!
//! All records are recomputed from scratch every refresh cycle and never
//! mutated after construction.

pub mod error;
pub mod inflow;
pub mod opportunity;
pub mod record;
pub mod session;
pub mod snapshot;
pub mod symbol;

pub use error::DomainError;
pub use inflow::InflowSample;
pub use opportunity::{Direction, Opportunity, OpportunityKind};
pub use record::{InflowLevel, ScoreRecord, Scores, Signal};
pub use session::SessionWindow;
pub use snapshot::MarketSnapshot;
pub use symbol::Symbol;
