//! Domain validation errors for core domain types.
//!
//! These errors are returned by `try_new` constructors that validate
//! inputs. Within the pipeline they only surface for live-sourced data;
//! synthetic construction satisfies the invariants by clamping.

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone)]
pub enum DomainError {
    /// Price bounds must satisfy `high >= price >= low >= 0`.
    #[error("price bounds violated: high {high}, price {price}, low {low}")]
    PriceBounds {
        /// 24h high.
        high: f64,
        /// Last price.
        price: f64,
        /// 24h low.
        low: f64,
    },

    /// Volume fields must be non-negative.
    #[error("{field} must be non-negative, got {value}")]
    NegativeVolume {
        /// Which volume field was invalid.
        field: &'static str,
        /// The invalid value that was provided.
        value: f64,
    },

    /// Numeric fields must be finite.
    #[error("{field} must be finite")]
    NonFinite {
        /// Which field was invalid.
        field: &'static str,
    },
}
