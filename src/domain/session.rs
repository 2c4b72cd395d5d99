//! UTC trading-session windows.

use std::fmt;

use chrono::{DateTime, Timelike, Utc};

/// One of three fixed UTC trading sessions.
///
/// The three half-open hour ranges are contiguous and cover the full day:
/// Asia `[0, 8)`, Europe `[8, 16)`, New York `[16, 24)`. Exactly one
/// session is active at any instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionWindow {
    Asia,
    Europe,
    NewYork,
}

impl SessionWindow {
    /// Determine the active session for a point in time.
    #[must_use]
    pub fn at(now: DateTime<Utc>) -> Self {
        Self::from_hour(now.hour())
    }

    /// Determine the session for a UTC hour.
    #[must_use]
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            0..=7 => SessionWindow::Asia,
            8..=15 => SessionWindow::Europe,
            16..=23 => SessionWindow::NewYork,
            // Unreachable for valid hours; New York is the defensive default.
            _ => SessionWindow::NewYork,
        }
    }

    /// Inflow multiplier for this session.
    #[must_use]
    pub const fn multiplier(&self) -> f64 {
        match self {
            SessionWindow::Asia => 0.8,
            SessionWindow::Europe => 1.2,
            SessionWindow::NewYork => 1.5,
        }
    }
}

impl fmt::Display for SessionWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SessionWindow::Asia => "Asia",
            SessionWindow::Europe => "Europe",
            SessionWindow::NewYork => "NY",
        };
        write!(f, "{name}")
    }
}
