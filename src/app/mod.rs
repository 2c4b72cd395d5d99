//! Application layer - orchestration, configuration, and shared state.

mod config;
mod orchestrator;
mod render;
mod state;

pub use config::{Config, LoggingConfig, RefreshConfig, SourcesConfig};
pub use orchestrator::Orchestrator;
pub use state::AppState;
