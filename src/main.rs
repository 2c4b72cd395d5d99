use std::path::PathBuf;

use clap::Parser;
use fiatflow::app::{Config, Orchestrator};
use fiatflow::domain::Symbol;
use tokio::signal;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "fiatflow", version, about = "Crypto fiat-inflow signal tracker")]
struct Cli {
    /// Path to the configuration file.
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Run a single refresh cycle and exit.
    #[arg(long)]
    once: bool,

    /// Comma-separated symbol override, skipping universe resolution.
    #[arg(long, value_delimiter = ',')]
    symbols: Vec<String>,
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let config = if cli.config.exists() {
        match Config::load(&cli.config) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Failed to load config: {e}");
                std::process::exit(1);
            }
        }
    } else {
        Config::default()
    };

    config.init_logging();
    info!("fiatflow starting");

    let symbol_override = (!cli.symbols.is_empty())
        .then(|| cli.symbols.iter().map(Symbol::new).collect::<Vec<_>>());

    tokio::select! {
        result = Orchestrator::run(config, cli.once, symbol_override) => {
            if let Err(e) = result {
                error!(error = %e, "Fatal error");
                std::process::exit(1);
            }
        }
        _ = signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    info!("fiatflow stopped");
}
