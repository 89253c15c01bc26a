//! # Tally CLI
//!
//! ```sh
//! # Price the three sample products
//! tally demo
//!
//! # Price one product
//! tally quote --name "Notebook Dell" --price 3500.00 --category eletronicos --quantity 2
//!
//! # Same, as JSON, with a custom config
//! tally --config ./tally.toml --json quote --name Calça --price 80 --category roupas -q 15
//!
//! # Show the active rules
//! tally rules
//! ```

use clap::Parser;
use tracing::{error, info};

use tally_cli::cli::Cli;
use tally_cli::config::TallyConfig;
use tally_cli::logging::init_tracing;
use tally_cli::run;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // The log level lives in the config, so loading happens before any
    // subscriber exists and is reported once one does.
    let source = TallyConfig::source_path(cli.config.clone())?;
    let config = TallyConfig::load_from(source.as_deref())?;
    init_tracing(&config.logging, cli.log_level.as_deref());

    match &source {
        Some(path) => info!(?path, "Loaded config file"),
        None => info!("No config file, using defaults"),
    }
    info!(
        tax_rate = %config.pricing.tax_rate,
        categories = config.pricing.categories.len(),
        quantity_threshold = config.pricing.quantity_threshold,
        "Configuration loaded"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = run(&cli, &config, &mut out) {
        error!(error = %e, "Command failed");
        return Err(e.into());
    }

    Ok(())
}
