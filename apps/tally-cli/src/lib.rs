//! # tally-cli
//!
//! Console driver for tally-core: parses arguments, loads configuration,
//! validates input, prices through a `PricingPolicy`, and prints the result.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  main                                                                   │
//! │   ├── Cli::parse()                                                      │
//! │   ├── TallyConfig::load()        defaults → tally.toml → TALLY_* env   │
//! │   ├── init_tracing()             stderr, pretty or json                │
//! │   └── run(&cli, &config, stdout)                                       │
//! │         ├── demo   → demo_quotes(&policy)  → report                    │
//! │         ├── quote  → validate → policy.quote() → report                │
//! │         └── rules  → TOML                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod report;
pub mod scenarios;

use std::io::Write;

use tally_core::validation::{
    validate_pricing_bounds, validate_product, validate_purchase_quantity,
};
use tally_core::{PriceQuote, PricingPolicy, StandardPricing};
use tracing::{debug, info, warn};

use crate::cli::{Cli, Command, QuoteArgs};
use crate::config::TallyConfig;
use crate::error::CliResult;

/// Executes the parsed command, writing results to `out`.
pub fn run<W: Write>(cli: &Cli, config: &TallyConfig, out: &mut W) -> CliResult<()> {
    let pricing = StandardPricing::new(config.pricing.clone());

    match &cli.command {
        Command::Demo => {
            let quotes = scenarios::demo_quotes(&pricing);
            info!(count = quotes.len(), "Priced demo scenarios");
            print_quotes(out, &quotes, cli.json, &pricing)
        }
        Command::Quote(args) => {
            let quote = quote_one(&pricing, args)?;
            print_quotes(out, std::slice::from_ref(&quote), cli.json, &pricing)
        }
        Command::Rules => {
            let rendered = toml::to_string_pretty(pricing.rules())
                .map_err(crate::error::ConfigError::from)?;
            write!(out, "{}", rendered)?;
            Ok(())
        }
    }
}

/// Validates the arguments and prices them.
///
/// `--unchecked` skips the business checks but still bounds magnitudes, so
/// raw input can be zero or negative but never overflow.
fn quote_one(policy: &dyn PricingPolicy, args: &QuoteArgs) -> CliResult<PriceQuote> {
    let product = args.to_product();

    if args.unchecked {
        warn!(
            quantity = args.quantity,
            price = %args.price,
            "Validation skipped, pricing raw input"
        );
        validate_pricing_bounds(product.unit_price(), args.quantity)?;
    } else {
        validate_product(&product)?;
        validate_purchase_quantity(args.quantity)?;
    }

    debug!(
        product = product.name(),
        category = product.category(),
        quantity = args.quantity,
        "Pricing product"
    );
    Ok(policy.quote(&product, args.quantity))
}

fn print_quotes<W: Write>(
    out: &mut W,
    quotes: &[PriceQuote],
    json: bool,
    pricing: &StandardPricing,
) -> CliResult<()> {
    if json {
        return report::write_quotes_json(out, quotes);
    }

    let rules = pricing.rules();
    for (i, quote) in quotes.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        report::write_quote_text(out, quote, rules.tax_rate, rules.quantity_threshold)?;
    }
    Ok(())
}
