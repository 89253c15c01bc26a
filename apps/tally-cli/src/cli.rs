//! Command line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tally_core::{Money, Product};

/// Tally: category and quantity pricing calculator.
#[derive(Parser, Debug)]
#[command(
    name = "tally",
    version,
    about = "Prices products with category discounts, quantity discounts and flat tax",
    long_about = "Prices products with category discounts, quantity discounts and a flat tax.\n\n\
                  Default config: tally.toml in the platform config directory \
                  (e.g. ~/.config/tally/tally.toml)"
)]
pub struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "TALLY_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Print quotes as JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Price the three sample products (electronics, clothing, food).
    Demo,

    /// Price a single product.
    Quote(QuoteArgs),

    /// Print the active pricing rules as TOML.
    Rules,
}

#[derive(Args, Debug, Clone)]
pub struct QuoteArgs {
    /// Product name.
    #[arg(long)]
    pub name: String,

    /// Unit price, e.g. 2000.00
    #[arg(long, allow_negative_numbers = true)]
    pub price: Money,

    /// Category (eletronicos, roupas, alimentos, anything else gets no discount).
    #[arg(long)]
    pub category: String,

    /// Units being bought.
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    pub quantity: i64,

    /// Units in stock. Shown in the summary, never affects the price.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub stock: i64,

    /// Skip input validation (zero and negative values are priced as given).
    /// Amounts that would overflow are still rejected.
    #[arg(long)]
    pub unchecked: bool,
}

impl QuoteArgs {
    /// Builds the product described by the arguments.
    pub fn to_product(&self) -> Product {
        Product::new(self.name.clone(), self.price, self.stock, self.category.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_quote() {
        let cli = Cli::try_parse_from([
            "tally", "--json", "quote", "--name", "Calça", "--price", "80.00", "--category",
            "roupas", "--quantity", "15",
        ])
        .unwrap();

        assert!(cli.json);
        let Command::Quote(args) = cli.command else {
            panic!("expected quote command");
        };
        assert_eq!(args.price, Money::from_cents(8000));
        assert_eq!(args.quantity, 15);
        assert_eq!(args.stock, 0);
        assert!(!args.unchecked);

        let product = args.to_product();
        assert_eq!(product.name(), "Calça");
        assert_eq!(product.category(), "roupas");
    }

    #[test]
    fn test_parse_negative_quantity() {
        let cli = Cli::try_parse_from([
            "tally", "quote", "--name", "x", "--price", "1", "--category", "y", "--quantity",
            "-2", "--unchecked",
        ])
        .unwrap();

        let Command::Quote(args) = cli.command else {
            panic!("expected quote command");
        };
        assert_eq!(args.quantity, -2);
        assert!(args.unchecked);
    }

    #[test]
    fn test_bad_price_is_rejected() {
        let result = Cli::try_parse_from([
            "tally", "quote", "--name", "x", "--price", "abc", "--category", "y",
        ]);
        assert!(result.is_err());
    }
}
