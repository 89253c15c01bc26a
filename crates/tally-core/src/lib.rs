//! # tally-core: Pure Pricing Logic for Tally
//!
//! This crate holds the pricing rules as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Tally Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    tally-cli (apps/tally-cli)                    │   │
//! │  │    args ──► config ──► validation ──► policy ──► report         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ &dyn PricingPolicy                     │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tally-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  pricing  │  │ validation│  │   │
//! │  │   │  Product  │  │   Money   │  │  Policy   │  │   rules   │  │   │
//! │  │   │   Rate    │  │           │  │  Quote    │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Rate)
//! - [`money`] - Exact decimal Money type (no floating point!)
//! - [`pricing`] - `PricingPolicy` trait, `StandardPricing`, `PriceQuote`
//! - [`error`] - Domain error types
//! - [`validation`] - Opt-in input checks
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Same input = same output
//! 2. **No I/O**: Config files and logging live in the app crate
//! 3. **Exact Money**: No rounding until display
//! 4. **Substitutable Policies**: Callers depend on the trait, not the struct
//!
//! ## Example Usage
//!
//! ```rust
//! use tally_core::{Money, PricingPolicy, Product, StandardPricing};
//!
//! let pricing = StandardPricing::default();
//! let notebook = Product::new("Notebook Dell", Money::from_cents(350_000), 1, "eletronicos");
//!
//! // 3500 × 2 = 7000 → 15% off = 5950
//! let price = pricing.calculate_final_price(&notebook, 2);
//! assert_eq!(price, Money::from_cents(595_000));
//!
//! // 7% tax on top
//! let tax = pricing.calculate_tax(price);
//! assert_eq!(tax.to_string(), "416.50");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use tally_core::Money` instead of
// `use tally_core::money::Money`

pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use pricing::{PriceQuote, PricingPolicy, PricingRules, StandardPricing};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Category discounts in basis points, keyed by lowercase category.
pub const DEFAULT_CATEGORY_RATES: &[(&str, u32)] = &[
    ("eletronicos", 1500),
    ("roupas", 1000),
    ("alimentos", 500),
];

/// Flat tax rate in basis points (7%).
pub const DEFAULT_TAX_RATE_BPS: u32 = 700;

/// Purchase quantity must exceed this for the quantity discount.
pub const DEFAULT_QUANTITY_THRESHOLD: i64 = 10;

/// Quantity discount in basis points (5%).
pub const DEFAULT_QUANTITY_DISCOUNT_BPS: u32 = 500;

/// Largest purchase quantity the validation layer accepts.
///
/// ## Business Reason
/// Catches typos such as 1000 instead of 10. The pricing policy itself has
/// no upper bound.
pub const MAX_PURCHASE_QUANTITY: i64 = 999;

/// Largest unit price the validation layer accepts, in cents (1 billion).
///
/// Keeps `unit price × MAX_PURCHASE_QUANTITY` and every rate applied to it
/// well inside `Decimal`'s range, so validated input can never overflow.
pub const MAX_UNIT_PRICE_CENTS: i64 = 100_000_000_000;
