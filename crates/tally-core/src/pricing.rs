//! # Pricing Module
//!
//! The pricing policy trait and the standard category/quantity policy.
//!
//! ## Calculation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  calculate_final_price(product, purchase_quantity)                      │
//! │                                                                         │
//! │  subtotal = unit_price × purchase_quantity                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  × (1 - category rate)      eletronicos 15% │ roupas 10% │ alimentos 5% │
//! │       │                                                                 │
//! │       ├── purchase_quantity > 10? ──► × (1 - 5%)                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  final price (unrounded)                                               │
//! │                                                                         │
//! │  calculate_tax(price) = price × 7%      (independent of discounts)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Callers hold a `&dyn PricingPolicy` (or a generic `P: PricingPolicy`), so
//! a different policy can be dropped in without touching them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::money::Money;
use crate::types::{Product, Rate};
use crate::{
    DEFAULT_CATEGORY_RATES, DEFAULT_QUANTITY_DISCOUNT_BPS, DEFAULT_QUANTITY_THRESHOLD,
    DEFAULT_TAX_RATE_BPS,
};

// =============================================================================
// Pricing Policy Trait
// =============================================================================

/// A pricing policy: final price, category discount rate, and tax.
///
/// All operations are pure and total. They do no validation, so a zero or
/// negative quantity or price flows straight through the arithmetic.
pub trait PricingPolicy {
    /// Price for buying `purchase_quantity` units of `product`, after every
    /// discount the policy grants. Not rounded.
    fn calculate_final_price(&self, product: &Product, purchase_quantity: i64) -> Money;

    /// Discount rate granted for the product's category.
    fn apply_category_discount(&self, product: &Product) -> Rate;

    /// Tax owed on `price`.
    fn calculate_tax(&self, price: Money) -> Money;

    /// Full breakdown of a purchase, built from the three operations above.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::{Money, PricingPolicy, Product, StandardPricing};
    ///
    /// let pricing = StandardPricing::default();
    /// let pants = Product::new("Calça", Money::from_cents(8000), 1, "roupas");
    ///
    /// let quote = pricing.quote(&pants, 15);
    /// assert_eq!(quote.subtotal, Money::from_cents(120_000));
    /// assert_eq!(quote.final_price, Money::from_cents(102_600));
    /// assert_eq!(quote.total, quote.final_price + quote.tax);
    /// ```
    fn quote(&self, product: &Product, purchase_quantity: i64) -> PriceQuote {
        let subtotal = product.unit_price().multiply_quantity(purchase_quantity);
        let final_price = self.calculate_final_price(product, purchase_quantity);
        let tax = self.calculate_tax(final_price);

        PriceQuote {
            product: product.clone(),
            purchase_quantity,
            subtotal,
            category_rate: self.apply_category_discount(product),
            discount_total: subtotal - final_price,
            final_price,
            tax,
            total: final_price + tax,
        }
    }
}

// =============================================================================
// Price Quote
// =============================================================================

/// Breakdown of one priced purchase.
///
/// Amounts are unrounded; round at display time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// Product as it was when priced.
    pub product: Product,
    pub purchase_quantity: i64,
    /// `unit_price × purchase_quantity`, before any discount.
    pub subtotal: Money,
    pub category_rate: Rate,
    /// Everything taken off the subtotal (category + quantity).
    pub discount_total: Money,
    pub final_price: Money,
    pub tax: Money,
    /// `final_price + tax`.
    pub total: Money,
}

// =============================================================================
// Pricing Rules
// =============================================================================

/// Constant configuration for [`StandardPricing`].
///
/// ## TOML Shape
/// ```toml
/// tax_rate_bps = 700
/// quantity_threshold = 10
/// quantity_discount_bps = 500
///
/// [categories]
/// eletronicos = 1500
/// roupas = 1000
/// alimentos = 500
/// ```
///
/// Category keys are matched in lowercase. Rules built through
/// [`PricingRules::with_category_rate`] or [`StandardPricing::new`] are
/// normalized; rules deserialized by hand should go through
/// [`PricingRules::normalized`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingRules {
    /// Flat tax rate.
    #[serde(rename = "tax_rate_bps", default = "default_tax_rate")]
    pub tax_rate: Rate,

    /// Purchase quantity must be strictly greater than this for the
    /// quantity discount.
    #[serde(default = "default_quantity_threshold")]
    pub quantity_threshold: i64,

    /// Extra discount once the threshold is crossed.
    #[serde(rename = "quantity_discount_bps", default = "default_quantity_discount")]
    pub quantity_discount: Rate,

    /// Category -> discount rate. Unlisted categories get no discount.
    #[serde(default = "default_categories")]
    pub categories: BTreeMap<String, Rate>,
}

fn default_categories() -> BTreeMap<String, Rate> {
    DEFAULT_CATEGORY_RATES
        .iter()
        .map(|(name, bps)| (name.to_string(), Rate::from_bps(*bps)))
        .collect()
}

fn default_tax_rate() -> Rate {
    Rate::from_bps(DEFAULT_TAX_RATE_BPS)
}

fn default_quantity_threshold() -> i64 {
    DEFAULT_QUANTITY_THRESHOLD
}

fn default_quantity_discount() -> Rate {
    Rate::from_bps(DEFAULT_QUANTITY_DISCOUNT_BPS)
}

impl Default for PricingRules {
    fn default() -> Self {
        PricingRules {
            categories: default_categories(),
            tax_rate: default_tax_rate(),
            quantity_threshold: default_quantity_threshold(),
            quantity_discount: default_quantity_discount(),
        }
    }
}

impl PricingRules {
    /// Adds or replaces a category rate. The key is stored in lowercase.
    pub fn with_category_rate(mut self, category: &str, rate: Rate) -> Self {
        self.categories.insert(category.to_lowercase(), rate);
        self
    }

    /// Returns a copy whose category keys are all lowercase.
    ///
    /// If two keys fold to the same lowercase form, the one that sorts last
    /// in the input map wins.
    pub fn normalized(self) -> Self {
        let PricingRules {
            categories,
            tax_rate,
            quantity_threshold,
            quantity_discount,
        } = self;

        PricingRules {
            categories: categories
                .into_iter()
                .map(|(name, rate)| (name.to_lowercase(), rate))
                .collect(),
            tax_rate,
            quantity_threshold,
            quantity_discount,
        }
    }

    /// Rate for a category, case-insensitive, zero when unlisted.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::pricing::PricingRules;
    /// use tally_core::types::Rate;
    ///
    /// let rules = PricingRules::default();
    /// assert_eq!(rules.rate_for_category("Roupas"), Rate::from_bps(1000));
    /// assert_eq!(rules.rate_for_category("livros"), Rate::zero());
    /// ```
    pub fn rate_for_category(&self, category: &str) -> Rate {
        self.categories
            .get(&category.to_lowercase())
            .copied()
            .unwrap_or_default()
    }

    /// True when `purchase_quantity` earns the quantity discount.
    #[inline]
    pub fn qualifies_for_quantity_discount(&self, purchase_quantity: i64) -> bool {
        purchase_quantity > self.quantity_threshold
    }
}

// =============================================================================
// Standard Pricing
// =============================================================================

/// The standard policy: category discount, then quantity discount above the
/// threshold, plus flat tax.
///
/// Holds only immutable rules, so one instance can be shared freely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StandardPricing {
    rules: PricingRules,
}

impl StandardPricing {
    /// Creates a policy from custom rules (category keys are normalized).
    pub fn new(rules: PricingRules) -> Self {
        StandardPricing {
            rules: rules.normalized(),
        }
    }

    /// The rules this policy applies.
    pub fn rules(&self) -> &PricingRules {
        &self.rules
    }
}

impl PricingPolicy for StandardPricing {
    fn calculate_final_price(&self, product: &Product, purchase_quantity: i64) -> Money {
        let subtotal = product.unit_price().multiply_quantity(purchase_quantity);
        let after_category = subtotal.apply_discount(self.apply_category_discount(product));

        if self.rules.qualifies_for_quantity_discount(purchase_quantity) {
            after_category.apply_discount(self.rules.quantity_discount)
        } else {
            after_category
        }
    }

    fn apply_category_discount(&self, product: &Product) -> Rate {
        self.rules.rate_for_category(product.category())
    }

    fn calculate_tax(&self, price: Money) -> Money {
        price.portion(self.rules.tax_rate)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(price_cents: i64, category: &str) -> Product {
        Product::new("test", Money::from_cents(price_cents), 1, category)
    }

    #[test]
    fn test_category_rates() {
        let pricing = StandardPricing::default();
        assert_eq!(
            pricing.apply_category_discount(&product(100, "eletronicos")),
            Rate::from_bps(1500)
        );
        assert_eq!(
            pricing.apply_category_discount(&product(100, "roupas")),
            Rate::from_bps(1000)
        );
        assert_eq!(
            pricing.apply_category_discount(&product(100, "alimentos")),
            Rate::from_bps(500)
        );
    }

    #[test]
    fn test_unknown_category_gets_no_discount() {
        let pricing = StandardPricing::default();
        assert_eq!(pricing.apply_category_discount(&product(100, "livros")), Rate::zero());
        assert_eq!(pricing.apply_category_discount(&product(100, "")), Rate::zero());
        assert_eq!(
            pricing.apply_category_discount(&product(100, " eletronicos")),
            Rate::zero()
        );
    }

    #[test]
    fn test_category_lookup_is_case_insensitive() {
        let pricing = StandardPricing::default();
        assert_eq!(
            pricing.apply_category_discount(&product(100, "ELETRONICOS")),
            Rate::from_bps(1500)
        );
        assert_eq!(
            pricing.apply_category_discount(&product(100, "Alimentos")),
            Rate::from_bps(500)
        );
    }

    #[test]
    fn test_tax() {
        let pricing = StandardPricing::default();
        assert_eq!(pricing.calculate_tax(Money::from_cents(10_000)), Money::from_cents(700));
        assert_eq!(pricing.calculate_tax(Money::zero()), Money::zero());
        assert_eq!(pricing.calculate_tax(Money::from_cents(-10_000)), Money::from_cents(-700));
    }

    #[test]
    fn test_final_price_category_only() {
        let pricing = StandardPricing::default();
        let tv = product(200_000, "eletronicos");
        assert_eq!(pricing.calculate_final_price(&tv, 1), Money::from_cents(170_000));
    }

    #[test]
    fn test_final_price_category_and_quantity() {
        let pricing = StandardPricing::default();
        let pants = product(8000, "roupas");
        // 1200 → ×0.90 = 1080 → ×0.95 = 1026
        assert_eq!(pricing.calculate_final_price(&pants, 15), Money::from_cents(102_600));
    }

    #[test]
    fn test_quantity_threshold_is_strict() {
        let pricing = StandardPricing::default();
        let book = product(1000, "livros");
        assert_eq!(pricing.calculate_final_price(&book, 10), Money::from_cents(10_000));
        // 11 × 10.00 = 110.00 → ×0.95 = 104.50
        assert_eq!(pricing.calculate_final_price(&book, 11), Money::from_cents(10_450));
    }

    #[test]
    fn test_zero_and_negative_quantity_propagate() {
        let pricing = StandardPricing::default();
        let coffee = product(1500, "alimentos");
        assert_eq!(pricing.calculate_final_price(&coffee, 0), Money::zero());
        // -2 × 15.00 = -30.00 → ×0.95 (alimentos) = -28.50
        assert_eq!(pricing.calculate_final_price(&coffee, -2), Money::from_cents(-2850));
    }

    #[test]
    fn test_stock_quantity_does_not_affect_price() {
        let pricing = StandardPricing::default();
        let mut tv = product(200_000, "eletronicos");
        let before = pricing.calculate_final_price(&tv, 1);
        tv.set_quantity(500);
        assert_eq!(pricing.calculate_final_price(&tv, 1), before);
    }

    #[test]
    fn test_operations_are_idempotent() {
        let pricing = StandardPricing::default();
        let pants = product(8000, "roupas");
        assert_eq!(
            pricing.calculate_final_price(&pants, 15),
            pricing.calculate_final_price(&pants, 15)
        );
        assert_eq!(
            pricing.apply_category_discount(&pants),
            pricing.apply_category_discount(&pants)
        );
        assert_eq!(
            pricing.calculate_tax(Money::from_cents(999)),
            pricing.calculate_tax(Money::from_cents(999))
        );
    }

    #[test]
    fn test_quote_breakdown() {
        let pricing = StandardPricing::default();
        let quote = pricing.quote(&product(8000, "roupas"), 15);

        assert_eq!(quote.purchase_quantity, 15);
        assert_eq!(quote.subtotal, Money::from_cents(120_000));
        assert_eq!(quote.category_rate, Rate::from_bps(1000));
        assert_eq!(quote.final_price, Money::from_cents(102_600));
        assert_eq!(quote.discount_total, Money::from_cents(17_400));
        assert_eq!(quote.tax, Money::from_cents(7182));
        assert_eq!(quote.total, Money::from_cents(109_782));
    }

    #[test]
    fn test_custom_rules_are_normalized() {
        let mut categories = BTreeMap::new();
        categories.insert("LIVROS".to_string(), Rate::from_bps(2000));
        let rules = PricingRules {
            categories,
            ..PricingRules::default()
        };

        let pricing = StandardPricing::new(rules);
        assert!(pricing.rules().categories.contains_key("livros"));
        assert_eq!(
            pricing.apply_category_discount(&product(100, "Livros")),
            Rate::from_bps(2000)
        );
    }

    #[test]
    fn test_with_category_rate_overrides() {
        let rules = PricingRules::default().with_category_rate("Roupas", Rate::from_bps(2500));
        assert_eq!(rules.rate_for_category("roupas"), Rate::from_bps(2500));
        assert_eq!(rules.categories.len(), 3);
    }

    #[test]
    fn test_rules_defaults() {
        let rules = PricingRules::default();
        assert_eq!(rules.tax_rate, Rate::from_bps(700));
        assert_eq!(rules.quantity_threshold, 10);
        assert_eq!(rules.quantity_discount, Rate::from_bps(500));
        assert!(!rules.qualifies_for_quantity_discount(10));
        assert!(rules.qualifies_for_quantity_discount(11));
    }
}
