//! # Domain Types
//!
//! Core domain types used throughout Tally.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │    Product      │   │      Rate       │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  name           │   │  bps (u32)      │                             │
//! │  │  unit_price     │   │  1500 = 15%     │                             │
//! │  │  quantity       │   │   700 =  7%     │                             │
//! │  │  category       │   └─────────────────┘                             │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  Product knows its own data. Pricing rules live in `pricing`.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

// =============================================================================
// Rate
// =============================================================================

/// A percentage represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1500 bps = 15% (category discount), 700 bps = 7% (tax)
///
/// The same type is used for discounts and tax, since both are just a
/// fraction of an amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Rate(u32);

impl Rate {
    /// Creates a rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        Rate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the exact fraction this rate represents (1500 bps -> 0.15).
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use tally_core::types::Rate;
    ///
    /// assert_eq!(Rate::from_bps(1500).fraction(), Decimal::new(15, 2));
    /// ```
    #[inline]
    pub fn fraction(&self) -> Decimal {
        Decimal::new(self.0 as i64, 4)
    }

    /// Returns `1 - fraction`, the multiplier that leaves an amount after
    /// this rate is taken off.
    #[inline]
    pub fn complement(&self) -> Decimal {
        Decimal::ONE - self.fraction()
    }

    /// Zero rate.
    #[inline]
    pub const fn zero() -> Self {
        Rate(0)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for Rate {
    fn default() -> Self {
        Rate::zero()
    }
}

/// Renders `1500` as `15%` and `825` as `8.25%`.
impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / 100;
        let part = self.0 % 100;
        if part == 0 {
            write!(f, "{}%", whole)
        } else if part % 10 == 0 {
            write!(f, "{}.{}%", whole, part / 10)
        } else {
            write!(f, "{}.{:02}%", whole, part)
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product that can be priced.
///
/// Product owns its data and nothing else: it exposes accessors and
/// mutators, and leaves every price calculation to a
/// [`PricingPolicy`](crate::pricing::PricingPolicy).
///
/// ## Field Notes
/// - `quantity` is stock on hand. It is informational only and never
///   affects a price; the purchase quantity is passed to the policy.
/// - Mutators overwrite without validation. Use [`crate::validation`] at
///   the edges when the input is untrusted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    name: String,
    unit_price: Money,
    quantity: i64,
    category: String,
}

impl Product {
    /// Creates a product with all four fields.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::{Money, Product};
    ///
    /// let tv = Product::new("TV 55\"", Money::from_cents(200_000), 1, "eletronicos");
    /// assert_eq!(tv.name(), "TV 55\"");
    /// assert_eq!(tv.category(), "eletronicos");
    /// ```
    pub fn new(
        name: impl Into<String>,
        unit_price: Money,
        quantity: i64,
        category: impl Into<String>,
    ) -> Self {
        Product {
            name: name.into(),
            unit_price,
            quantity,
            category: category.into(),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Stock on hand.
    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Category exactly as it was supplied (case preserved).
    #[inline]
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_unit_price(&mut self, unit_price: Money) {
        self.unit_price = unit_price;
    }

    pub fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }
}

/// Diagnostic summary of all four fields.
impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Product {{ name: {:?}, unit_price: {}, quantity: {}, category: {:?} }}",
            self.name, self.unit_price, self.quantity, self.category
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_from_bps() {
        let rate = Rate::from_bps(825);
        assert_eq!(rate.bps(), 825);
        assert_eq!(rate.fraction(), Decimal::new(825, 4));
    }

    #[test]
    fn test_rate_complement() {
        assert_eq!(Rate::from_bps(1500).complement(), Decimal::new(85, 2));
        assert_eq!(Rate::zero().complement(), Decimal::ONE);
    }

    #[test]
    fn test_rate_display() {
        assert_eq!(Rate::from_bps(1500).to_string(), "15%");
        assert_eq!(Rate::from_bps(700).to_string(), "7%");
        assert_eq!(Rate::from_bps(825).to_string(), "8.25%");
        assert_eq!(Rate::from_bps(1250).to_string(), "12.5%");
        assert_eq!(Rate::zero().to_string(), "0%");
    }

    #[test]
    fn test_product_accessors() {
        let product = Product::new("TV 55\"", Money::from_cents(200_000), 1, "eletronicos");
        assert_eq!(product.name(), "TV 55\"");
        assert_eq!(product.unit_price(), Money::from_cents(200_000));
        assert_eq!(product.quantity(), 1);
        assert_eq!(product.category(), "eletronicos");
    }

    #[test]
    fn test_product_mutators_overwrite_without_validation() {
        let mut product = Product::new("Calça", Money::from_cents(8000), 1, "roupas");

        product.set_name("");
        product.set_unit_price(Money::from_cents(-100));
        product.set_quantity(-3);
        product.set_category("LIVROS");

        assert_eq!(product.name(), "");
        assert_eq!(product.unit_price(), Money::from_cents(-100));
        assert_eq!(product.quantity(), -3);
        assert_eq!(product.category(), "LIVROS");
    }

    #[test]
    fn test_product_display() {
        let product = Product::new("Café", Money::from_cents(1500), 1, "alimentos");
        assert_eq!(
            product.to_string(),
            "Product { name: \"Café\", unit_price: 15.00, quantity: 1, category: \"alimentos\" }"
        );
    }
}
