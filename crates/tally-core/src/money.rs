//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Exact Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In f64:                                                               │
//! │    5950.0 * 0.07 = 416.50000000000006  ❌ WRONG!                       │
//! │                                                                         │
//! │  Rounding to cents after every step fixes that, but then chained       │
//! │  discounts drift by a cent depending on the order they're applied.     │
//! │                                                                         │
//! │  OUR SOLUTION: Exact decimal, round only for display                   │
//! │    5950.00 * 0.0700 = 416.500000                                       │
//! │    Presentation calls round_to_cents() / Display                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tally_core::money::Money;
//! use tally_core::types::Rate;
//!
//! let price = Money::from_cents(8000);            // 80.00
//! let line = price.multiply_quantity(15);          // 1200.00
//! let discounted = line.apply_discount(Rate::from_bps(1000));
//! assert_eq!(discounted, Money::from_cents(108_000));
//!
//! // NEVER do this:
//! // let bad = Money::from_float(80.0); // NO SUCH METHOD EXISTS!
//! ```

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;

use crate::error::CoreError;
use crate::types::Rate;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value as an exact decimal.
///
/// ## Design Decisions
/// - **Decimal (signed)**: Negative values flow through unchanged, the
///   pricing operations never reject them
/// - **No implicit rounding**: Multiplying by a rate keeps every digit
/// - **Equality is by value**: `1700.00 == 1700.000000`
///
/// ## Where Money is Used
/// ```text
/// Product.unit_price ──► × purchase quantity ──► subtotal
///                                                  │
///                           category discount ◄────┘
///                                  │
///                           quantity discount (qty > 10)
///                                  │
///                              final price ──► tax (7%) ──► total
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(Decimal);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // 10.99
    /// assert_eq!(price.to_string(), "10.99");
    /// ```
    #[inline]
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, 2))
    }

    /// Wraps an exact decimal amount.
    #[inline]
    pub const fn from_decimal(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Returns the exact decimal amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Multiplies money by a quantity.
    ///
    /// Panics if the product leaves `Decimal`'s range; validated input (see
    /// [`crate::MAX_UNIT_PRICE_CENTS`]) never gets there.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299);
    /// assert_eq!(unit_price.multiply_quantity(3), Money::from_cents(897));
    /// ```
    #[inline]
    pub fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * Decimal::from(qty))
    }

    /// Returns the share of this amount a rate represents.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    /// use tally_core::types::Rate;
    ///
    /// let price = Money::from_cents(10_000);       // 100.00
    /// let tax = price.portion(Rate::from_bps(700)); // 7%
    /// assert_eq!(tax, Money::from_cents(700));
    /// ```
    #[inline]
    pub fn portion(&self, rate: Rate) -> Money {
        Money(self.0 * rate.fraction())
    }

    /// Takes a percentage off and returns what is left.
    ///
    /// Computed as `amount * (1 - rate)`, so the result keeps full precision.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    /// use tally_core::types::Rate;
    ///
    /// let subtotal = Money::from_cents(200_000);                // 2000.00
    /// let discounted = subtotal.apply_discount(Rate::from_bps(1500));
    /// assert_eq!(discounted, Money::from_cents(170_000));     // 1700.00
    /// ```
    #[inline]
    pub fn apply_discount(&self, rate: Rate) -> Money {
        Money(self.0 * rate.complement())
    }

    /// Rounds to two decimal places, midpoint away from zero.
    ///
    /// Only the presentation layer should call this; pricing never rounds.
    ///
    /// ## Example
    /// ```rust
    /// use rust_decimal::Decimal;
    /// use tally_core::money::Money;
    ///
    /// let raw = Money::from_decimal(Decimal::new(93_415, 3)); // 93.415
    /// assert_eq!(raw.round_to_cents(), Money::from_cents(9342));
    /// ```
    pub fn round_to_cents(&self) -> Money {
        Money(
            self.0
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        )
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display rounds to two decimal places.
///
/// No currency symbol: the presentation layer owns that.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rounded = self.round_to_cents().0;
        if rounded.is_zero() {
            // -0.001 rounds to a signed zero; print it as 0.00
            rounded = Decimal::ZERO;
        }
        rounded.rescale(2);
        write!(f, "{}", rounded)
    }
}

/// Parses plain decimal text such as `"2000.00"` or `"-5.5"`.
impl FromStr for Money {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Decimal::from_str(trimmed)
            .map(Money)
            .map_err(|e| CoreError::InvalidAmount {
                input: s.to_string(),
                reason: e.to_string(),
            })
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl Neg for Money {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Money(-self.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
