//! # Validation Module
//!
//! Opt-in input validation for Tally.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: CLI arguments (clap)                                         │
//! │  └── Type checks (is it a number?)                                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  └── Business checks (non-negative price, positive quantity, ...)      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: PricingPolicy                                                │
//! │  └── No checks at all. Whatever reaches it is priced as-is.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tally_core::validation::{validate_product, validate_purchase_quantity};
//! use tally_core::{Money, Product};
//!
//! let tv = Product::new("TV", Money::from_cents(200_000), 1, "eletronicos");
//! assert!(validate_product(&tv).is_ok());
//! assert!(validate_purchase_quantity(0).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::Product;
use crate::{MAX_PURCHASE_QUANTITY, MAX_UNIT_PRICE_CENTS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest product name accepted.
const MAX_NAME_LEN: usize = 200;

/// Rates above 100% would turn a discount into a surcharge.
const MAX_RATE_BPS: u32 = 10_000;

// =============================================================================
// Product Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - At most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a unit price. Zero is allowed (free items), anything above
/// [`MAX_UNIT_PRICE_CENTS`] is not.
///
/// ## Example
/// ```rust
/// use tally_core::money::Money;
/// use tally_core::validation::validate_unit_price;
///
/// assert!(validate_unit_price(Money::from_cents(1099)).is_ok());
/// assert!(validate_unit_price(Money::zero()).is_ok());
/// assert!(validate_unit_price(Money::from_cents(-100)).is_err());
/// assert!(validate_unit_price("2000000000".parse().unwrap()).is_err());
/// ```
pub fn validate_unit_price(price: Money) -> ValidationResult<()> {
    non_negative_money("unit_price", price)?;
    within_price_limit("unit_price", price)
}

/// Validates stock on hand. Zero is allowed.
pub fn validate_stock_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity < 0 {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a category. Unknown categories are fine (they get no
/// discount), empty ones are not.
pub fn validate_category(category: &str) -> ValidationResult<()> {
    if category.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "category".to_string(),
        });
    }

    if category.trim() != category {
        return Err(ValidationError::InvalidFormat {
            field: "category".to_string(),
            reason: "must not start or end with whitespace".to_string(),
        });
    }

    Ok(())
}

/// Runs every product check, stopping at the first failure.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_product_name(product.name())?;
    validate_unit_price(product.unit_price())?;
    validate_stock_quantity(product.quantity())?;
    validate_category(product.category())?;
    Ok(())
}

// =============================================================================
// Pricing Input Validators
// =============================================================================

/// Validates a purchase quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_PURCHASE_QUANTITY (999)
///
/// ```text
/// validate_purchase_quantity(q)
///      │
///      ├── q <= 0?   → "quantity must be positive"
///      ├── q > 999?  → "quantity must be between 1 and 999"
///      └── OK        → calculate_final_price(product, q)
/// ```
pub fn validate_purchase_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "purchase_quantity".to_string(),
        });
    }

    if qty > MAX_PURCHASE_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "purchase_quantity".to_string(),
            min: 1,
            max: MAX_PURCHASE_QUANTITY,
        });
    }

    Ok(())
}

/// Bounds the magnitude of raw pricing input without judging its sign.
///
/// Zero and negative values pass, so the policy's no-validation behavior
/// stays observable, but nothing large enough to overflow the arithmetic
/// gets through.
///
/// ## Rules
/// - `|unit_price|` at most [`MAX_UNIT_PRICE_CENTS`]
/// - `|purchase_quantity|` at most [`MAX_PURCHASE_QUANTITY`]
pub fn validate_pricing_bounds(unit_price: Money, purchase_quantity: i64) -> ValidationResult<()> {
    within_price_limit("unit_price", -unit_price)?;
    within_price_limit("unit_price", unit_price)?;

    if purchase_quantity.unsigned_abs() > MAX_PURCHASE_QUANTITY.unsigned_abs() {
        return Err(ValidationError::OutOfRange {
            field: "purchase_quantity".to_string(),
            min: -MAX_PURCHASE_QUANTITY,
            max: MAX_PURCHASE_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a price handed to `calculate_tax`.
pub fn validate_price(price: Money) -> ValidationResult<()> {
    non_negative_money("price", price)
}

/// Validates a rate in basis points (0% to 100%).
pub fn validate_rate_bps(field: &str, bps: u32) -> ValidationResult<()> {
    if bps > MAX_RATE_BPS {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: MAX_RATE_BPS as i64,
        });
    }

    Ok(())
}

fn within_price_limit(field: &str, amount: Money) -> ValidationResult<()> {
    let max_cents = MAX_UNIT_PRICE_CENTS;
    if amount > Money::from_cents(max_cents) {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: max_cents / 100,
        });
    }

    Ok(())
}

fn non_negative_money(field: &str, amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must not be negative".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
