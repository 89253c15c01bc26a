//! Sample purchases for `tally demo`.

use tally_core::{Money, PriceQuote, PricingPolicy, Product};

/// A product and how many units are being bought.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub product: Product,
    pub purchase_quantity: i64,
}

/// One purchase per discounted category; the clothing one also crosses the
/// quantity threshold.
pub fn demo_scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            product: Product::new("Smartphone", Money::from_cents(150_000), 2, "eletronicos"),
            purchase_quantity: 2,
        },
        Scenario {
            product: Product::new("Camiseta", Money::from_cents(5000), 15, "roupas"),
            purchase_quantity: 15,
        },
        Scenario {
            product: Product::new("Arroz", Money::from_cents(2000), 5, "alimentos"),
            purchase_quantity: 5,
        },
    ]
}

/// Prices every demo scenario with `policy`.
pub fn demo_quotes(policy: &dyn PricingPolicy) -> Vec<PriceQuote> {
    demo_scenarios()
        .iter()
        .map(|s| policy.quote(&s.product, s.purchase_quantity))
        .collect()
}
