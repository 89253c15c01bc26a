//! Text and JSON rendering of quotes.
//!
//! This is the only place amounts get rounded (via `Money`'s `Display`).

use std::io::Write;

use tally_core::{PriceQuote, Rate};

use crate::error::CliResult;

/// Printed before every amount.
pub const CURRENCY_SYMBOL: &str = "R$";

/// Writes one quote as an aligned text block.
///
/// ```text
/// Camiseta (roupas, 10% category discount)
///   Product:       Product { name: "Camiseta", unit_price: 50.00, quantity: 15, category: "roupas" }
///   Quantity:      15 (above quantity threshold)
///   Subtotal:      R$ 750.00
///   Discounts:     R$ -108.75
///   Final price:   R$ 641.25
///   Tax (7%):      R$ 44.89
///   Total:         R$ 686.14
/// ```
pub fn write_quote_text<W: Write>(
    out: &mut W,
    quote: &PriceQuote,
    tax_rate: Rate,
    quantity_threshold: i64,
) -> CliResult<()> {
    let product = &quote.product;

    if quote.category_rate.is_zero() {
        writeln!(out, "{} ({}, no category discount)", product.name(), product.category())?;
    } else {
        writeln!(
            out,
            "{} ({}, {} category discount)",
            product.name(),
            product.category(),
            quote.category_rate
        )?;
    }

    writeln!(out, "  {:<14} {}", "Product:", product)?;
    if quote.purchase_quantity > quantity_threshold {
        writeln!(
            out,
            "  {:<14} {} (above quantity threshold)",
            "Quantity:", quote.purchase_quantity
        )?;
    } else {
        writeln!(out, "  {:<14} {}", "Quantity:", quote.purchase_quantity)?;
    }
    writeln!(out, "  {:<14} {} {}", "Subtotal:", CURRENCY_SYMBOL, quote.subtotal)?;
    writeln!(out, "  {:<14} {} {}", "Discounts:", CURRENCY_SYMBOL, -quote.discount_total)?;
    writeln!(out, "  {:<14} {} {}", "Final price:", CURRENCY_SYMBOL, quote.final_price)?;
    writeln!(
        out,
        "  {:<14} {} {}",
        format!("Tax ({}):", tax_rate),
        CURRENCY_SYMBOL,
        quote.tax
    )?;
    writeln!(out, "  {:<14} {} {}", "Total:", CURRENCY_SYMBOL, quote.total)?;

    Ok(())
}

/// Writes quotes as a pretty JSON array. Amounts keep full precision.
pub fn write_quotes_json<W: Write>(out: &mut W, quotes: &[PriceQuote]) -> CliResult<()> {
    serde_json::to_writer_pretty(&mut *out, quotes)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::{Money, PricingPolicy, Product, StandardPricing};

    fn render(quote: &PriceQuote) -> String {
        let mut buf = Vec::new();
        write_quote_text(&mut buf, quote, Rate::from_bps(700), 10).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_text_rounds_for_display() {
        let shirt = Product::new("Camiseta", Money::from_cents(5000), 15, "roupas");
        let text = render(&StandardPricing::default().quote(&shirt, 15));

        assert!(text.starts_with("Camiseta (roupas, 10% category discount)\n"));
        assert!(text.contains("(above quantity threshold)"));
        assert!(text.contains("Subtotal:      R$ 750.00\n"));
        assert!(text.contains("Discounts:     R$ -108.75\n"));
        assert!(text.contains("Final price:   R$ 641.25\n"));
        assert!(text.contains("Tax (7%):      R$ 44.89\n"));
        assert!(text.contains("Total:         R$ 686.14\n"));
    }

    #[test]
    fn test_text_without_category_discount() {
        let book = Product::new("Livro", Money::from_cents(4000), 3, "livros");
        let text = render(&StandardPricing::default().quote(&book, 10));

        assert!(text.starts_with("Livro (livros, no category discount)\n"));
        assert!(!text.contains("above quantity threshold"));
        assert!(text.contains("Final price:   R$ 400.00\n"));
    }

    #[test]
    fn test_text_signs_discounts_once() {
        let coffee = Product::new("Café", Money::from_cents(1500), 1, "alimentos");
        // -30.00 subtotal, -28.50 final: the "discount" adds 1.50 back
        let text = render(&StandardPricing::default().quote(&coffee, -2));
        assert!(text.contains("Discounts:     R$ 1.50\n"));
        assert!(text.contains("Final price:   R$ -28.50\n"));

        let book = Product::new("Livro", Money::from_cents(4000), 3, "livros");
        let text = render(&StandardPricing::default().quote(&book, 1));
        assert!(text.contains("Discounts:     R$ 0.00\n"));
    }

    #[test]
    fn test_json_keeps_precision() {
        let shirt = Product::new("Camiseta", Money::from_cents(5000), 15, "roupas");
        let quote = StandardPricing::default().quote(&shirt, 15);

        let mut buf = Vec::new();
        write_quotes_json(&mut buf, &[quote]).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(value[0]["product"]["name"], "Camiseta");
        let tax: Money = value[0]["tax"].as_str().unwrap().parse().unwrap();
        assert_eq!(tax.to_string(), "44.89");
        assert_ne!(tax, tax.round_to_cents());
    }
}
