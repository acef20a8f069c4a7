// Price parsing and order-summary arithmetic
//
// Amounts are rendered as text such as "Item total: $39.98" or "$9.99".
// Parsing is lenient: text without a currency-prefixed decimal reads as 0.0.

use std::sync::LazyLock;

use regex::Regex;

/// Sales tax applied by the storefront on the checkout overview.
pub const TAX_RATE: f64 = 0.08;

/// Tolerance used when comparing two-decimal amounts.
pub const CENT_TOLERANCE: f64 = 0.01;

static CURRENCY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$(\d+\.\d{2})").expect("currency pattern is valid"));

/// Extracts the first `$<digits>.<2 digits>` amount from `text`.
///
/// Returns `0.0` when the text carries no such amount.
pub fn parse_currency(text: &str) -> f64 {
    let amount = CURRENCY
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok());

    match amount {
        Some(value) => value,
        None => {
            tracing::warn!("No currency amount in '{}', reading as 0.0", text);
            0.0
        }
    }
}

/// Rounds to two decimals.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Tax the storefront charges on `subtotal`.
pub fn expected_tax(subtotal: f64) -> f64 {
    round_cents(subtotal * TAX_RATE)
}

/// Whether two amounts agree to the cent.
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < CENT_TOLERANCE
}

/// Amounts shown on the checkout overview.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderSummary {
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
}

impl OrderSummary {
    /// `subtotal + tax == total` within a cent.
    pub fn is_consistent(&self) -> bool {
        approx_eq(self.subtotal + self.tax, self.total)
    }

    /// Whether the tax line matches the storefront's rate.
    pub fn has_expected_tax(&self) -> bool {
        approx_eq(self.tax, expected_tax(self.subtotal))
    }
}
