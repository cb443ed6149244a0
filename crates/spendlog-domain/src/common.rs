//! Shared traits and formatting helpers for expense primitives.

use rust_decimal::Decimal;

/// Currency symbol used when no configuration overrides it.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// Converts an entity into a user-facing display label.
pub trait Displayable {
    fn display_label(&self) -> String;
}

/// Renders an amount with the given symbol and two decimal places.
pub fn format_money(symbol: &str, amount: Decimal) -> String {
    format!("{}{:.2}", symbol, amount)
}
