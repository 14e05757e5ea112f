//! Money type and currency formatting.
//!
//! Catalog prices are whole currency units with no minor part, so amounts
//! are plain integers and formatting never prints fractional digits.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    INR,
    USD,
    EUR,
    GBP,
    JPY,
}

/// Digit grouping convention used by a currency's locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    /// Groups of three: 1,234,567.
    Thousands,
    /// Last three digits, then groups of two: 12,34,567.
    Indian,
}

impl Currency {
    /// Get the currency code (e.g., "INR").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::INR => "INR",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
        }
    }

    /// Get the currency symbol (e.g., "₹").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::INR => "\u{20b9}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::JPY => "\u{00a5}",
        }
    }

    /// Get the digit grouping of the currency's home locale.
    pub fn grouping(&self) -> Grouping {
        match self {
            Currency::INR => Grouping::Indian,
            _ => Grouping::Thousands,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in whole units.
    pub amount: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value.
    pub fn new(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Create a Money value in Indian Rupees.
    pub fn inr(amount: i64) -> Self {
        Self::new(amount, Currency::INR)
    }

    /// Format as a display string (e.g., "₹79,999").
    pub fn display(&self) -> String {
        let grouped = group_digits(&self.amount.unsigned_abs().to_string(), self.currency.grouping());
        let sign = if self.amount < 0 { "-" } else { "" };
        format!("{}{}{}", sign, self.currency.symbol(), grouped)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Format a whole-unit price in the given currency with zero fraction digits.
pub fn format_price(amount: i64, currency: Currency) -> String {
    Money::new(amount, currency).display()
}

/// Insert group separators into a run of ASCII digits.
fn group_digits(digits: &str, grouping: Grouping) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let head_group = match grouping {
        Grouping::Thousands => 3,
        Grouping::Indian => 2,
    };

    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(head_group);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    groups.push(tail);
    groups.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inr_formatting() {
        assert_eq!(format_price(79999, Currency::INR), "\u{20b9}79,999");
        assert_eq!(format_price(999, Currency::INR), "\u{20b9}999");
        assert_eq!(format_price(0, Currency::INR), "\u{20b9}0");
    }

    #[test]
    fn test_inr_uses_lakh_grouping() {
        assert_eq!(format_price(109999, Currency::INR), "\u{20b9}1,09,999");
        assert_eq!(format_price(12345678, Currency::INR), "\u{20b9}1,23,45,678");
    }

    #[test]
    fn test_thousands_grouping() {
        assert_eq!(format_price(109999, Currency::USD), "$109,999");
        assert_eq!(format_price(1234567, Currency::EUR), "\u{20ac}1,234,567");
    }

    #[test]
    fn test_negative_amount() {
        assert_eq!(format_price(-500, Currency::INR), "-\u{20b9}500");
        assert_eq!(Money::inr(-123456).display(), "-\u{20b9}1,23,456");
    }

    #[test]
    fn test_extreme_amount_does_not_panic() {
        let text = format_price(i64::MIN, Currency::INR);
        assert!(text.starts_with("-\u{20b9}"));
    }

    #[test]
    fn test_formatting_is_stable() {
        let m = Money::inr(79999);
        assert_eq!(m.display(), m.display());
        assert_eq!(m.to_string(), "\u{20b9}79,999");
        assert_eq!(m.amount, 79999);
    }
}
