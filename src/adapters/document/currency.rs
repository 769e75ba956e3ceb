//! Currency formatting for the customer-info block.

use serde::{Deserialize, Serialize};

/// Numeric-format policy for ARR values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurrencyStyle {
    /// Rounded to a whole amount with thousands separators.
    #[default]
    Grouped,
    /// Two-decimal fixed point, no grouping (older template variant).
    Fixed2,
}

/// Formats an amount according to the style.
pub fn format_currency(value: f64, style: CurrencyStyle) -> String {
    match style {
        CurrencyStyle::Grouped => group_thousands(value.round() as i64),
        CurrencyStyle::Fixed2 => format!("{:.2}", value),
    }
}

fn group_thousands(value: i64) -> String {
    let digits = value.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouped_rounds_and_separates_thousands() {
        assert_eq!(format_currency(12000.0, CurrencyStyle::Grouped), "12,000");
        assert_eq!(format_currency(1234567.4, CurrencyStyle::Grouped), "1,234,567");
        assert_eq!(format_currency(999.6, CurrencyStyle::Grouped), "1,000");
    }

    #[test]
    fn grouped_leaves_small_amounts_ungrouped() {
        assert_eq!(format_currency(0.0, CurrencyStyle::Grouped), "0");
        assert_eq!(format_currency(999.0, CurrencyStyle::Grouped), "999");
    }

    #[test]
    fn grouped_handles_negative_amounts() {
        assert_eq!(format_currency(-12000.0, CurrencyStyle::Grouped), "-12,000");
    }

    #[test]
    fn fixed2_keeps_two_decimals_without_grouping() {
        assert_eq!(format_currency(12000.0, CurrencyStyle::Fixed2), "12000.00");
        assert_eq!(format_currency(1234.5, CurrencyStyle::Fixed2), "1234.50");
    }
}
