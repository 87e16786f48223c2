//! Currency formatting for presentation surfaces.
//!
//! Amounts are displayed as thousands-grouped integers in the Indian
//! numbering style: the last three digits form one group, every group
//! above that has two digits (`12,34,567`). The aggregation functions
//! themselves always return raw decimals.

use rust_decimal::Decimal;

/// Formats an amount as a grouped integer in the Indian numbering style.
///
/// The amount is rounded to whole units; no fractional digits are shown.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use worker_tracker::export::format_inr;
///
/// assert_eq!(format_inr(Decimal::from(1350)), "1,350");
/// assert_eq!(format_inr(Decimal::from(123456)), "1,23,456");
/// ```
pub fn format_inr(amount: Decimal) -> String {
    let rounded = amount.round_dp(0).normalize();
    let digits = rounded.abs().to_string();
    let grouped = group_indian(&digits);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Formats an amount with a leading currency symbol, e.g. `₹3,000`.
pub fn format_currency(symbol: &str, amount: Decimal) -> String {
    format!("{}{}", symbol, format_inr(amount))
}

// Groups a plain digit string Indian style: last three digits, then twos.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let head_bytes = head.as_bytes();
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head_bytes.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_small_amounts_are_ungrouped() {
        assert_eq!(format_inr(dec("0")), "0");
        assert_eq!(format_inr(dec("7")), "7");
        assert_eq!(format_inr(dec("999")), "999");
    }

    #[test]
    fn test_four_digits_group_once() {
        assert_eq!(format_inr(dec("1350")), "1,350");
        assert_eq!(format_inr(dec("9450")), "9,450");
    }

    #[test]
    fn test_indian_grouping_above_thousands() {
        assert_eq!(format_inr(dec("123456")), "1,23,456");
        assert_eq!(format_inr(dec("1234567")), "12,34,567");
        assert_eq!(format_inr(dec("12345678")), "1,23,45,678");
    }

    #[test]
    fn test_fractions_round_to_whole_units() {
        assert_eq!(format_inr(dec("1350.40")), "1,350");
        assert_eq!(format_inr(dec("1350.60")), "1,351");
    }

    #[test]
    fn test_negative_amounts_keep_sign() {
        assert_eq!(format_inr(dec("-123456")), "-1,23,456");
    }

    #[test]
    fn test_format_currency_prepends_symbol() {
        assert_eq!(format_currency("\u{20b9}", dec("3000")), "\u{20b9}3,000");
    }
}
