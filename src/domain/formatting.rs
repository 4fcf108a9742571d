use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Percentage with one decimal place, e.g. `24.0%`.
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Decay rate in percentage points per hour, e.g. `5.0% per hour`.
pub fn format_rate_per_hour(value: f64) -> String {
    format!("{} per hour", format_percent(value))
}

/// Absolute currency amount with thousands separators and at most two
/// fraction digits, e.g. `$1,234.5`.
pub fn format_currency(value: f64, symbol: &str) -> String {
    if value.is_nan() {
        return format!("{}NaN", symbol);
    }
    if value.is_infinite() {
        return format!("{}∞", symbol);
    }

    match Decimal::from_f64(value.abs()) {
        Some(amount) => {
            let rounded = amount
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
                .normalize();
            format!("{}{}", symbol, group_thousands(&rounded.to_string()))
        }
        // Beyond Decimal's range
        None => format!("{}{}", symbol, group_thousands(&format!("{:.0}", value.abs()))),
    }
}

/// Count with one decimal place, e.g. `12.5`.
pub fn format_count(value: f64) -> String {
    format!("{:.1}", value)
}

fn group_thousands(plain: &str) -> String {
    let (int_part, frac_part) = match plain.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (plain, None),
    };

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 4);
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*digit);
    }

    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_has_one_decimal() {
        assert_eq!(format_percent(24.0), "24.0%");
        assert_eq!(format_percent(33.333), "33.3%");
        assert_eq!(format_rate_per_hour(5.0), "5.0% per hour");
    }

    #[test]
    fn test_currency_is_absolute_and_grouped() {
        assert_eq!(format_currency(4000.0, "$"), "$4,000");
        assert_eq!(format_currency(-1234.5, "$"), "$1,234.5");
        assert_eq!(format_currency(1_234_567.891, "$"), "$1,234,567.89");
        assert_eq!(format_currency(999.0, "€"), "€999");
        assert_eq!(format_currency(0.0, "$"), "$0");
    }

    #[test]
    fn test_currency_non_finite() {
        assert_eq!(format_currency(f64::INFINITY, "$"), "$∞");
        assert_eq!(format_currency(f64::NEG_INFINITY, "$"), "$∞");
        assert_eq!(format_currency(f64::NAN, "$"), "$NaN");
    }

    #[test]
    fn test_currency_beyond_decimal_range_is_grouped() {
        assert_eq!(
            format_currency(-1e30, "$"),
            "$1,000,000,000,000,000,019,884,624,838,656"
        );
    }

    #[test]
    fn test_group_thousands_boundaries() {
        assert_eq!(group_thousands("100"), "100");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("100000"), "100,000");
        assert_eq!(group_thousands("1000000.5"), "1,000,000.5");
    }
}
