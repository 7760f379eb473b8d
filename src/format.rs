use rust_decimal::RoundingStrategy;

use crate::decimal::Money;

/// display an amount with two decimals and thousands separators,
/// e.g. `DZD 1,234.56` or `$1,234.56`
pub fn format_currency(amount: Money, currency: &str) -> String {
    let rounded = amount
        .as_decimal()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    let digits = format!("{:.2}", rounded.abs());
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    // negative amounts keep their sign even when they round to zero
    let sign = if amount.is_negative() { "-" } else { "" };

    let code = currency.to_ascii_uppercase();
    let prefix = match currency_symbol(&code) {
        Some(symbol) => symbol.to_string(),
        None => format!("{}\u{a0}", code),
    };

    format!("{}{}{}.{}", sign, prefix, group_thousands(whole), fraction)
}

fn currency_symbol(code: &str) -> Option<&'static str> {
    match code {
        "USD" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        _ => None,
    }
}

fn group_thousands(whole: &str) -> String {
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

impl Money {
    /// display in the given currency
    pub fn format(&self, currency: &str) -> String {
        format_currency(*self, currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dinar_formatting() {
        let amount = Money::from_str_exact("1234.5").unwrap();
        assert_eq!(format_currency(amount, "DZD"), "DZD\u{a0}1,234.50");
    }

    #[test]
    fn test_large_amounts() {
        assert_eq!(
            format_currency(Money::from_major(1_234_567), "DZD"),
            "DZD\u{a0}1,234,567.00"
        );
        assert_eq!(format_currency(Money::from_major(100), "DZD"), "DZD\u{a0}100.00");
        assert_eq!(format_currency(Money::ZERO, "DZD"), "DZD\u{a0}0.00");
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        let amount = Money::from_str_exact("10.005").unwrap();
        assert_eq!(format_currency(amount, "DZD"), "DZD\u{a0}10.01");

        let amount = Money::from_str_exact("-10.005").unwrap();
        assert_eq!(format_currency(amount, "DZD"), "-DZD\u{a0}10.01");
    }

    #[test]
    fn test_symbol_currencies() {
        let amount = Money::from_str_exact("2500.75").unwrap();
        assert_eq!(format_currency(amount, "USD"), "$2,500.75");
        assert_eq!(format_currency(amount, "eur"), "€2,500.75");
        assert_eq!(amount.format("GBP"), "£2,500.75");
    }

    #[test]
    fn test_negative_amount() {
        let amount = Money::from_major(-950);
        assert_eq!(format_currency(amount, "DZD"), "-DZD\u{a0}950.00");

        let dust = Money::from_str_exact("-0.001").unwrap();
        assert_eq!(format_currency(dust, "DZD"), "-DZD\u{a0}0.00");

        let positive_dust = Money::from_str_exact("0.001").unwrap();
        assert_eq!(format_currency(positive_dust, "DZD"), "DZD\u{a0}0.00");
    }
}
