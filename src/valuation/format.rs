use crate::program::Currency;

/// Format a monetary amount for display: currency symbol, thousands
/// grouping, exactly two decimal places per ISO 4217 for all five supported
/// codes. Pure function of its inputs, so formatting the same amount twice
/// yields identical text.
pub fn format_currency(amount: f64, currency: Currency) -> String {
    let rendered = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = rendered.split_once('.').unwrap_or((rendered.as_str(), "00"));
    let sign = if amount < 0.0 { "-" } else { "" };
    format!(
        "{}{}{}.{}",
        sign,
        currency.symbol(),
        group_thousands(int_part),
        frac_part
    )
}

/// Format a per-unit rate the way the disclosure panels quote them.
pub fn format_rate(rate: f64) -> String {
    format!("{:.3}", rate)
}

fn group_thousands(digits: &str) -> String {
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(bytes.len() + bytes.len() / 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*b as char);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_decimal_places() {
        assert_eq!(format_currency(10.0, Currency::Usd), "$10.00");
        assert_eq!(format_currency(500.0, Currency::Usd), "$500.00");
        assert_eq!(format_currency(8.4, Currency::Eur), "€8.40");
        assert_eq!(format_currency(0.126, Currency::Gbp), "£0.13");
    }

    #[test]
    fn test_thousands_grouping() {
        assert_eq!(format_currency(1234.56, Currency::Usd), "$1,234.56");
        assert_eq!(format_currency(1000000.0, Currency::Cad), "CA$1,000,000.00");
        assert_eq!(format_currency(999.99, Currency::Aud), "A$999.99");
    }

    #[test]
    fn test_every_symbol() {
        assert_eq!(format_currency(1.0, Currency::Usd), "$1.00");
        assert_eq!(format_currency(1.0, Currency::Eur), "€1.00");
        assert_eq!(format_currency(1.0, Currency::Gbp), "£1.00");
        assert_eq!(format_currency(1.0, Currency::Cad), "CA$1.00");
        assert_eq!(format_currency(1.0, Currency::Aud), "A$1.00");
    }

    #[test]
    fn test_formatting_is_idempotent() {
        let amount = 52341.009;
        let first = format_currency(amount, Currency::Usd);
        let second = format_currency(amount, Currency::Usd);
        assert_eq!(first, second);
    }
}
