use crate::program::{Currency, RateTable};
use crate::valuation::format::format_currency;
use tracing::debug;

/// A single completed valuation. Exists only for display and is superseded
/// by the next calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Valuation {
    pub quantity: f64,
    pub amount: f64,
    pub currency: Currency,
}

impl Valuation {
    pub fn formatted(&self) -> String {
        format_currency(self.amount, self.currency)
    }
}

/// Parse a raw quantity field.
///
/// Invalid input is not an error: parse failures, non-finite values, and
/// anything <= 0 all yield None and the caller shows its neutral empty
/// state instead of a message.
pub fn parse_quantity(raw: &str) -> Option<f64> {
    let parsed: f64 = raw.trim().parse().ok()?;
    if !parsed.is_finite() || parsed <= 0.0 {
        debug!("Suppressing non-positive quantity: {}", raw);
        return None;
    }
    Some(parsed)
}

/// The one multiplication every calculator variant shares. No rounding here;
/// rounding belongs to display formatting only.
pub fn value_of(quantity: f64, currency: Currency, rates: &RateTable) -> f64 {
    quantity * rates.rate(currency)
}

/// Full valuation path: validate, look up, multiply. Pure in all three
/// inputs, so the explicit calculate action and the currency-change
/// auto-trigger converge on identical output.
pub fn calculate(raw_quantity: &str, currency: Currency, rates: &RateTable) -> Option<Valuation> {
    let quantity = parse_quantity(raw_quantity)?;
    Some(Valuation {
        quantity,
        amount: value_of(quantity, currency, rates),
        currency,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::program::Program;

    #[test]
    fn test_steam_scenario() {
        let result = calculate("1000", Currency::Usd, Program::Steam.rates()).unwrap();
        assert_eq!(result.amount, 10.0);
        assert_eq!(result.formatted(), "$10.00");
    }

    #[test]
    fn test_united_scenario() {
        let result = calculate("50000", Currency::Usd, Program::United.rates()).unwrap();
        assert_eq!(result.amount, 500.0);
        assert_eq!(result.formatted(), "$500.00");
    }

    #[test]
    fn test_invalid_quantities_yield_no_result() {
        for raw in ["-5", "abc", "0", "", "  ", "NaN", "inf", "-0.0"] {
            for program in Program::ALL {
                for currency in Currency::ALL {
                    assert!(
                        calculate(raw, currency, program.rates()).is_none(),
                        "{:?} should be suppressed for {}/{}",
                        raw,
                        program.slug(),
                        currency
                    );
                }
            }
        }
    }

    #[test]
    fn test_whitespace_and_decimals_accepted() {
        assert_eq!(parse_quantity(" 1500 "), Some(1500.0));
        assert_eq!(parse_quantity("0.5"), Some(0.5));
        assert_eq!(parse_quantity("1e3"), Some(1000.0));
    }

    #[test]
    fn test_result_is_exactly_quantity_times_rate() {
        for program in Program::ALL {
            for currency in Currency::ALL {
                for quantity in [1.0, 250.0, 1000.0, 12345.0, 99999.5] {
                    let rate = program.rates().rate(currency);
                    let result =
                        calculate(&quantity.to_string(), currency, program.rates()).unwrap();
                    assert_eq!(result.amount.to_bits(), (quantity * rate).to_bits());
                }
            }
        }
    }

    #[test]
    fn test_currency_switch_determinism() {
        // C1 -> C2 -> C1 with the same quantity reproduces the C1 amount
        // bit-for-bit.
        let rates = Program::Delta.rates();
        let first = calculate("7321", Currency::Eur, rates).unwrap();
        let _detour = calculate("7321", Currency::Aud, rates).unwrap();
        let second = calculate("7321", Currency::Eur, rates).unwrap();
        assert_eq!(first.amount.to_bits(), second.amount.to_bits());
        assert_eq!(first.formatted(), second.formatted());
    }
}
