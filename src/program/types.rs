use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ValuatorError;

/// Supported settlement currencies. Every program quotes rates for all five.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    Usd,
    Eur,
    Gbp,
    Cad,
    Aud,
}

impl Currency {
    pub const ALL: [Currency; 5] = [
        Currency::Usd,
        Currency::Eur,
        Currency::Gbp,
        Currency::Cad,
        Currency::Aud,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Cad => "CAD",
            Currency::Aud => "AUD",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Eur => "€",
            Currency::Gbp => "£",
            Currency::Cad => "CA$",
            Currency::Aud => "A$",
        }
    }

    pub fn full_name(&self) -> &'static str {
        match self {
            Currency::Usd => "US Dollar",
            Currency::Eur => "Euro",
            Currency::Gbp => "British Pound",
            Currency::Cad => "Canadian Dollar",
            Currency::Aud => "Australian Dollar",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = ValuatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            "GBP" => Ok(Currency::Gbp),
            "CAD" => Ok(Currency::Cad),
            "AUD" => Ok(Currency::Aud),
            other => Err(ValuatorError::UnknownCurrency(other.to_string())),
        }
    }
}

/// Site-wide taxonomy. Programs belong to the first three; reviews may also
/// use General.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Gaming,
    Airline,
    Hotel,
    General,
}

impl Default for Category {
    fn default() -> Self {
        Category::General
    }
}

impl Category {
    pub fn icon(&self) -> &'static str {
        match self {
            Category::Gaming => "🎮",
            Category::Airline => "✈️",
            Category::Hotel => "🏨",
            Category::General => "💎",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Category::Gaming => "gaming",
            Category::Airline => "airline",
            Category::Hotel => "hotel",
            Category::General => "general",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Category {
    type Err = ValuatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gaming" => Ok(Category::Gaming),
            "airline" => Ok(Category::Airline),
            "hotel" => Ok(Category::Hotel),
            "general" => Ok(Category::General),
            other => Err(ValuatorError::UnknownCategory(other.to_string())),
        }
    }
}

/// Fixed per-program exchange rates: currency per one point or mile.
/// Total over the currency set by construction, never mutated at runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateTable {
    usd: f64,
    eur: f64,
    gbp: f64,
    cad: f64,
    aud: f64,
}

impl RateTable {
    pub const fn new(usd: f64, eur: f64, gbp: f64, cad: f64, aud: f64) -> Self {
        Self { usd, eur, gbp, cad, aud }
    }

    pub fn rate(&self, currency: Currency) -> f64 {
        match currency {
            Currency::Usd => self.usd,
            Currency::Eur => self.eur,
            Currency::Gbp => self.gbp,
            Currency::Cad => self.cad,
            Currency::Aud => self.aud,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_parsing() {
        assert_eq!("usd".parse::<Currency>().unwrap(), Currency::Usd);
        assert_eq!(" GBP ".parse::<Currency>().unwrap(), Currency::Gbp);
        assert!("JPY".parse::<Currency>().is_err());
    }

    #[test]
    fn test_currency_codes_round_trip() {
        for currency in Currency::ALL {
            assert_eq!(currency.code().parse::<Currency>().unwrap(), currency);
        }
    }

    #[test]
    fn test_category_parsing() {
        assert_eq!("Hotel".parse::<Category>().unwrap(), Category::Hotel);
        assert_eq!("general".parse::<Category>().unwrap(), Category::General);
        assert!("cruise".parse::<Category>().is_err());
    }

    #[test]
    fn test_rate_table_lookup_is_total() {
        let table = RateTable::new(0.01, 0.008, 0.007, 0.013, 0.015);
        for currency in Currency::ALL {
            assert!(table.rate(currency) > 0.0);
        }
        assert_eq!(table.rate(Currency::Usd), 0.01);
        assert_eq!(table.rate(Currency::Aud), 0.015);
    }
}
