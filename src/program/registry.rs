use std::str::FromStr;

use crate::error::ValuatorError;
use crate::program::types::{Category, Currency, RateTable};

// Rates are currency-per-unit, quoted per region the way the original
// calculators published them: EUR slightly under USD, GBP lowest, CAD and
// AUD higher due to regional pricing.
static STEAM: RateTable = RateTable::new(0.010, 0.008, 0.007, 0.013, 0.015);
static PLAYSTATION: RateTable = RateTable::new(0.009, 0.008, 0.006, 0.012, 0.014);
static XBOX: RateTable = RateTable::new(0.007, 0.006, 0.005, 0.009, 0.010);
static NINTENDO: RateTable = RateTable::new(0.010, 0.009, 0.008, 0.013, 0.014);
static EPIC: RateTable = RateTable::new(0.006, 0.005, 0.004, 0.008, 0.009);
static DELTA: RateTable = RateTable::new(0.012, 0.011, 0.009, 0.016, 0.018);
static AMERICAN: RateTable = RateTable::new(0.011, 0.010, 0.008, 0.015, 0.017);
static UNITED: RateTable = RateTable::new(0.010, 0.009, 0.007, 0.014, 0.016);
static BRITISH: RateTable = RateTable::new(0.013, 0.012, 0.010, 0.018, 0.020);
static LUFTHANSA: RateTable = RateTable::new(0.012, 0.012, 0.010, 0.017, 0.019);
static MARRIOTT: RateTable = RateTable::new(0.008, 0.007, 0.006, 0.011, 0.012);
static HILTON: RateTable = RateTable::new(0.005, 0.004, 0.003, 0.007, 0.008);
static IHG: RateTable = RateTable::new(0.005, 0.004, 0.003, 0.006, 0.007);
static HYATT: RateTable = RateTable::new(0.017, 0.015, 0.013, 0.022, 0.024);
static CHOICE: RateTable = RateTable::new(0.004, 0.003, 0.002, 0.005, 0.006);

/// Every supported loyalty program. One rate table per program; nothing
/// mutable is shared between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Program {
    Steam,
    PlayStation,
    Xbox,
    Nintendo,
    Epic,
    Delta,
    American,
    United,
    British,
    Lufthansa,
    Marriott,
    Hilton,
    Ihg,
    Hyatt,
    Choice,
}

impl Program {
    pub const ALL: [Program; 15] = [
        Program::Steam,
        Program::PlayStation,
        Program::Xbox,
        Program::Nintendo,
        Program::Epic,
        Program::Delta,
        Program::American,
        Program::United,
        Program::British,
        Program::Lufthansa,
        Program::Marriott,
        Program::Hilton,
        Program::Ihg,
        Program::Hyatt,
        Program::Choice,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Program::Steam => "steam",
            Program::PlayStation => "playstation",
            Program::Xbox => "xbox",
            Program::Nintendo => "nintendo",
            Program::Epic => "epic",
            Program::Delta => "delta",
            Program::American => "american",
            Program::United => "united",
            Program::British => "british",
            Program::Lufthansa => "lufthansa",
            Program::Marriott => "marriott",
            Program::Hilton => "hilton",
            Program::Ihg => "ihg",
            Program::Hyatt => "hyatt",
            Program::Choice => "choice",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Program::Steam => "Steam Points",
            Program::PlayStation => "PlayStation Stars",
            Program::Xbox => "Xbox Rewards",
            Program::Nintendo => "Nintendo Points",
            Program::Epic => "Epic Games Rewards",
            Program::Delta => "Delta SkyMiles",
            Program::American => "American AAdvantage",
            Program::United => "United MileagePlus",
            Program::British => "British Airways Avios",
            Program::Lufthansa => "Lufthansa Miles & More",
            Program::Marriott => "Marriott Bonvoy",
            Program::Hilton => "Hilton Honors",
            Program::Ihg => "IHG One Rewards",
            Program::Hyatt => "World of Hyatt",
            Program::Choice => "Choice Privileges",
        }
    }

    /// What the quantity field is labelled: airlines count miles, everyone
    /// else counts points.
    pub fn unit_label(&self) -> &'static str {
        match self.category() {
            Category::Airline => "miles",
            _ => "points",
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Program::Steam
            | Program::PlayStation
            | Program::Xbox
            | Program::Nintendo
            | Program::Epic => Category::Gaming,
            Program::Delta
            | Program::American
            | Program::United
            | Program::British
            | Program::Lufthansa => Category::Airline,
            Program::Marriott
            | Program::Hilton
            | Program::Ihg
            | Program::Hyatt
            | Program::Choice => Category::Hotel,
        }
    }

    pub fn rates(&self) -> &'static RateTable {
        match self {
            Program::Steam => &STEAM,
            Program::PlayStation => &PLAYSTATION,
            Program::Xbox => &XBOX,
            Program::Nintendo => &NINTENDO,
            Program::Epic => &EPIC,
            Program::Delta => &DELTA,
            Program::American => &AMERICAN,
            Program::United => &UNITED,
            Program::British => &BRITISH,
            Program::Lufthansa => &LUFTHANSA,
            Program::Marriott => &MARRIOTT,
            Program::Hilton => &HILTON,
            Program::Ihg => &IHG,
            Program::Hyatt => &HYATT,
            Program::Choice => &CHOICE,
        }
    }

    /// The two fixed quantities shown in the rate disclosure panel. Gaming
    /// balances run smaller than airline or hotel balances.
    pub fn reference_quantities(&self) -> [u64; 2] {
        match self.category() {
            Category::Gaming => [100, 1_000],
            _ => [1_000, 10_000],
        }
    }

    pub fn by_category(category: Category) -> Vec<Program> {
        Program::ALL
            .iter()
            .copied()
            .filter(|p| p.category() == category)
            .collect()
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Program {
    type Err = ValuatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let slug = s.trim().to_lowercase();
        Program::ALL
            .iter()
            .copied()
            .find(|p| p.slug() == slug)
            .ok_or(ValuatorError::UnknownProgram(slug))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_covers_all_programs() {
        assert_eq!(Program::ALL.len(), 15);
        assert_eq!(Program::by_category(Category::Gaming).len(), 5);
        assert_eq!(Program::by_category(Category::Airline).len(), 5);
        assert_eq!(Program::by_category(Category::Hotel).len(), 5);
    }

    #[test]
    fn test_every_table_is_total_and_positive() {
        for program in Program::ALL {
            for currency in Currency::ALL {
                let rate = program.rates().rate(currency);
                assert!(
                    rate > 0.0 && rate.is_finite(),
                    "{} has bad {} rate",
                    program.slug(),
                    currency
                );
            }
        }
    }

    #[test]
    fn test_published_rates() {
        assert_eq!(Program::Steam.rates().rate(Currency::Usd), 0.010);
        assert_eq!(Program::United.rates().rate(Currency::Usd), 0.010);
        assert_eq!(Program::Delta.rates().rate(Currency::Cad), 0.016);
        assert_eq!(Program::Choice.rates().rate(Currency::Gbp), 0.002);
    }

    #[test]
    fn test_slug_round_trip() {
        for program in Program::ALL {
            assert_eq!(program.slug().parse::<Program>().unwrap(), program);
        }
        assert!("spirit".parse::<Program>().is_err());
    }

    #[test]
    fn test_unit_labels() {
        assert_eq!(Program::Steam.unit_label(), "points");
        assert_eq!(Program::Delta.unit_label(), "miles");
        assert_eq!(Program::Hyatt.unit_label(), "points");
    }

    #[test]
    fn test_reference_quantities_by_category() {
        assert_eq!(Program::Steam.reference_quantities(), [100, 1_000]);
        assert_eq!(Program::United.reference_quantities(), [1_000, 10_000]);
        assert_eq!(Program::Marriott.reference_quantities(), [1_000, 10_000]);
    }
}
