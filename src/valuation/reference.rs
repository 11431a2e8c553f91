use crate::program::{Currency, Program};
use crate::valuation::calculator::value_of;
use crate::valuation::format::format_currency;

/// One row of the rate disclosure panel: what the program's two fixed
/// reference quantities are worth in a given currency.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceRow {
    pub currency: Currency,
    pub quantities: [u64; 2],
    pub values: [f64; 2],
}

impl ReferenceRow {
    pub fn formatted_value(&self, index: usize) -> String {
        format_currency(self.values[index], self.currency)
    }
}

/// Build the disclosure panel for a program. Values go through the same
/// `value_of` path as the calculator, so the panel cannot drift from the
/// main result for identical inputs.
pub fn reference_rows(program: Program) -> Vec<ReferenceRow> {
    let quantities = program.reference_quantities();
    Currency::ALL
        .iter()
        .map(|&currency| ReferenceRow {
            currency,
            quantities,
            values: [
                value_of(quantities[0] as f64, currency, program.rates()),
                value_of(quantities[1] as f64, currency, program.rates()),
            ],
        })
        .collect()
}
