pub mod calculator;
pub mod format;
pub mod reference;

pub use calculator::{calculate, parse_quantity, value_of, Valuation};
pub use format::{format_currency, format_rate};
pub use reference::{reference_rows, ReferenceRow};
