pub mod registry;
pub mod types;

pub use registry::Program;
pub use types::{Category, Currency, RateTable};
