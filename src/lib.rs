pub mod config;
pub mod error;
pub mod program;
pub mod review;
pub mod storage;
pub mod utils;
pub mod valuation;

pub use config::Config;
pub use error::{Result, ValuatorError};
