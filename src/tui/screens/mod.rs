pub mod calculator;
pub mod rates;
pub mod reviews;
pub mod settings;
