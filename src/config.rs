use serde::Deserialize;
use std::str::FromStr;

use crate::program::{Currency, Program};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub display: DisplayConfig,
    pub reviews: ReviewsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DisplayConfig {
    pub default_program: String,
    pub default_currency: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReviewsConfig {
    pub max_per_day: usize,
    pub list_limit: usize,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::Environment::with_prefix("POINTS"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    pub fn default_program(&self) -> anyhow::Result<Program> {
        Program::from_str(&self.display.default_program)
            .map_err(|e| anyhow::anyhow!("Invalid default program: {}", e))
    }

    pub fn default_currency(&self) -> anyhow::Result<Currency> {
        Currency::from_str(&self.display.default_currency)
            .map_err(|e| anyhow::anyhow!("Invalid default currency: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_defaults_resolve() {
        let config = Config {
            database: DatabaseConfig {
                path: "reviews.db".to_string(),
            },
            display: DisplayConfig {
                default_program: "steam".to_string(),
                default_currency: "USD".to_string(),
            },
            reviews: ReviewsConfig {
                max_per_day: 3,
                list_limit: 20,
            },
        };
        assert_eq!(config.default_program().unwrap(), Program::Steam);
        assert_eq!(config.default_currency().unwrap(), Currency::Usd);
    }
}
