use tui_input::Input;

use crate::config::Config;
use crate::error::Result;
use crate::program::{Currency, Program};
use crate::review::ReviewBoard;
use crate::storage::models::Review;
use crate::storage::Database;
use crate::valuation::{calculate, Valuation};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Calculator,
    Rates,
    Reviews,
    Settings,
}

pub struct App {
    // UI state
    pub current_screen: Screen,
    pub should_quit: bool,
    pub status_message: String,

    // Calculator state
    pub quantity: Input,
    pub program_index: usize,
    pub currency_index: usize,
    pub result: Option<Valuation>,

    // Reviews state
    pub reviews: Vec<Review>,
    pub selected_review: usize,

    // Backend
    pub config: Config,
    board: ReviewBoard<Database>,
}

impl App {
    pub fn new(config: Config) -> Result<Self> {
        let db = Database::new(&config.database.path)?;
        let board = ReviewBoard::new(db, config.reviews.max_per_day);

        let default_program = config
            .default_program()
            .unwrap_or(Program::Steam);
        let default_currency = config
            .default_currency()
            .unwrap_or(Currency::Usd);

        let program_index = Program::ALL
            .iter()
            .position(|p| *p == default_program)
            .unwrap_or(0);
        let currency_index = Currency::ALL
            .iter()
            .position(|c| *c == default_currency)
            .unwrap_or(0);

        let mut app = Self {
            current_screen: Screen::Calculator,
            should_quit: false,
            status_message: "Ready".to_string(),
            quantity: Input::default(),
            program_index,
            currency_index,
            result: None,
            reviews: Vec::new(),
            selected_review: 0,
            config,
            board,
        };
        app.refresh_reviews();
        Ok(app)
    }

    pub fn program(&self) -> Program {
        Program::ALL[self.program_index]
    }

    pub fn currency(&self) -> Currency {
        Currency::ALL[self.currency_index]
    }

    // Navigation
    pub fn next_screen(&mut self) {
        self.current_screen = match self.current_screen {
            Screen::Calculator => Screen::Rates,
            Screen::Rates => Screen::Reviews,
            Screen::Reviews => Screen::Settings,
            Screen::Settings => Screen::Calculator,
        };
    }

    pub fn previous_screen(&mut self) {
        self.current_screen = match self.current_screen {
            Screen::Calculator => Screen::Settings,
            Screen::Settings => Screen::Reviews,
            Screen::Reviews => Screen::Rates,
            Screen::Rates => Screen::Calculator,
        };
    }

    // Calculator actions. Changing the currency or the program recomputes
    // immediately; Enter triggers the same path explicitly, so both routes
    // always agree.
    pub fn next_currency(&mut self) {
        self.currency_index = (self.currency_index + 1) % Currency::ALL.len();
        self.recalculate();
    }

    pub fn previous_currency(&mut self) {
        self.currency_index =
            (self.currency_index + Currency::ALL.len() - 1) % Currency::ALL.len();
        self.recalculate();
    }

    pub fn next_program(&mut self) {
        self.program_index = (self.program_index + 1) % Program::ALL.len();
        self.recalculate();
    }

    pub fn previous_program(&mut self) {
        self.program_index = (self.program_index + Program::ALL.len() - 1) % Program::ALL.len();
        self.recalculate();
    }

    pub fn recalculate(&mut self) {
        self.result = calculate(self.quantity.value(), self.currency(), self.program().rates());
        self.status_message = match &self.result {
            Some(result) => format!(
                "{} {} = {}",
                self.quantity.value().trim(),
                self.program().unit_label(),
                result.formatted()
            ),
            // Neutral empty state, never an error.
            None => "Ready".to_string(),
        };
    }

    // Review actions
    pub fn refresh_reviews(&mut self) {
        self.reviews = self.board.list();
        if self.selected_review >= self.reviews.len() {
            self.selected_review = self.reviews.len().saturating_sub(1);
        }
    }

    pub fn next_review(&mut self) {
        if !self.reviews.is_empty() {
            self.selected_review = (self.selected_review + 1) % self.reviews.len();
        }
    }

    pub fn previous_review(&mut self) {
        if !self.reviews.is_empty() {
            self.selected_review =
                (self.selected_review + self.reviews.len() - 1) % self.reviews.len();
        }
    }

    pub fn delete_selected_review(&mut self) {
        let Some(review) = self.reviews.get(self.selected_review) else {
            return;
        };

        match self.board.remove(review.id) {
            Ok(true) => {
                self.status_message = format!("Removed review {}", review.id);
                self.refresh_reviews();
            }
            Ok(false) => {
                self.status_message = "Showcase reviews cannot be removed".to_string();
            }
            Err(e) => {
                self.status_message = format!("Remove failed: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DatabaseConfig, DisplayConfig, ReviewsConfig};

    fn test_app() -> (App, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            database: DatabaseConfig {
                path: dir.path().join("tui.db").to_str().unwrap().to_string(),
            },
            display: DisplayConfig {
                default_program: "united".to_string(),
                default_currency: "USD".to_string(),
            },
            reviews: ReviewsConfig {
                max_per_day: 3,
                list_limit: 20,
            },
        };
        (App::new(config).unwrap(), dir)
    }

    #[test]
    fn test_currency_change_recomputes() {
        let (mut app, _dir) = test_app();
        app.quantity = Input::new("50000".to_string());
        app.recalculate();
        assert_eq!(app.result.unwrap().formatted(), "$500.00");

        app.next_currency();
        assert_eq!(app.result.unwrap().currency, Currency::Eur);

        // Back to USD reproduces the original result exactly.
        app.previous_currency();
        assert_eq!(app.result.unwrap().formatted(), "$500.00");
    }

    #[test]
    fn test_invalid_quantity_clears_result() {
        let (mut app, _dir) = test_app();
        app.quantity = Input::new("abc".to_string());
        app.recalculate();
        assert!(app.result.is_none());
        assert_eq!(app.status_message, "Ready");
    }

    #[test]
    fn test_screen_cycle() {
        let (mut app, _dir) = test_app();
        assert_eq!(app.current_screen, Screen::Calculator);
        app.next_screen();
        assert_eq!(app.current_screen, Screen::Rates);
        app.previous_screen();
        app.previous_screen();
        assert_eq!(app.current_screen, Screen::Settings);
    }

    #[test]
    fn test_reviews_load_showcase_entries() {
        let (app, _dir) = test_app();
        assert_eq!(app.reviews.len(), 6);
    }
}
