mod cli;
mod config;
mod error;
mod program;
mod review;
mod storage;
mod tui;
mod utils;
mod valuation;

use std::str::FromStr;

use clap::Parser;
use colored::*;
use tracing::{error, info};

use cli::{Cli, Commands, ReviewAction};
use config::Config;
use program::{Category, Currency, Program};
use review::ReviewBoard;
use storage::Database;
use valuation::{calculate, format_rate, reference_rows};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("points_valuator=debug,info")
        .init();

    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Tui => tui::run(config).await,

        Commands::Value {
            program,
            quantity,
            currency,
            table,
        } => value_command(&config, &program, &quantity, currency.as_deref(), table),

        Commands::Rates { program } => rates_command(&program),

        Commands::Programs { category } => programs_command(category.as_deref()),

        Commands::Review { action } => review_command(&config, action),

        Commands::Stats { format } => stats_command(&config, &format),

        Commands::Init => initialize(&config),
    };

    if let Err(e) = result {
        error!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}

fn value_command(
    config: &Config,
    program: &str,
    quantity: &str,
    currency: Option<&str>,
    table: bool,
) -> error::Result<()> {
    let program = Program::from_str(program)?;
    let currency = match currency {
        Some(code) => Currency::from_str(code)?,
        None => config.default_currency()?,
    };

    match calculate(quantity, currency, program.rates()) {
        Some(result) => {
            println!(
                "{} {} = {}",
                quantity.trim(),
                format!("{} {}", program.display_name(), program.unit_label()).cyan(),
                result.formatted().green().bold()
            );
            info!(
                "Valued {} {} at {} {}",
                result.quantity,
                program.slug(),
                result.amount,
                currency
            );
        }
        // Quiet suppression: bad input is an empty state, not an error.
        None => {
            println!(
                "{}",
                format!(
                    "Enter a positive {} amount to see its value",
                    program.unit_label()
                )
                .yellow()
            );
            return Ok(());
        }
    }

    if table {
        println!();
        print_rate_panel(program);
    }

    Ok(())
}

fn rates_command(program: &str) -> error::Result<()> {
    let program = Program::from_str(program)?;
    println!(
        "{}",
        format!("=== {} Exchange Rates ===", program.display_name())
            .cyan()
            .bold()
    );
    print_rate_panel(program);
    println!(
        "{}",
        "* Rates are for reference only; actual redemption values vary.".dimmed()
    );
    Ok(())
}

fn print_rate_panel(program: Program) {
    let rows = reference_rows(program);
    let [small, large] = program.reference_quantities();
    let unit = program.unit_label();

    utils::print_table_border(78);
    utils::print_table_row(
        &[
            "Currency",
            "Rate",
            &format!("{} {}", small, unit),
            &format!("{} {}", large, unit),
        ],
        &[10, 10, 24, 24],
    );
    utils::print_table_border(78);

    for row in rows {
        utils::print_table_row(
            &[
                row.currency.code(),
                &format_rate(program.rates().rate(row.currency)),
                &row.formatted_value(0),
                &row.formatted_value(1),
            ],
            &[10, 10, 24, 24],
        );
    }
    utils::print_table_border(78);
}

fn programs_command(category: Option<&str>) -> error::Result<()> {
    let programs = match category {
        Some(raw) => {
            let category = Category::from_str(raw)?;
            Program::by_category(category)
        }
        None => Program::ALL.to_vec(),
    };

    println!("{}", "=== Supported Programs ===".cyan().bold());
    utils::print_table_border(70);
    utils::print_table_row(&["Slug", "Program", "Category", "Unit"], &[14, 26, 10, 8]);
    utils::print_table_border(70);
    for program in programs {
        utils::print_table_row(
            &[
                program.slug(),
                program.display_name(),
                &program.category().to_string(),
                program.unit_label(),
            ],
            &[14, 26, 10, 8],
        );
    }
    utils::print_table_border(70);
    Ok(())
}

fn review_command(config: &Config, action: ReviewAction) -> error::Result<()> {
    let db = Database::new(&config.database.path)?;
    let board = ReviewBoard::new(db, config.reviews.max_per_day);

    match action {
        ReviewAction::Add {
            name,
            rating,
            content,
            category,
            points,
            value,
        } => {
            let draft = storage::models::ReviewDraft {
                name,
                rating,
                content,
                category: Category::from_str(&category)?,
                points_amount: points,
                calculated_value: value,
            };

            match board.submit(draft) {
                Ok(review) => {
                    println!("{}", "✓ Review submitted".green());
                    println!("  Id:       {}", review.id);
                    println!("  Rating:   {}", review.stars().yellow());
                    println!(
                        "  Remaining today: {}",
                        board.remaining_today().unwrap_or(0)
                    );
                    Ok(())
                }
                // Validation and cap messages are user-facing, not crashes.
                Err(e @ error::ValuatorError::Review(_))
                | Err(e @ error::ValuatorError::DailyLimitReached(_)) => {
                    println!("{}", e.to_string().red());
                    Ok(())
                }
                Err(e) => Err(e),
            }
        }

        ReviewAction::List { limit, format } => {
            let limit = limit.unwrap_or(config.reviews.list_limit);
            let reviews: Vec<_> = board.list().into_iter().take(limit).collect();

            if format == "json" {
                println!("{}", serde_json::to_string_pretty(&reviews)?);
                return Ok(());
            }

            println!("{}", "=== What Our Users Say ===".cyan().bold());
            utils::print_table_border(100);
            utils::print_table_row(
                &["Id", "Name", "Rating", "Category", "Posted", "Review"],
                &[5, 14, 6, 9, 11, 40],
            );
            utils::print_table_border(100);
            for review in &reviews {
                utils::print_table_row(
                    &[
                        &review.id.to_string(),
                        &utils::truncate(&review.name, 14),
                        &review.stars(),
                        &review.category.to_string(),
                        &review.created_at.format("%Y-%m-%d").to_string(),
                        &utils::truncate(&review.content, 40),
                    ],
                    &[5, 14, 6, 9, 11, 40],
                );
            }
            utils::print_table_border(100);
            Ok(())
        }

        ReviewAction::Remove { id, yes } => {
            if !yes && !utils::confirm_action(&format!("Remove review {}?", id)) {
                println!("Cancelled");
                return Ok(());
            }

            if board.remove(id)? {
                println!("{}", format!("✓ Review {} removed", id).green());
            } else {
                println!("{}", format!("No removable review with id {}", id).yellow());
            }
            Ok(())
        }

        ReviewAction::Clear { yes } => {
            if !yes && !utils::confirm_action("Remove ALL submitted reviews?") {
                println!("Cancelled");
                return Ok(());
            }

            let removed = board.clear()?;
            println!("{}", format!("✓ Removed {} reviews", removed).green());
            Ok(())
        }
    }
}

fn stats_command(config: &Config, format: &str) -> error::Result<()> {
    let db = Database::new(&config.database.path)?;
    let stats = db.get_stats()?;

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("{}", "=== Review Statistics ===".cyan().bold());
    println!("\nReviews:");
    println!("  Total:          {}", stats.total_reviews);
    println!(
        "  Today:          {} / {}",
        stats.submitted_today.to_string().green(),
        config.reviews.max_per_day
    );
    println!("  Average rating: {:.1} / 5", stats.average_rating);

    println!("\nBy category:");
    println!("  Gaming:   {}", stats.gaming);
    println!("  Airline:  {}", stats.airline);
    println!("  Hotel:    {}", stats.hotel);
    println!("  General:  {}", stats.general);

    Ok(())
}

fn initialize(config: &Config) -> error::Result<()> {
    println!("{}", "Initializing points-valuator...".green());
    let _db = Database::new(&config.database.path)?;
    println!("{}", "✓ Database initialized".green());
    println!("{}", "✓ Configuration loaded".green());

    println!("\n{}", "Configuration:".cyan());
    println!("  Database:         {}", config.database.path);
    println!("  Default program:  {}", config.display.default_program);
    println!("  Default currency: {}", config.display.default_currency);
    println!("  Reviews per day:  {}", config.reviews.max_per_day);
    println!("  Programs:         {}", Program::ALL.len());

    println!("\n{}", "Ready to use! Try running:".cyan());
    println!(
        "  {} to value a balance",
        "points-valuator value steam 1000".yellow()
    );
    println!(
        "  {} to see a rate panel",
        "points-valuator rates delta".yellow()
    );
    println!(
        "  {} to launch the TUI calculator",
        "points-valuator tui".yellow()
    );
    Ok(())
}
