use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "points-valuator")]
#[command(about = "Convert loyalty points and miles into estimated monetary value")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch interactive TUI calculator
    Tui,

    /// Value a point/mile balance for one program
    Value {
        /// Program slug (see `programs` for the list)
        program: String,

        /// Point or mile quantity
        quantity: String,

        /// Currency code (USD, EUR, GBP, CAD, AUD); defaults from config
        #[arg(short, long)]
        currency: Option<String>,

        /// Also print the program's rate disclosure panel
        #[arg(short, long)]
        table: bool,
    },

    /// Show a program's rate disclosure panel
    Rates {
        /// Program slug
        program: String,
    },

    /// List supported programs
    Programs {
        /// Filter by category (gaming, airline, hotel)
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Manage user reviews
    Review {
        #[command(subcommand)]
        action: ReviewAction,
    },

    /// Show review statistics
    Stats {
        /// Output format: table or json
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Initialize database and configuration
    Init,
}

#[derive(Subcommand)]
pub enum ReviewAction {
    /// Submit a review
    Add {
        /// Your name
        #[arg(short, long)]
        name: String,

        /// Rating from 1 to 5
        #[arg(short, long)]
        rating: u8,

        /// Review text (10 to 500 characters)
        #[arg(short = 'm', long)]
        content: String,

        /// Category (gaming, airline, hotel, general)
        #[arg(short, long, default_value = "general")]
        category: String,

        /// Optional points/miles annotation, e.g. "50,000 Steam points"
        #[arg(long)]
        points: Option<String>,

        /// Optional calculated value annotation, e.g. "$500 USD"
        #[arg(long)]
        value: Option<String>,
    },

    /// List reviews, newest submissions first
    List {
        /// Maximum entries to show; defaults from config
        #[arg(short, long)]
        limit: Option<usize>,

        /// Output format: table or json
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Remove one submitted review by id
    Remove {
        /// Review id (from `review list`)
        id: i64,

        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Remove all submitted reviews
    Clear {
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}
