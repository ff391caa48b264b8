//! Command-line arguments.

use clap::{Args as ClapArgs, Parser, Subcommand};
use trapline_core::{HarvestDraft, InvestmentDraft};

/// Trapline - lobster harvest and investment dashboard
#[derive(Parser, Debug)]
#[command(name = "trapline", author, version, about, long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Backend base URL
    #[arg(long, env = "TRAPLINE_BACKEND_URL", global = true)]
    pub backend_url: Option<String>,

    /// Enable debug logging (RUST_LOG still wins)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the web dashboard
    Serve {
        /// Listen address, e.g. 127.0.0.1:3000
        #[arg(long)]
        listen: Option<String>,
    },
    /// Print statistics and both tables
    Summary,
    /// Harvest records
    Harvest {
        #[command(subcommand)]
        action: HarvestAction,
    },
    /// Investment records
    Invest {
        #[command(subcommand)]
        action: InvestAction,
    },
    /// Configuration file management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// `trapline harvest` subcommands.
#[derive(Subcommand, Debug)]
pub enum HarvestAction {
    /// Record a harvest
    Add(HarvestArgs),
}

/// `trapline invest` subcommands.
#[derive(Subcommand, Debug)]
pub enum InvestAction {
    /// Record an investment
    Add(InvestArgs),
}

/// `trapline config` subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the config file path
    Path,
    /// Print the effective file configuration
    Show,
    /// Write a default config file
    Init {
        /// Write here instead of the default location
        #[arg(long)]
        file: Option<String>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Fields of a new harvest. Numbers are kept as text and parsed on submit.
#[derive(ClapArgs, Debug, Clone)]
pub struct HarvestArgs {
    /// Landing date (YYYY-MM-DD)
    #[arg(long)]
    pub date: String,
    /// Vessel name
    #[arg(long)]
    pub boat: String,
    /// Area or port
    #[arg(long)]
    pub location: String,
    /// Weight in kilograms
    #[arg(long)]
    pub weight: String,
    /// Dock price per kilogram (USD)
    #[arg(long)]
    pub price: String,
    /// Optional notes
    #[arg(long, default_value = "")]
    pub notes: String,
}

impl From<HarvestArgs> for HarvestDraft {
    fn from(args: HarvestArgs) -> Self {
        HarvestDraft {
            harvest_date: args.date,
            boat: args.boat,
            location: args.location,
            weight_kg: args.weight,
            price_per_kg: args.price,
            notes: args.notes,
        }
    }
}

/// Fields of a new investment.
#[derive(ClapArgs, Debug, Clone)]
pub struct InvestArgs {
    /// Investor's full name
    #[arg(long)]
    pub investor: String,
    /// Amount in USD
    #[arg(long)]
    pub amount: String,
    /// Contribution date (YYYY-MM-DD)
    #[arg(long)]
    pub date: String,
    /// Instrument, e.g. "revenue share"
    #[arg(long)]
    pub instrument: String,
    /// Optional notes
    #[arg(long, default_value = "")]
    pub notes: String,
}

impl From<InvestArgs> for InvestmentDraft {
    fn from(args: InvestArgs) -> Self {
        InvestmentDraft {
            investor_name: args.investor,
            amount_usd: args.amount,
            investment_date: args.date,
            instrument: args.instrument,
            notes: args.notes,
        }
    }
}
