//! Command-line arguments.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "popcoin")]
#[command(about = "Command-line client for the Popcoin credits API", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API token (overrides POPCOIN_TOKEN and the secrets file)
    #[arg(long, value_name = "TOKEN", global = true)]
    pub token: Option<String>,

    /// API root (overrides POPCOIN_BASE_URL)
    #[arg(long, value_name = "URL", global = true)]
    pub base_url: Option<String>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Show the account owning the token
    Ping,

    /// Create or update a user
    Identify {
        /// Caller-defined user id
        user: String,
        /// User email
        email: String,
    },

    /// Show a user's balances
    User {
        /// Caller-defined user id
        user: String,
    },

    /// Spend credits from a user account
    Spend {
        /// Caller-defined user id
        user: String,
        /// Credits to spend
        amount: f64,
        /// What the credits were spent on
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// List a user's spends in a date range (inclusive)
    Spends {
        /// Caller-defined user id
        user: String,
        /// First day, YYYY-MM-DD
        #[arg(long, value_name = "DATE")]
        from: NaiveDate,
        /// Last day, YYYY-MM-DD
        #[arg(long, value_name = "DATE")]
        to: NaiveDate,
    },
}
