use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Japanese national holiday lookup.
#[derive(Parser)]
#[command(name = "holidayjp", version, about = "Japanese national holiday lookup")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// JSON configuration file; the embedded data is used without one.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Look up a single day.
    Date {
        /// YYYY-MM-DD
        date: NaiveDate,
    },
    /// List the holidays of one month.
    Month { year: i32, month: u32 },
    /// List the holidays of one year.
    Year { year: i32 },
    /// List the holidays between two days, both included.
    Range { from: NaiveDate, to: NaiveDate },
    /// Compute both equinox days of a year.
    Equinox { year: i32 },
}
