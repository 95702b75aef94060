mod cli;
mod logging;

use std::process;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use serde::Serialize;

use holidayjp::astronomy::equinox::{equinox_date, Equinox};
use holidayjp::configuration::Configuration;
use holidayjp::holiday::Holiday;
use holidayjp::time::calendar::holidaycalendar::HolidayCalendar;
use holidayjp::time::rangeofdates::RangeOfDates;

use crate::cli::{Cli, Command};

#[derive(Serialize)]
struct DateAnswer {
    date: NaiveDate,
    found: bool,
    holiday: Option<Holiday>,
    business_day: bool,
}

#[derive(Serialize)]
struct EquinoxAnswer {
    year: i32,
    vernal: NaiveDate,
    autumnal: NaiveDate,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn load_configuration(cli: &Cli) -> Result<Configuration> {
    match &cli.config {
        Some(path) => Configuration::from_reader(path)
            .with_context(|| format!("failed to read config file: {}", path.display())),
        None => Ok(Configuration::default()),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize answer")?;
    println!("{json}");
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let configuration = load_configuration(&cli)?;
    let build_calendar = || {
        configuration
            .build_calendar()
            .context("failed to build holiday calendar")
    };

    match cli.command {
        Command::Date { date } => {
            let calendar = build_calendar()?;
            let holiday = calendar.find_holiday(date)?;
            let answer = DateAnswer {
                date,
                found: holiday.is_some(),
                business_day: calendar.is_business_day(date)?,
                holiday,
            };
            print_json(&answer)
        }
        Command::Month { year, month } => print_json(&build_calendar()?.holidays_in_month(year, month)?),
        Command::Year { year } => print_json(&build_calendar()?.holidays_in_year(year)?),
        Command::Range { from, to } => {
            print_json(&build_calendar()?.holidays_between(&RangeOfDates::new(from, to))?)
        }
        Command::Equinox { year } => {
            let tz = configuration.time_zone()?;
            let answer = EquinoxAnswer {
                year,
                vernal: equinox_date(year, Equinox::Vernal, &tz)?,
                autumnal: equinox_date(year, Equinox::Autumnal, &tz)?,
            };
            print_json(&answer)
        }
    }
}
