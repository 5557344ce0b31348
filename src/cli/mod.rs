mod add;
mod demo;
mod init;
mod show;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use epiweek::config::Config;
use epiweek::{Convention, WeekValue};

#[derive(Parser)]
#[command(
    name = "epiweek",
    version,
    about = "CDC epidemiological and ISO week numbers for calendar dates"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the week of one or more dates.
    Show(show::ShowArgs),
    /// Shift the week of a date by whole weeks.
    Add(add::AddArgs),
    /// Print the week of a fixed set of sample dates.
    Demo,
    /// Write a config file with default settings.
    Init(init::InitArgs),
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Show(args) => show::run(args),
        Command::Add(args) => add::run(args),
        Command::Demo => demo::run(),
        Command::Init(args) => init::run(args),
    }
}

/// Convention and output flags shared by `show` and `add`.
#[derive(Args)]
pub struct OutputArgs {
    #[arg(long, help = "Week convention: cdc or iso")]
    pub convention: Option<String>,

    #[arg(long, conflicts_with = "convention", help = "Shorthand for --convention iso")]
    pub iso: bool,

    #[arg(long, help = "Output as JSON")]
    pub json: bool,
}

impl OutputArgs {
    fn convention(&self, config: &Config) -> Result<Convention> {
        if self.iso {
            return Ok(Convention::Iso);
        }
        match &self.convention {
            Some(c) => c.parse(),
            None => Ok(config.defaults.convention),
        }
    }
}

#[derive(Debug, Serialize)]
struct WeekReport {
    date: NaiveDate,
    convention: Convention,
    year: i32,
    week: u32,
    first_day: NaiveDate,
    last_day: NaiveDate,
}

impl WeekReport {
    fn new(date: NaiveDate, ew: &WeekValue) -> Self {
        let (year, week) = ew.year_week();
        Self {
            date,
            convention: ew.convention(),
            year,
            week,
            first_day: ew.first_day_of_week(),
            last_day: ew.last_day_of_week(),
        }
    }
}

fn print_weeks(rows: &[(NaiveDate, WeekValue)], json: bool) -> Result<()> {
    if json {
        let reports: Vec<WeekReport> = rows
            .iter()
            .map(|(date, ew)| WeekReport::new(*date, ew))
            .collect();
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for (date, ew) in rows {
            println!("{date}: {ew}");
        }
    }
    Ok(())
}
