use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use epiweek::config::Config;
use epiweek::input;
use epiweek::WeekValue;

use super::OutputArgs;

#[derive(Args)]
pub struct AddArgs {
    #[arg(long, allow_hyphen_values = true, help = "Number of weeks to add (may be negative)")]
    pub weeks: i64,

    #[arg(
        long,
        allow_hyphen_values = true,
        help = "Starting date (YYYY-MM-DD), defaults to today"
    )]
    pub date: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn run(args: AddArgs) -> Result<()> {
    let config = Config::load()?;
    let convention = args.output.convention(&config)?;
    let json = args.output.json || config.defaults.json;

    let date = match &args.date {
        Some(d) => input::parse_date(d)?,
        None => input::today(),
    };

    let start = WeekValue::checked_from_date(date, convention)
        .with_context(|| format!("The {convention} week of {date} is out of range"))?;
    let shifted = start
        .checked_add(args.weeks)
        .with_context(|| format!("Adding {} weeks to {date} is out of range", args.weeks))?;
    debug!(%date, weeks = args.weeks, from = %start, to = %shifted, "shifted week");

    super::print_weeks(&[(date, shifted)], json)
}
