use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use epiweek::config::Config;
use epiweek::input;
use epiweek::WeekValue;

use super::OutputArgs;

#[derive(Args)]
pub struct ShowArgs {
    #[arg(
        allow_hyphen_values = true,
        help = "Dates as YYYY-MM-DD, RFC 3339 timestamps or 'today'"
    )]
    pub dates: Vec<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn run(args: ShowArgs) -> Result<()> {
    let config = Config::load()?;
    let convention = args.output.convention(&config)?;
    let json = args.output.json || config.defaults.json;

    let dates = if args.dates.is_empty() {
        vec![input::today()]
    } else {
        args.dates
            .iter()
            .map(|d| input::parse_date(d).with_context(|| format!("Cannot show week of '{d}'")))
            .collect::<Result<Vec<_>>>()?
    };
    debug!(%convention, count = dates.len(), "showing weeks");

    let rows = dates
        .into_iter()
        .map(|date| {
            WeekValue::checked_from_date(date, convention)
                .map(|ew| (date, ew))
                .with_context(|| format!("The {convention} week of {date} is out of range"))
        })
        .collect::<Result<Vec<_>>>()?;
    super::print_weeks(&rows, json)
}
