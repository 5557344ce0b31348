use anyhow::{Context, Result};
use chrono::NaiveDate;

use epiweek::WeekValue;

const SAMPLE_DATES: [(i32, u32, u32); 9] = [
    (2019, 12, 31),
    (2020, 10, 15),
    (2020, 10, 16),
    (2020, 10, 17),
    (2020, 10, 18),
    (2020, 10, 19),
    (2020, 10, 20),
    (2020, 10, 21),
    (2020, 10, 22),
];

pub fn run() -> Result<()> {
    for (y, m, d) in SAMPLE_DATES {
        let date = NaiveDate::from_ymd_opt(y, m, d)
            .with_context(|| format!("Invalid sample date {y}-{m}-{d}"))?;
        println!("Epiweek: {}", WeekValue::from_date_cdc(date));
    }
    Ok(())
}
