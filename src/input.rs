use anyhow::{bail, Result};
use chrono::{DateTime, NaiveDate, Utc};
use tracing::debug;

/// Parses a date given on the command line into a UTC civil date.
///
/// Accepts `today`, `YYYY-MM-DD`, or an RFC 3339 timestamp. Timestamps are
/// converted to UTC before the time of day is dropped.
pub fn parse_date(text: &str) -> Result<NaiveDate> {
    let text = text.trim();
    if text.eq_ignore_ascii_case("today") {
        return Ok(today());
    }

    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Ok(date);
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(text) {
        let date = datetime.with_timezone(&Utc).date_naive();
        debug!(input = text, %date, "normalized timestamp to UTC date");
        return Ok(date);
    }

    bail!("Invalid date '{text}'. Expected YYYY-MM-DD, an RFC 3339 timestamp, or 'today'")
}

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}
