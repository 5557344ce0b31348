//! CDC epidemiological weeks and ISO 8601 weeks.
//!
//! A [`WeekValue`] stores the rule-day of its week (Wednesday for CDC,
//! Thursday for ISO). The calendar year of that day is the week-year, and its
//! day of year gives the week number directly.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone, Utc, Weekday};
use serde::{Deserialize, Serialize};

pub const DAYS_IN_WEEK: i64 = 7;

/// Days between a week's first day and its rule-day.
const RULE_DAY_OFFSET: i64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Convention {
    /// Sunday to Saturday, week-year decided by Wednesday.
    Cdc,
    /// Monday to Sunday, week-year decided by Thursday.
    Iso,
}

impl Convention {
    pub const ALL: [Convention; 2] = [Convention::Cdc, Convention::Iso];

    pub fn rule_day(&self) -> Weekday {
        match self {
            Convention::Cdc => Weekday::Wed,
            Convention::Iso => Weekday::Thu,
        }
    }

    pub fn week_start(&self) -> Weekday {
        match self {
            Convention::Cdc => Weekday::Sun,
            Convention::Iso => Weekday::Mon,
        }
    }
}

impl FromStr for Convention {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cdc" | "epi" => Ok(Convention::Cdc),
            "iso" => Ok(Convention::Iso),
            _ => Err(anyhow::anyhow!(
                "Invalid convention '{}'. Valid conventions: cdc, iso",
                s
            )),
        }
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Convention::Cdc => write!(f, "cdc"),
            Convention::Iso => write!(f, "iso"),
        }
    }
}

/// Signed number of days from `date` to `weekday` inside the same
/// Sunday-based week. Ranges over -6..=6.
pub fn days_from_day(date: NaiveDate, weekday: Weekday) -> i64 {
    weekday.num_days_from_sunday() as i64 - date.weekday().num_days_from_sunday() as i64
}

/// A week under one of the two conventions, identified by its rule-day.
///
/// Every date of a week maps to the same value, so equality and hashing
/// compare weeks rather than dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekValue {
    anchor: NaiveDate,
    convention: Convention,
}

impl WeekValue {
    /// The CDC epiweek containing `date`.
    ///
    /// # Panics
    ///
    /// Panics if the week's Wednesday lies outside chrono's supported range.
    pub fn from_date_cdc(date: NaiveDate) -> Self {
        let offset = days_from_day(date, Weekday::Wed);
        Self {
            anchor: date + Duration::days(offset),
            convention: Convention::Cdc,
        }
    }

    /// The ISO 8601 week containing `date`.
    ///
    /// # Panics
    ///
    /// Panics if the week's Thursday lies outside chrono's supported range.
    pub fn from_date_iso(date: NaiveDate) -> Self {
        let mut offset = days_from_day(date, Weekday::Thu);
        // Only a Sunday yields +4; it closes the week whose Thursday was 3 days earlier.
        if offset == 4 {
            offset = -3;
        }
        Self {
            anchor: date + Duration::days(offset),
            convention: Convention::Iso,
        }
    }

    pub fn from_date(date: NaiveDate, convention: Convention) -> Self {
        match convention {
            Convention::Cdc => Self::from_date_cdc(date),
            Convention::Iso => Self::from_date_iso(date),
        }
    }

    /// Like [`WeekValue::from_date`], but returns `None` when any day of the
    /// week falls outside chrono's supported range.
    pub fn checked_from_date(date: NaiveDate, convention: Convention) -> Option<Self> {
        let mut offset = days_from_day(date, convention.rule_day());
        if convention == Convention::Iso && offset == 4 {
            offset = -3;
        }
        let anchor = date.checked_add_signed(Duration::days(offset))?;
        Self::checked_new(anchor, convention)
    }

    fn checked_new(anchor: NaiveDate, convention: Convention) -> Option<Self> {
        let span = Duration::days(RULE_DAY_OFFSET);
        anchor.checked_sub_signed(span)?;
        anchor.checked_add_signed(span)?;
        Some(Self { anchor, convention })
    }

    /// Week containing the UTC civil date of `datetime`. Time of day and the
    /// original offset are discarded.
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>, convention: Convention) -> Self {
        Self::from_date(datetime.with_timezone(&Utc).date_naive(), convention)
    }

    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    pub fn convention(&self) -> Convention {
        self.convention
    }

    /// Week-year and week number (1..=53).
    ///
    /// Early January dates can report the previous year's last week and late
    /// December dates the next year's week 1.
    pub fn year_week(&self) -> (i32, u32) {
        (self.anchor.year(), self.anchor.ordinal0() / 7 + 1)
    }

    /// Sunday for CDC weeks, Monday for ISO weeks.
    pub fn first_day_of_week(&self) -> NaiveDate {
        self.anchor - Duration::days(RULE_DAY_OFFSET)
    }

    /// Saturday for CDC weeks, Sunday for ISO weeks.
    pub fn last_day_of_week(&self) -> NaiveDate {
        self.anchor + Duration::days(RULE_DAY_OFFSET)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.first_day_of_week() <= date && date <= self.last_day_of_week()
    }

    /// Shifts by whole weeks, negative values move backwards.
    ///
    /// # Panics
    ///
    /// Panics if the result lies outside chrono's supported range; use
    /// [`WeekValue::checked_add`] to handle that case.
    #[allow(clippy::should_implement_trait)]
    pub fn add(&self, weeks: i64) -> Self {
        Self {
            anchor: self.anchor + Duration::days(DAYS_IN_WEEK * weeks),
            convention: self.convention,
        }
    }

    pub fn checked_add(&self, weeks: i64) -> Option<Self> {
        let days = DAYS_IN_WEEK.checked_mul(weeks)?;
        let anchor = self.anchor.checked_add_signed(Duration::try_days(days)?)?;
        Self::checked_new(anchor, self.convention)
    }

    pub fn format(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for WeekValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (year, week) = self.year_week();
        write!(f, "Year [{year}], Week [{week}]")
    }
}
