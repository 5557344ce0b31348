//! CDC epidemiological week and ISO 8601 week numbers for calendar dates.
//!
//! ```
//! use chrono::NaiveDate;
//! use epiweek::WeekValue;
//!
//! let date = NaiveDate::from_ymd_opt(1998, 1, 1).unwrap();
//! assert_eq!(WeekValue::from_date_cdc(date).year_week(), (1997, 53));
//! assert_eq!(WeekValue::from_date_iso(date).to_string(), "Year [1998], Week [1]");
//! ```

pub mod config;
pub mod input;
pub mod logging;
pub mod week;

pub use week::{days_from_day, Convention, WeekValue, DAYS_IN_WEEK};
