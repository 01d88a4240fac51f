//! Calendar and time-bucket fields derived from a message timestamp.
//!
//! Every field here is a pure function of the timestamp, so enriching the
//! same message twice always yields identical values.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};
use serde::Serialize;

/// Month names indexed by `month_num - 1`.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Weekday names, Monday first.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Derived calendar fields for a single message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeFields {
    /// Calendar date without the time of day.
    pub date: NaiveDate,
    pub year: i32,
    /// Month number, 1-12.
    pub month_num: u32,
    /// English month name, e.g. `"February"`.
    pub month: &'static str,
    /// Day of month, 1-31.
    pub day: u32,
    /// English weekday name, e.g. `"Thursday"`.
    pub day_name: &'static str,
    /// Hour of day, 0-23.
    pub hour: u32,
    /// One-hour bucket label, see [`hour_bucket`].
    pub period: String,
}

impl TimeFields {
    /// Computes all derived fields for `timestamp`.
    pub fn from_timestamp(timestamp: NaiveDateTime) -> Self {
        let date = timestamp.date();
        let hour = timestamp.hour();
        Self {
            date,
            year: date.year(),
            month_num: date.month(),
            month: month_name(date.month()),
            day: date.day(),
            day_name: weekday_name(date.weekday()),
            hour,
            period: hour_bucket(hour),
        }
    }

    /// `year-month` key used to group messages by calendar month.
    pub fn month_key(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month_num)
    }
}

/// Labels the one-hour span starting at `hour`.
///
/// Heatmaps key on these labels, so the two wraparound cases are fixed:
/// midnight is `"00-1"` and the last hour of the day is `"23-00"`.
///
/// ```
/// use chatstat::enrich::hour_bucket;
///
/// assert_eq!(hour_bucket(0), "00-1");
/// assert_eq!(hour_bucket(12), "12-13");
/// assert_eq!(hour_bucket(23), "23-00");
/// ```
pub fn hour_bucket(hour: u32) -> String {
    match hour {
        0 => "00-1".to_string(),
        23 => "23-00".to_string(),
        h => format!("{}-{}", h, h + 1),
    }
}

/// English name of a 1-based month number.
///
/// Out-of-range values clamp into January..December.
pub fn month_name(month_num: u32) -> &'static str {
    let idx = month_num.clamp(1, 12) as usize - 1;
    MONTH_NAMES[idx]
}

/// English name of a weekday.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    WEEKDAY_NAMES[weekday.num_days_from_monday() as usize]
}

/// Position of a weekday name in Monday-first order, if it is one.
pub fn weekday_index(name: &str) -> Option<usize> {
    WEEKDAY_NAMES.iter().position(|&d| d == name)
}
