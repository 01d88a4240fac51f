//! Timelines, weekday/month activity maps and heatmaps.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::Serialize;

use crate::chatlog::ChatLog;
use crate::core::filter::ViewFilter;
use crate::core::ranking::{Counter, Ranked};
use crate::enrich::{WEEKDAY_NAMES, hour_bucket, weekday_index};

/// Messages in one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyPoint {
    pub year: i32,
    pub month_num: u32,
    /// `"{MonthName}-{year}"`, e.g. `"February-2024"`.
    pub label: String,
    pub messages: usize,
}

/// Messages on one calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyPoint {
    pub date: NaiveDate,
    pub messages: usize,
}

/// A weekday-by-column count matrix.
///
/// Rows are the weekdays present in the view, Monday first; columns are the
/// column keys present, in hour order. Missing combinations are zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Heatmap {
    pub rows: Vec<String>,
    pub columns: Vec<String>,
    pub cells: Vec<Vec<usize>>,
}

impl Heatmap {
    /// Count at `(row, column)` by label, zero if either is absent.
    pub fn get(&self, row: &str, column: &str) -> usize {
        let r = self.rows.iter().position(|x| x == row);
        let c = self.columns.iter().position(|x| x == column);
        match (r, c) {
            (Some(r), Some(c)) => self.cells[r][c],
            _ => 0,
        }
    }

    /// Sum of every cell.
    pub fn total(&self) -> usize {
        self.cells.iter().flatten().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Message counts per month, oldest first.
pub fn monthly_timeline(log: &ChatLog, filter: &ViewFilter) -> Vec<MonthlyPoint> {
    let mut months: BTreeMap<(i32, u32), (&'static str, usize)> = BTreeMap::new();
    for msg in log.view(filter) {
        let entry = months
            .entry((msg.time.year, msg.time.month_num))
            .or_insert((msg.time.month, 0));
        entry.1 += 1;
    }

    months
        .into_iter()
        .map(|((year, month_num), (name, messages))| MonthlyPoint {
            year,
            month_num,
            label: format!("{name}-{year}"),
            messages,
        })
        .collect()
}

/// Message counts per calendar date, oldest first. Dates without messages
/// are absent.
pub fn daily_timeline(log: &ChatLog, filter: &ViewFilter) -> Vec<DailyPoint> {
    log.group_by_day(filter)
        .into_iter()
        .map(|(date, msgs)| DailyPoint {
            date,
            messages: msgs.len(),
        })
        .collect()
}

/// Message counts per weekday name, busiest first.
pub fn week_activity_map(log: &ChatLog, filter: &ViewFilter) -> Vec<Ranked<String>> {
    log.view(filter)
        .map(|m| m.time.day_name.to_string())
        .collect::<Counter<String>>()
        .ranked()
}

/// Message counts per month name, busiest first.
pub fn month_activity_map(log: &ChatLog, filter: &ViewFilter) -> Vec<Ranked<String>> {
    log.view(filter)
        .map(|m| m.time.month.to_string())
        .collect::<Counter<String>>()
        .ranked()
}

/// Weekday by hour-bucket label (`"00-1"` .. `"23-00"`).
pub fn activity_heatmap(log: &ChatLog, filter: &ViewFilter) -> Heatmap {
    weekday_by_hour(log, filter, hour_bucket)
}

/// Weekday by hour of day (`"0"` .. `"23"`).
pub fn hourly_heatmap(log: &ChatLog, filter: &ViewFilter) -> Heatmap {
    weekday_by_hour(log, filter, |h| h.to_string())
}

fn weekday_by_hour(log: &ChatLog, filter: &ViewFilter, label: impl Fn(u32) -> String) -> Heatmap {
    let mut counts: BTreeMap<(usize, u32), usize> = BTreeMap::new();
    let mut days = BTreeSet::new();
    let mut hours = BTreeSet::new();

    for msg in log.view(filter) {
        let day = weekday_index(msg.time.day_name).unwrap_or_default();
        days.insert(day);
        hours.insert(msg.time.hour);
        *counts.entry((day, msg.time.hour)).or_default() += 1;
    }

    let cells = days
        .iter()
        .map(|&d| {
            hours
                .iter()
                .map(|&h| counts.get(&(d, h)).copied().unwrap_or(0))
                .collect()
        })
        .collect();

    Heatmap {
        rows: days.iter().map(|&d| WEEKDAY_NAMES[d].to_string()).collect(),
        columns: hours.iter().map(|&h| label(h)).collect(),
        cells,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::TranscriptParser;

    // 1/2/24 is Thursday 1 February 2024, 5/2/24 is Monday 5 February
    const CHAT: &str = "\
30/1/24, 11:15 PM - Alice: late night
1/2/24, 12:10 AM - Bob: still up
1/2/24, 9:00 AM - Alice: morning
1/2/24, 9:30 AM - Bob: hey
5/2/24, 11:45 PM - Alice: monday blues";

    fn log() -> ChatLog {
        TranscriptParser::new().parse_str(CHAT).unwrap()
    }

    #[test]
    fn test_monthly_timeline() {
        let timeline = monthly_timeline(&log(), &ViewFilter::overall());
        assert_eq!(timeline.len(), 2);
        assert_eq!(timeline[0].label, "January-2024");
        assert_eq!(timeline[0].messages, 1);
        assert_eq!(timeline[1].label, "February-2024");
        assert_eq!(timeline[1].messages, 4);
    }

    #[test]
    fn test_daily_timeline() {
        let timeline = daily_timeline(&log(), &ViewFilter::overall());
        let counts: Vec<usize> = timeline.iter().map(|p| p.messages).collect();
        assert_eq!(counts, vec![1, 3, 1]);
        assert_eq!(timeline[1].date, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
    }

    #[test]
    fn test_activity_maps() {
        let week = week_activity_map(&log(), &ViewFilter::overall());
        assert_eq!(week[0].key, "Thursday");
        assert_eq!(week[0].count, 3);

        let months = month_activity_map(&log(), &ViewFilter::for_selection("Alice"));
        assert_eq!(months[0].key, "February");
        assert_eq!(months[0].count, 2);
        assert_eq!(months[1].key, "January");
    }

    #[test]
    fn test_activity_heatmap_labels() {
        let heatmap = activity_heatmap(&log(), &ViewFilter::overall());
        assert_eq!(heatmap.rows, vec!["Monday", "Tuesday", "Thursday"]);
        assert_eq!(heatmap.columns, vec!["00-1", "9-10", "23-00"]);
        assert_eq!(heatmap.get("Thursday", "9-10"), 2);
        assert_eq!(heatmap.get("Thursday", "00-1"), 1);
        assert_eq!(heatmap.get("Monday", "23-00"), 1);
        assert_eq!(heatmap.get("Monday", "9-10"), 0);
        assert_eq!(heatmap.total(), 5);
    }

    #[test]
    fn test_hourly_heatmap() {
        let heatmap = hourly_heatmap(&log(), &ViewFilter::overall());
        assert_eq!(heatmap.columns, vec!["0", "9", "23"]);
        assert_eq!(heatmap.get("Tuesday", "23"), 1);
    }

    #[test]
    fn test_empty_view() {
        let filter = ViewFilter::for_selection("Nobody");
        assert!(monthly_timeline(&log(), &filter).is_empty());
        assert!(activity_heatmap(&log(), &filter).is_empty());
        assert_eq!(activity_heatmap(&log(), &filter).total(), 0);
    }
}
