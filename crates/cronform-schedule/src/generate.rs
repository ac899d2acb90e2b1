//! Cron text generation — one pure function per schedule shape.
//!
//! Hours and minutes render without leading zeros (`09:05` becomes `5 9`).
//! A multi-time daily schedule emits one independent line per time; no
//! hour or minute grouping is attempted.

use std::collections::BTreeSet;
use std::fmt;

use cronform_core::{DayTime, GenerateError, ScheduleConfig};
use serde::{Deserialize, Serialize};

use crate::names::NameTable;
use crate::ranges::{format_named, to_range_string};

/// Generated cron text: one expression, or one line per time for the
/// multi-time daily shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CronText {
    Single(String),
    Lines(Vec<String>),
}

impl CronText {
    /// All expressions, in order.
    pub fn lines(&self) -> Vec<&str> {
        match self {
            CronText::Single(line) => vec![line.as_str()],
            CronText::Lines(lines) => lines.iter().map(String::as_str).collect(),
        }
    }
}

impl fmt::Display for CronText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}

fn time_line(time: DayTime) -> String {
    format!("{} {} * * *", time.minute, time.hour)
}

/// `*/N * * * *` — the interval is clamped into 1..=59.
pub fn minutes_expression(interval: u32) -> String {
    format!("*/{} * * * *", interval.clamp(1, 59))
}

/// One `m h * * *` line per time, in input order. An empty list falls back
/// to midnight.
pub fn daily_expression(times: &[DayTime]) -> CronText {
    match times {
        [] => CronText::Single("0 0 * * *".to_string()),
        [time] => CronText::Single(time_line(*time)),
        many => CronText::Lines(many.iter().map(|&t| time_line(t)).collect()),
    }
}

/// `m h * * DAYS` with the weekdays rendered as named ranges.
pub fn weekly_expression(time: DayTime, days: &BTreeSet<u32>) -> Result<String, GenerateError> {
    if days.is_empty() {
        return Err(GenerateError::EmptyWeekdays);
    }
    Ok(format!(
        "{} {} * * {}",
        time.minute,
        time.hour,
        format_named(days, NameTable::Weekday)
    ))
}

/// `m h DAYS MONTHS *` — numeric day-of-month field, named months.
pub fn monthly_expression(
    time: DayTime,
    days: &BTreeSet<u32>,
    months: &BTreeSet<u32>,
) -> Result<String, GenerateError> {
    if days.is_empty() {
        return Err(GenerateError::EmptyDays);
    }
    if months.is_empty() {
        return Err(GenerateError::EmptyMonths);
    }
    Ok(format!(
        "{} {} {} {} *",
        time.minute,
        time.hour,
        to_range_string(days),
        format_named(months, NameTable::Month)
    ))
}

/// Generate canonical cron text for any schedule configuration.
pub fn generate(config: &ScheduleConfig) -> Result<CronText, GenerateError> {
    match config {
        ScheduleConfig::Minutes { interval } => {
            Ok(CronText::Single(minutes_expression(*interval)))
        }
        ScheduleConfig::Daily { times } => Ok(daily_expression(times)),
        ScheduleConfig::Weekly { time, days } => {
            weekly_expression(*time, days).map(CronText::Single)
        }
        ScheduleConfig::Monthly { time, days, months } => {
            monthly_expression(*time, days, months).map(CronText::Single)
        }
    }
}
