//! Next-occurrence preview — when would a schedule fire?
//!
//! A minute-resolution forward scan over UTC time. Purely a function of its
//! inputs; nothing here schedules or executes anything. The scan is bounded
//! at 366 days so an impossible selection (February 30th only) terminates.

use chrono::{DateTime, Datelike, Duration, Timelike, Utc};
use cronform_core::ScheduleConfig;

const SCAN_LIMIT_MINUTES: i64 = 366 * 24 * 60;

/// The first instant strictly after `after` at which the schedule fires,
/// truncated to whole minutes.
pub fn next_occurrence(config: &ScheduleConfig, after: DateTime<Utc>) -> Option<DateTime<Utc>> {
    if !has_selection(config) {
        return None;
    }
    let mut candidate = (after + Duration::minutes(1))
        .with_second(0)?
        .with_nanosecond(0)?;
    for _ in 0..SCAN_LIMIT_MINUTES {
        if fires_at(config, candidate) {
            return Some(candidate);
        }
        candidate += Duration::minutes(1);
    }
    None
}

/// The next `count` occurrences strictly after `after`.
pub fn upcoming(config: &ScheduleConfig, after: DateTime<Utc>, count: usize) -> Vec<DateTime<Utc>> {
    let mut out = Vec::with_capacity(count);
    let mut cursor = after;
    while out.len() < count {
        match next_occurrence(config, cursor) {
            Some(instant) => {
                cursor = instant;
                out.push(instant);
            }
            None => break,
        }
    }
    out
}

/// Empty weekly/monthly selections never fire; skip the scan entirely.
fn has_selection(config: &ScheduleConfig) -> bool {
    match config {
        ScheduleConfig::Weekly { days, .. } => !days.is_empty(),
        ScheduleConfig::Monthly { days, months, .. } => !days.is_empty() && !months.is_empty(),
        _ => true,
    }
}

fn fires_at(config: &ScheduleConfig, at: DateTime<Utc>) -> bool {
    let (minute, hour) = (at.minute(), at.hour());
    match config {
        ScheduleConfig::Minutes { interval } => minute % (*interval).clamp(1, 59) == 0,
        ScheduleConfig::Daily { times } => times
            .iter()
            .any(|t| t.hour == hour && t.minute == minute),
        ScheduleConfig::Weekly { time, days } => {
            time.hour == hour
                && time.minute == minute
                && days.contains(&at.weekday().num_days_from_sunday())
        }
        ScheduleConfig::Monthly { time, days, months } => {
            time.hour == hour
                && time.minute == minute
                && days.contains(&at.day())
                && months.contains(&at.month())
        }
    }
}
