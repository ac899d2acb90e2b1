//! Cron text classification — decides which schedule shape a line is.
//!
//! Single lines are matched against the four supported grammars in a fixed
//! order; the first structural match wins, and a bound violation inside the
//! matched branch aborts immediately rather than falling through to a later
//! branch. Multi-line input is only ever a multi-time daily schedule.

use std::collections::BTreeSet;

use cronform_core::{CronField, DayTime, ParseError, ScheduleConfig};

use crate::names::NameTable;
use crate::normalize::normalize_field;
use crate::ranges::expand_list;
use crate::validate::{check_bounds, expand_and_validate};

/// Parse cron text into a structured schedule configuration.
///
/// Accepts a single five-field line, or several newline-separated lines for
/// the multi-time daily form.
pub fn parse(text: &str) -> Result<ScheduleConfig, ParseError> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let result = match lines.as_slice() {
        [] => Err(ParseError::Malformed),
        [line] => parse_single(line),
        many => parse_multi_line(many),
    };
    if let Err(err) = &result {
        tracing::warn!("Rejected cron text {text:?}: {err}");
    }
    result
}

/// Multi-line input: every line must be a plain daily time pattern.
fn parse_multi_line(lines: &[&str]) -> Result<ScheduleConfig, ParseError> {
    let mut times = Vec::new();
    for line in lines {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let [minute, hour, dom, month, weekday] = fields.as_slice() else {
            return Err(ParseError::Malformed);
        };
        if *dom != "*" || *month != "*" || *weekday != "*" {
            return Err(ParseError::MultiLineNotDaily);
        }
        let minutes = expand_and_validate(minute, CronField::Minute)?;
        let hours = expand_and_validate(hour, CronField::Hour)?;
        push_times(&mut times, &hours, &minutes);
    }
    Ok(ScheduleConfig::Daily { times })
}

fn parse_single(line: &str) -> Result<ScheduleConfig, ParseError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [minute, hour, dom, month, weekday] = fields.as_slice() else {
        return Err(ParseError::Malformed);
    };
    let month = normalize_field(month, NameTable::Month);
    let weekday = normalize_field(weekday, NameTable::Weekday);

    // 1. Every N minutes: */N with everything else wild.
    if let Some(step) = minute.strip_prefix("*/") {
        if is_digits(step) && *hour == "*" && *dom == "*" && month == "*" && weekday == "*" {
            let interval: u32 = step.parse().map_err(|_| ParseError::BadInterval)?;
            if !(1..=59).contains(&interval) {
                return Err(ParseError::BadInterval);
            }
            return Ok(ScheduleConfig::Minutes { interval });
        }
    }

    // 2. Daily: minute and hour comma lists, everything else wild. Subsumes
    //    the single-time case.
    if is_digit_list(minute) && is_digit_list(hour) && *dom == "*" && month == "*" && weekday == "*"
    {
        let minutes = expand_and_validate(minute, CronField::Minute)?;
        let hours = expand_and_validate(hour, CronField::Hour)?;
        let mut times = Vec::new();
        push_times(&mut times, &hours, &minutes);
        return Ok(ScheduleConfig::Daily { times });
    }

    // 3. Weekly: single minute/hour, weekday a list of digits 0-6.
    if is_digits(minute) && is_digits(hour) && *dom == "*" && month == "*"
        && is_weekday_list(&weekday)
    {
        let time = parse_time(minute, hour)?;
        let days: BTreeSet<u32> = if weekday == "*" {
            BTreeSet::new()
        } else {
            expand_and_validate(&weekday, CronField::Weekday)?
                .into_iter()
                .collect()
        };
        return Ok(ScheduleConfig::Weekly { time, days });
    }

    // 4. Monthly with explicit months.
    if is_digits(minute) && is_digits(hour) && *dom != "*" && weekday == "*"
        && is_month_list(&month)
    {
        let time = parse_time(minute, hour)?;
        let days = expand_bounded(dom, CronField::DayOfMonth)?;
        let months = expand_bounded(&month, CronField::Month)?;
        return Ok(ScheduleConfig::Monthly { time, days, months });
    }

    // 5. Monthly with a month wildcard: configs saved before month selection
    //    existed default to every month.
    if is_digits(minute) && is_digits(hour) && *dom != "*" && month == "*" && weekday == "*" {
        let time = parse_time(minute, hour)?;
        let days = expand_bounded(dom, CronField::DayOfMonth)?;
        return Ok(ScheduleConfig::Monthly {
            time,
            days,
            months: (1..=12).collect(),
        });
    }

    Err(ParseError::UnsupportedShape)
}

/// Hour-major cross-product, matching the editor's display order.
fn push_times(times: &mut Vec<DayTime>, hours: &[u32], minutes: &[u32]) {
    for &hour in hours {
        for &minute in minutes {
            times.push(DayTime { hour, minute });
        }
    }
}

/// Parse single minute/hour tokens into a time of day, checking bounds.
fn parse_time(minute: &str, hour: &str) -> Result<DayTime, ParseError> {
    let minute = parse_bounded(minute, CronField::Minute)?;
    let hour = parse_bounded(hour, CronField::Hour)?;
    Ok(DayTime { hour, minute })
}

/// Parse one all-digit token and check its field bounds.
fn parse_bounded(token: &str, field: CronField) -> Result<u32, ParseError> {
    let value: u32 = token.parse().map_err(|_| field.out_of_range())?;
    check_bounds(value, field)?;
    Ok(value)
}

/// Expand a day/month list and validate every value against the field.
fn expand_bounded(value: &str, field: CronField) -> Result<BTreeSet<u32>, ParseError> {
    let values = expand_list(value, field)?;
    for &value in &values {
        check_bounds(value, field)?;
    }
    Ok(values.into_iter().collect())
}

fn is_digits(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

/// Digits and commas only — the shape check for daily minute/hour fields.
/// Token-level syntax is verified afterwards by validation.
fn is_digit_list(field: &str) -> bool {
    !field.is_empty() && field.bytes().all(|b| b.is_ascii_digit() || b == b',')
}

/// `*`, or a comma list of single digits 0-6.
fn is_weekday_list(field: &str) -> bool {
    field == "*"
        || field
            .split(',')
            .all(|token| matches!(token.as_bytes(), [b'0'..=b'6']))
}

/// Every comma token is either a 1-2 digit month number in bounds, or a
/// range token (vetted later by the expander).
fn is_month_list(field: &str) -> bool {
    field.split(',').all(|token| {
        token.contains('-')
            || (matches!(token.len(), 1..=2)
                && is_digits(token)
                && token.parse::<u32>().is_ok_and(|v| (1..=12).contains(&v)))
    })
}
