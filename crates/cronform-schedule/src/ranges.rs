//! Range compression codec — between integer sets and compact cron fields.
//!
//! The encode direction turns a sorted set into the shortest mix of comma
//! items and `start-end` ranges; the decode direction expands a comma/range
//! list back into explicit values. Name substitution sits on top of the
//! encoder so `{1,2,3}` compresses to `1-3` before becoming `JAN-MAR`.

use std::collections::BTreeSet;

use cronform_core::{CronField, ParseError};

use crate::names::NameTable;

/// A maximal run of consecutive values.
enum Segment {
    /// Three or more consecutive values, rendered `start-end`.
    Run(u32, u32),
    /// One or two values, rendered as comma items.
    Items(Vec<u32>),
}

fn seal(run: Vec<u32>) -> Segment {
    if run.len() >= 3 {
        Segment::Run(run[0], run[run.len() - 1])
    } else {
        Segment::Items(run)
    }
}

fn compress(values: &BTreeSet<u32>) -> Vec<Segment> {
    // Sets of one or two never use range form, regardless of adjacency.
    if values.len() <= 2 {
        return vec![Segment::Items(values.iter().copied().collect())];
    }
    let mut segments = Vec::new();
    let mut run: Vec<u32> = Vec::new();
    for &value in values {
        if run.last().is_some_and(|&last| value != last + 1) {
            segments.push(seal(std::mem::take(&mut run)));
        }
        run.push(value);
    }
    segments.push(seal(run));
    segments
}

fn render(values: &BTreeSet<u32>, display: impl Fn(u32) -> String) -> String {
    if values.is_empty() {
        return "*".to_string();
    }
    compress(values)
        .iter()
        .map(|segment| match segment {
            Segment::Run(start, end) => format!("{}-{}", display(*start), display(*end)),
            Segment::Items(items) => items
                .iter()
                .map(|&v| display(v))
                .collect::<Vec<_>>()
                .join(","),
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// Render a sorted set as a compact numeric cron field. Empty sets render `*`.
pub fn to_range_string(values: &BTreeSet<u32>) -> String {
    render(values, |v| v.to_string())
}

/// Render a sorted set with numeric codes replaced by their 3-letter names.
pub fn format_named(values: &BTreeSet<u32>, table: NameTable) -> String {
    render(values, |v| {
        table
            .name(v)
            .map(str::to_string)
            .unwrap_or_else(|| v.to_string())
    })
}

/// Expand a comma list of numbers and `a-b` ranges into explicit values.
///
/// This is the decode path for day-of-month and month fields — purely
/// numeric, no name handling. Bounds are the caller's concern; malformed or
/// reversed tokens report the field as invalid.
pub fn expand_list(value: &str, field: CronField) -> Result<Vec<u32>, ParseError> {
    let mut out = Vec::new();
    for part in value.split(',') {
        let part = part.trim();
        match part.split_once('-') {
            Some((start, end)) => {
                let a = parse_number(start, field)?;
                let b = parse_number(end, field)?;
                if a > b {
                    return Err(ParseError::InvalidField { field });
                }
                out.extend(a..=b);
            }
            None => out.push(parse_number(part, field)?),
        }
    }
    Ok(out)
}

fn parse_number(token: &str, field: CronField) -> Result<u32, ParseError> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidField { field });
    }
    // All-digit but unrepresentable means out of any field's range.
    token.parse().map_err(|_| field.out_of_range())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(values: &[u32]) -> BTreeSet<u32> {
        values.iter().copied().collect()
    }

    #[test]
    fn test_empty_is_wildcard() {
        assert_eq!(to_range_string(&set(&[])), "*");
        assert_eq!(format_named(&set(&[]), NameTable::Month), "*");
    }

    #[test]
    fn test_two_members_stay_commas() {
        // Adjacent pairs never collapse to a range
        assert_eq!(to_range_string(&set(&[1, 2])), "1,2");
        assert_eq!(to_range_string(&set(&[5])), "5");
    }

    #[test]
    fn test_three_consecutive_compress() {
        assert_eq!(to_range_string(&set(&[1, 2, 3])), "1-3");
    }

    #[test]
    fn test_mixed_runs() {
        assert_eq!(to_range_string(&set(&[1, 2, 3, 5, 7, 8, 9])), "1-3,5,7-9");
        assert_eq!(to_range_string(&set(&[1, 2, 4, 5])), "1,2,4,5");
        assert_eq!(to_range_string(&set(&[1, 2, 3, 4, 30, 31])), "1-4,30,31");
    }

    #[test]
    fn test_named_rendering() {
        assert_eq!(format_named(&set(&[1, 2, 3]), NameTable::Month), "JAN-MAR");
        assert_eq!(format_named(&set(&[1, 12]), NameTable::Month), "JAN,DEC");
        assert_eq!(
            format_named(&set(&[1, 2, 3, 4, 5]), NameTable::Weekday),
            "MON-FRI"
        );
        assert_eq!(format_named(&set(&[0, 6]), NameTable::Weekday), "SUN,SAT");
    }

    #[test]
    fn test_expand_list() {
        assert_eq!(
            expand_list("1-5,10", CronField::DayOfMonth).unwrap(),
            vec![1, 2, 3, 4, 5, 10]
        );
        assert_eq!(expand_list("3", CronField::Month).unwrap(), vec![3]);
        assert_eq!(
            expand_list("1,3-5,7", CronField::DayOfMonth).unwrap(),
            vec![1, 3, 4, 5, 7]
        );
    }

    #[test]
    fn test_expand_list_rejects_malformed() {
        assert_eq!(
            expand_list("5-2", CronField::DayOfMonth),
            Err(ParseError::InvalidField {
                field: CronField::DayOfMonth
            })
        );
        assert!(expand_list("1-x", CronField::Month).is_err());
        assert!(expand_list("", CronField::Month).is_err());
        assert!(expand_list("1,,3", CronField::DayOfMonth).is_err());
    }
}
