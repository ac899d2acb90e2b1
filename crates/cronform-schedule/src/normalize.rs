//! Field normalization — expands named tokens before classification.
//!
//! The weekday and month fields of a cron line may carry 3-letter names
//! (`MON`, `JAN`), name ranges (`MON-FRI`), and digit ranges (`2-4`). The
//! classifier only understands explicit numeric comma lists, so this pass
//! rewrites each comma-separated token:
//!
//! 1. range tokens whose endpoints resolve (name or digit) and fit the
//!    field's bounds become the inclusive comma list of codes;
//! 2. bare names become their numeric code.
//!
//! Anything unresolvable — unknown names, reversed ranges, out-of-bounds
//! ranges — passes through untouched and is rejected downstream.

use crate::names::NameTable;

/// A classified token of a weekday/month cron field.
enum Token<'a> {
    /// `A-B` with exactly one interior dash.
    Range(&'a str, &'a str),
    /// Anything else: a name, a number, a wildcard, or junk.
    Plain(&'a str),
}

fn classify(token: &str) -> Token<'_> {
    if let Some((start, end)) = token.split_once('-') {
        if !start.is_empty() && !end.is_empty() && !end.contains('-') {
            return Token::Range(start, end);
        }
    }
    Token::Plain(token)
}

/// Resolve a range endpoint: a known 3-letter name or a plain number.
fn resolve(endpoint: &str, table: NameTable) -> Option<u32> {
    table.code(endpoint).or_else(|| {
        endpoint
            .bytes()
            .all(|b| b.is_ascii_digit())
            .then(|| endpoint.parse().ok())
            .flatten()
    })
}

fn rewrite(token: &str, table: NameTable) -> String {
    match classify(token) {
        Token::Range(start, end) => {
            let (lo, hi) = table.digit_bounds();
            match (resolve(start, table), resolve(end, table)) {
                (Some(a), Some(b)) if a <= b && a >= lo && b <= hi => (a..=b)
                    .map(|v| v.to_string())
                    .collect::<Vec<_>>()
                    .join(","),
                _ => token.to_string(),
            }
        }
        Token::Plain(plain) => match table.code(plain) {
            Some(code) => code.to_string(),
            None => plain.to_string(),
        },
    }
}

/// Expand names and in-bounds ranges in a weekday/month field into explicit
/// numeric comma lists. Tokens that cannot be fully resolved are left as-is.
pub fn normalize_field(field: &str, table: NameTable) -> String {
    field
        .split(',')
        .map(|token| rewrite(token, table))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_name_range() {
        assert_eq!(
            normalize_field("MON-FRI", NameTable::Weekday),
            "1,2,3,4,5"
        );
        assert_eq!(normalize_field("SUN-SAT", NameTable::Weekday), "0,1,2,3,4,5,6");
    }

    #[test]
    fn test_month_name_range() {
        assert_eq!(normalize_field("JAN-MAR", NameTable::Month), "1,2,3");
        assert_eq!(
            normalize_field("OCT-DEC", NameTable::Month),
            "10,11,12"
        );
    }

    #[test]
    fn test_bare_names() {
        assert_eq!(normalize_field("SUN,SAT", NameTable::Weekday), "0,6");
        assert_eq!(normalize_field("JAN,JUL", NameTable::Month), "1,7");
    }

    #[test]
    fn test_digit_range_in_bounds() {
        assert_eq!(normalize_field("2-4", NameTable::Weekday), "2,3,4");
        assert_eq!(normalize_field("1-12", NameTable::Month), "1,2,3,4,5,6,7,8,9,10,11,12");
    }

    #[test]
    fn test_digit_range_out_of_bounds_untouched() {
        assert_eq!(normalize_field("7-9", NameTable::Weekday), "7-9");
        assert_eq!(normalize_field("13-20", NameTable::Month), "13-20");
        // Month codes start at 1
        assert_eq!(normalize_field("0-3", NameTable::Month), "0-3");
    }

    #[test]
    fn test_mixed_name_digit_range() {
        assert_eq!(normalize_field("MON-5", NameTable::Weekday), "1,2,3,4,5");
        assert_eq!(normalize_field("2-MAY", NameTable::Month), "2,3,4,5");
    }

    #[test]
    fn test_unresolvable_tokens_untouched() {
        assert_eq!(normalize_field("FRI-MON", NameTable::Weekday), "FRI-MON");
        assert_eq!(normalize_field("XYZ", NameTable::Weekday), "XYZ");
        assert_eq!(normalize_field("*", NameTable::Month), "*");
        assert_eq!(normalize_field("1-2-3", NameTable::Weekday), "1-2-3");
    }

    #[test]
    fn test_mixed_list() {
        assert_eq!(
            normalize_field("MON,WED-FRI,0", NameTable::Weekday),
            "1,3,4,5,0"
        );
    }
}
