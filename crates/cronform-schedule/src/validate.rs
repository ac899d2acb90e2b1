//! Field-level validation shared by the parser branches.

use cronform_core::{CronField, ParseError};

/// Expand a comma list of digit tokens, checking syntax and bounds.
///
/// The first failing token aborts: a non-digit token reports
/// `Invalid {Label}`, an out-of-bounds value reports the field's range.
pub fn expand_and_validate(value: &str, field: CronField) -> Result<Vec<u32>, ParseError> {
    let mut out = Vec::new();
    for token in value.split(',') {
        let token = token.trim();
        if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidField { field });
        }
        let n: u32 = token.parse().map_err(|_| field.out_of_range())?;
        check_bounds(n, field)?;
        out.push(n);
    }
    Ok(out)
}

/// Check a single already-parsed value against its field bounds.
pub fn check_bounds(value: u32, field: CronField) -> Result<(), ParseError> {
    let (min, max) = field.bounds();
    if value < min || value > max {
        return Err(field.out_of_range());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_lists() {
        assert_eq!(
            expand_and_validate("0,30", CronField::Minute).unwrap(),
            vec![0, 30]
        );
        assert_eq!(expand_and_validate("9", CronField::Hour).unwrap(), vec![9]);
        assert_eq!(
            expand_and_validate("0, 15, 45", CronField::Minute).unwrap(),
            vec![0, 15, 45]
        );
    }

    #[test]
    fn test_non_digit_token() {
        let err = expand_and_validate("abc", CronField::Minute).unwrap_err();
        assert_eq!(err.to_string(), "Invalid Minute");
        let err = expand_and_validate("*/5", CronField::Minute).unwrap_err();
        assert_eq!(err.to_string(), "Invalid Minute");
        let err = expand_and_validate("1,,2", CronField::Hour).unwrap_err();
        assert_eq!(err.to_string(), "Invalid Hour");
    }

    #[test]
    fn test_out_of_bounds() {
        let err = expand_and_validate("61", CronField::Minute).unwrap_err();
        assert_eq!(err.to_string(), "Minute must be between 0 and 59");
        let err = expand_and_validate("0,24", CronField::Hour).unwrap_err();
        assert_eq!(err.to_string(), "Hour must be between 0 and 23");
        let err = expand_and_validate("7", CronField::Weekday).unwrap_err();
        assert_eq!(err.to_string(), "Weekday must be between 0 and 6");
    }

    #[test]
    fn test_first_failure_wins() {
        // The non-digit token comes first, so the syntax error is reported
        let err = expand_and_validate("x,61", CronField::Minute).unwrap_err();
        assert_eq!(err.to_string(), "Invalid Minute");
        let err = expand_and_validate("61,x", CronField::Minute).unwrap_err();
        assert_eq!(err.to_string(), "Minute must be between 0 and 59");
    }
}
