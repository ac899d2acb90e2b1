//! Error types — every failure is returned as data, never thrown.
//!
//! The parser reports the first error it hits and stops; there is no
//! multi-field aggregation. Callers keep their last valid configuration and
//! surface the message verbatim.

use thiserror::Error;

/// Convenient alias for parse results.
pub type Result<T, E = ParseError> = std::result::Result<T, E>;

/// The five fields of a cron line, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CronField {
    Minute,
    Hour,
    DayOfMonth,
    Month,
    Weekday,
}

impl CronField {
    /// Display label used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            CronField::Minute => "Minute",
            CronField::Hour => "Hour",
            CronField::DayOfMonth => "Day of month",
            CronField::Month => "Month",
            CronField::Weekday => "Weekday",
        }
    }

    /// Inclusive value bounds for the field.
    pub fn bounds(self) -> (u32, u32) {
        match self {
            CronField::Minute => (0, 59),
            CronField::Hour => (0, 23),
            CronField::DayOfMonth => (1, 31),
            CronField::Month => (1, 12),
            CronField::Weekday => (0, 6),
        }
    }

    /// Build the out-of-range error for this field.
    pub fn out_of_range(self) -> ParseError {
        let (min, max) = self.bounds();
        ParseError::OutOfRange {
            field: self,
            min,
            max,
        }
    }
}

/// Errors produced while parsing cron text into a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Wrong field count, or no usable input at all.
    #[error("Invalid CRON expression")]
    Malformed,
    /// Multi-line input containing anything other than plain daily times.
    #[error("Only daily multi-time supported for multi-line")]
    MultiLineNotDaily,
    /// A token that should be a number is not one.
    #[error("Invalid {}", .field.label())]
    InvalidField { field: CronField },
    /// A numeric token outside its field's bounds.
    #[error("{} must be between {min} and {max}", .field.label())]
    OutOfRange {
        field: CronField,
        min: u32,
        max: u32,
    },
    /// `*/N` step outside the supported interval.
    #[error("Minutes interval must be between 1 and 59")]
    BadInterval,
    /// Five well-formed fields that match none of the supported shapes.
    #[error(
        "This CRON expression is not supported by the editor. Supported types: \
         every X minutes (*/N * * * *), daily (m h * * *), weekly (m h * * w[,w...]), \
         monthly (m h d[,d...] * *)."
    )]
    UnsupportedShape,
}

/// Errors produced while generating cron text from a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// A weekly schedule needs at least one selected weekday.
    #[error("weekly schedule requires at least one selected weekday")]
    EmptyWeekdays,
    /// A monthly schedule needs at least one selected day.
    #[error("monthly schedule requires at least one selected day")]
    EmptyDays,
    /// A monthly schedule needs at least one selected month.
    #[error("monthly schedule requires at least one selected month")]
    EmptyMonths,
}
