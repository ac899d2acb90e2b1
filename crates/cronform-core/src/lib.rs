//! # Cronform Core
//!
//! Data model and error types shared by the cronform crates: the four
//! schedule shapes, the time-of-day value type, and the error taxonomy for
//! parsing and generation. Everything here is a plain value — configs are
//! created per call, carry no shared state, and cross API boundaries by
//! value.

pub mod error;
pub mod schedule;

pub use error::{CronField, GenerateError, ParseError, Result};
pub use schedule::{DayTime, ScheduleConfig, ScheduleType};
