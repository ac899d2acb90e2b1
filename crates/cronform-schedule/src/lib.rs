//! # Cronform Schedule
//!
//! Bidirectional translator between structured schedule shapes and
//! POSIX-style five-field cron text.
//!
//! ## Architecture
//! ```text
//! ScheduleConfig ──generate──▶ CronText
//!   ├── Minutes:  */N * * * *
//!   ├── Daily:    m h * * *          (one line per time)
//!   ├── Weekly:   m h * * MON-FRI
//!   └── Monthly:  m h 1-5 JAN-MAR *
//!
//! CronText ──normalize──▶ classify ──validate──▶ ScheduleConfig
//! ```
//!
//! Every function is pure and synchronous; the crate performs no I/O and
//! holds no state, so everything is safely callable from any thread.

pub mod generate;
pub mod names;
pub mod normalize;
pub mod parse;
pub mod preview;
pub mod ranges;
pub mod validate;

pub use generate::{CronText, generate};
pub use names::NameTable;
pub use parse::parse;
pub use preview::{next_occurrence, upcoming};
