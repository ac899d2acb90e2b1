//! Schedule definitions — the structured counterpart of cron text.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// The four schedule shapes the editor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleType {
    Minutes,
    Daily,
    Weekly,
    Monthly,
}

impl fmt::Display for ScheduleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScheduleType::Minutes => "minutes",
            ScheduleType::Daily => "daily",
            ScheduleType::Weekly => "weekly",
            ScheduleType::Monthly => "monthly",
        };
        f.write_str(name)
    }
}

/// A time of day with minute precision.
///
/// Parsed from `"HH:MM"` (an unpadded hour is accepted) and always rendered
/// zero-padded. Serialized as that string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DayTime {
    pub hour: u32,
    pub minute: u32,
}

impl DayTime {
    /// Build a time of day, rejecting out-of-range components.
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        (hour <= 23 && minute <= 59).then_some(Self { hour, minute })
    }
}

impl fmt::Display for DayTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for DayTime {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let time = NaiveTime::parse_from_str(s.trim(), "%H:%M")
            .map_err(|_| format!("invalid time of day: {s:?}"))?;
        Ok(Self {
            hour: time.hour(),
            minute: time.minute(),
        })
    }
}

impl TryFrom<String> for DayTime {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<DayTime> for String {
    fn from(time: DayTime) -> Self {
        time.to_string()
    }
}

/// A structured schedule configuration. Exactly one variant is active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ScheduleConfig {
    /// Run every N minutes.
    Minutes {
        /// Interval in minutes, 1–59. Clamped on generation.
        interval: u32,
    },
    /// Run at one or more fixed times each day.
    Daily {
        /// Times to run, in display order.
        times: Vec<DayTime>,
    },
    /// Run weekly on the selected weekdays.
    Weekly {
        time: DayTime,
        /// Selected weekdays, 0 = Sunday through 6 = Saturday.
        days: BTreeSet<u32>,
    },
    /// Run monthly on the selected days of the selected months.
    Monthly {
        time: DayTime,
        /// Selected days of month, 1–31.
        days: BTreeSet<u32>,
        /// Selected months, 1 = January through 12 = December.
        months: BTreeSet<u32>,
    },
}

impl ScheduleConfig {
    /// Which shape this configuration is.
    pub fn schedule_type(&self) -> ScheduleType {
        match self {
            ScheduleConfig::Minutes { .. } => ScheduleType::Minutes,
            ScheduleConfig::Daily { .. } => ScheduleType::Daily,
            ScheduleConfig::Weekly { .. } => ScheduleType::Weekly,
            ScheduleConfig::Monthly { .. } => ScheduleType::Monthly,
        }
    }

    /// The editor's starting configuration for each shape.
    pub fn default_for(schedule_type: ScheduleType) -> Self {
        let nine = DayTime { hour: 9, minute: 0 };
        match schedule_type {
            ScheduleType::Minutes => ScheduleConfig::Minutes { interval: 5 },
            ScheduleType::Daily => ScheduleConfig::Daily { times: vec![nine] },
            // Monday through Friday
            ScheduleType::Weekly => ScheduleConfig::Weekly {
                time: nine,
                days: (1..=5).collect(),
            },
            // First day of every month
            ScheduleType::Monthly => ScheduleConfig::Monthly {
                time: nine,
                days: BTreeSet::from([1]),
                months: (1..=12).collect(),
            },
        }
    }
}
