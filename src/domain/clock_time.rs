use crate::domain::conversion;
use crate::utils::error::{Result, WorkingTimeError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

/// An hours/minutes pair.
///
/// Neither field is clamped: subtraction may yield negative hours, and the
/// ordering is plain lexicographic over `(hours, minutes)` with no wraparound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    hours: i32,
    minutes: i32,
}

impl ClockTime {
    pub const fn new(hours: i32, minutes: i32) -> Self {
        Self { hours, minutes }
    }

    /// Whole-hour mark.
    pub const fn from_hours(hours: i32) -> Self {
        Self::new(hours, 0)
    }

    pub const fn hours(&self) -> i32 {
        self.hours
    }

    pub const fn minutes(&self) -> i32 {
        self.minutes
    }

    pub fn to_fractional_hours(self) -> f64 {
        conversion::to_fractional_hours(self)
    }
}

impl From<Option<i32>> for ClockTime {
    fn from(hours: Option<i32>) -> Self {
        Self::from_hours(hours.unwrap_or_default())
    }
}

impl From<chrono::NaiveTime> for ClockTime {
    fn from(time: chrono::NaiveTime) -> Self {
        use chrono::Timelike;
        // hour() < 24 and minute() < 60 always fit
        Self::new(time.hour() as i32, time.minute() as i32)
    }
}

impl Sub for ClockTime {
    type Output = ClockTime;

    fn sub(self, other: ClockTime) -> ClockTime {
        conversion::from_fractional_hours(
            conversion::to_fractional_hours(self) - conversion::to_fractional_hours(other),
        )
    }
}

fn write_padded(f: &mut fmt::Formatter<'_>, value: i32) -> fmt::Result {
    let sign = if value < 0 { "-" } else { "" };
    write!(f, "{}{:02}", sign, value.unsigned_abs())
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // each field carries its own sign
        write_padded(f, self.hours)?;
        f.write_str(":")?;
        write_padded(f, self.minutes)
    }
}

impl FromStr for ClockTime {
    type Err = WorkingTimeError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: &str| WorkingTimeError::InvalidTimeFormat {
            value: s.to_string(),
            reason: reason.to_string(),
        };

        let (hours, minutes) = s
            .trim()
            .split_once(':')
            .ok_or_else(|| invalid("expected HH:MM"))?;

        let hours = hours
            .parse::<i32>()
            .map_err(|e| invalid(&format!("hours: {}", e)))?;
        let minutes = minutes
            .parse::<i32>()
            .map_err(|e| invalid(&format!("minutes: {}", e)))?;

        Ok(Self::new(hours, minutes))
    }
}

impl TryFrom<String> for ClockTime {
    type Error = WorkingTimeError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(time: ClockTime) -> Self {
        time.to_string()
    }
}
