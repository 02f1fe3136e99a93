//! Conversions between [`ClockTime`] and plain hour counts.
//!
//! Integers are whole hours. Reals are split into a floored hour part and a
//! truncated minute part, so a negative input such as `-0.25` becomes
//! `-1` hours and `45` minutes.

use crate::domain::clock_time::ClockTime;
use crate::utils::error::{Result, WorkingTimeError};

pub fn from_whole_hours(hours: i32) -> ClockTime {
    ClockTime::from_hours(hours)
}

pub fn from_fractional_hours(time: f64) -> ClockTime {
    let full_hours = time.floor();
    let minutes = (time - full_hours) * 60.0;
    // `as` truncates toward zero and saturates on overflow or NaN
    ClockTime::new(full_hours as i32, minutes as i32)
}

pub fn to_fractional_hours(time: ClockTime) -> f64 {
    f64::from(time.hours()) + f64::from(time.minutes()) / 60.0
}

/// Numeric types that know how to become a [`ClockTime`].
///
/// The path is picked by the declared type: integer types never go through
/// the fractional split.
pub trait ToClockTime {
    fn to_clock_time(self) -> ClockTime;
}

impl ToClockTime for i32 {
    fn to_clock_time(self) -> ClockTime {
        from_whole_hours(self)
    }
}

impl ToClockTime for i16 {
    fn to_clock_time(self) -> ClockTime {
        from_whole_hours(i32::from(self))
    }
}

impl ToClockTime for u8 {
    fn to_clock_time(self) -> ClockTime {
        from_whole_hours(i32::from(self))
    }
}

impl ToClockTime for f64 {
    fn to_clock_time(self) -> ClockTime {
        from_fractional_hours(self)
    }
}

impl ToClockTime for f32 {
    fn to_clock_time(self) -> ClockTime {
        from_fractional_hours(f64::from(self))
    }
}

pub fn to_clock_time<T: ToClockTime>(value: T) -> ClockTime {
    value.to_clock_time()
}

/// Parses an hour count typed by a user. Text without a decimal point or an
/// exponent is read as an integer and takes the whole-hour path.
pub fn parse_hours(text: &str) -> Result<ClockTime> {
    let text = text.trim();
    let invalid = |reason: String| WorkingTimeError::InvalidTimeFormat {
        value: text.to_string(),
        reason,
    };

    if text.contains(['.', 'e', 'E']) {
        let value = text
            .parse::<f64>()
            .map_err(|e| invalid(format!("not a number of hours: {}", e)))?;
        Ok(value.to_clock_time())
    } else {
        let value = text
            .parse::<i32>()
            .map_err(|e| invalid(format!("not a whole number of hours: {}", e)))?;
        Ok(value.to_clock_time())
    }
}
